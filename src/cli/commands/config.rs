//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the configuration file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    xdg: &XdgDirs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        config_file: args
            .all
            .then(|| xdg.config_file().to_string_lossy().into_owned()),
        config,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            if let Some(file) = &response.config_file {
                println!("  config_file: {file}");
            }
            println!("  paths:");
            println!("    input_dir: {}", config.paths.input_dir.display());
            println!("    output_dir: {}", config.paths.output_dir.display());
            println!("    pdf_sources: {:?}", config.paths.pdf_sources);
            println!("    include_patterns: {:?}", config.paths.include_patterns);
            println!("    exclude_patterns: {:?}", config.paths.exclude_patterns);
            println!("  chunking:");
            println!("    min_chars: {}", config.chunking.min_chars);
            println!("    max_chars: {}", config.chunking.max_chars);
            println!(
                "    preserve_paragraphs: {}",
                config.chunking.preserve_paragraphs
            );
            println!("  output:");
            println!("    layout: {:?}", config.output.layout);
            println!("    pretty: {}", config.output.pretty);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
