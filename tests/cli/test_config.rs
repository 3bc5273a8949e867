//! Tests for show-config CLI command

use pdfchunk::cli::commands::config::{execute, ConfigArgs, ConfigResponse};
use pdfchunk::cli::OutputFormat;
use pdfchunk::core::config::Config;
use pdfchunk::core::xdg::XdgDirs;
use std::path::PathBuf;

fn xdg() -> XdgDirs {
    XdgDirs {
        config_dir: PathBuf::from("/tmp/pdfchunk-test-config"),
    }
}

/// Test config command with human output
#[test]
fn test_config_human() {
    let result = execute(
        ConfigArgs { all: false },
        &Config::default(),
        &xdg(),
        OutputFormat::Human,
    );
    assert!(result.is_ok());
}

/// Test config command with JSON output
#[test]
fn test_config_json() {
    let result = execute(
        ConfigArgs { all: true },
        &Config::default(),
        &xdg(),
        OutputFormat::Json,
    );
    assert!(result.is_ok());
}

/// Test the JSON shape of the config response
#[test]
fn test_config_response_shape() {
    let config = Config::default();
    let response = ConfigResponse {
        config_file: Some("/etc/pdfchunk.toml".to_string()),
        config: &config,
    };

    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["config_file"], "/etc/pdfchunk.toml");
    assert_eq!(value["paths"]["input_dir"], "output/parsed_pdf");
    assert_eq!(value["chunking"]["min_chars"], 200);
    assert_eq!(value["chunking"]["max_chars"], 600);
    assert_eq!(value["output"]["layout"], "per_source_file");
}
