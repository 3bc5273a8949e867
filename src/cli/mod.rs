//! CLI adapter for pdfchunk
//!
//! Provides the command-line interface over the chunking pipeline.
//! Depends on `core/`; nothing in `core/` depends on it.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::types::RunStatus;

/// pdfchunk - PDF pages to context-enriched chunks
///
/// Reads per-page JSON files extracted from PDFs, packs page text into
/// size-bounded chunks and stitches neighbor context across each
/// document.
#[derive(Parser, Debug)]
#[command(name = "pdfchunk")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Chunk PDF page text for retrieval", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chunk every page file in the input directory
    Chunk(commands::ChunkArgs),

    /// Extract a PDF into per-page JSON files
    Extract(commands::ExtractArgs),

    /// Show the effective configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  pdfchunk completions bash > ~/.local/share/bash-completion/completions/pdfchunk
    ///   zsh:   pdfchunk completions zsh > ~/.zfunc/_pdfchunk
    ///   fish:  pdfchunk completions fish > ~/.config/fish/completions/pdfchunk.fish
    Completions(commands::CompletionsArgs),
}

/// Process exit code for a run outcome
pub fn exit_code(status: RunStatus) -> i32 {
    match status {
        RunStatus::Success => 0,
        RunStatus::PartialSuccess => 2,
        RunStatus::Failure => 1,
    }
}

/// Run the CLI with the provided arguments.
///
/// Returns the outcome of the command; commands other than `chunk`
/// either succeed or return an error.
pub fn run(cli: Cli) -> Result<RunStatus, Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::xdg::XdgDirs;

    // Handle completions command early (doesn't need configuration)
    if let Commands::Completions(args) = cli.command {
        commands::completions::execute(args)?;
        return Ok(RunStatus::Success);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;

    match cli.command {
        Commands::Chunk(args) => commands::chunk::execute(args, config, cli.format),
        Commands::Extract(args) => {
            commands::extract::execute(args, &config, cli.format).map(|()| RunStatus::Success)
        }
        Commands::ShowConfig(args) => {
            commands::config::execute(args, &config, &xdg, cli.format).map(|()| RunStatus::Success)
        }
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
