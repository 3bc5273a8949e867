//! pdfchunk CLI - chunk PDF page text for retrieval
//!
//! # Examples
//!
//! ```bash
//! # Chunk every page file under the default input directory
//! pdfchunk chunk
//!
//! # Extract a PDF first, then chunk with custom sizes
//! pdfchunk chunk --pdf reports/annual.pdf --min-chars 300 --max-chars 900
//!
//! # Extract a PDF into page files only
//! pdfchunk extract reports/annual.pdf
//!
//! # Show configuration
//! pdfchunk show-config
//! ```
//!
//! Exit codes: 0 on success, 2 when some inputs were skipped,
//! 1 when nothing could be produced or the run failed.

use clap::Parser;
use pdfchunk::cli::output::print_error;
use pdfchunk::cli::{exit_code, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env("PDFCHUNK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "pdfchunk=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(cli) {
        Ok(status) => std::process::exit(exit_code(status)),
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
