//! Extract command - turn a PDF into per-page JSON files

use crate::cli::output::{colors, format_duration, print_success};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::extract::{document_id_from_path, PageExtractor, PdfExtractor};
use crate::core::storage::{validate_document_id, PageStore};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// PDF file to extract
    pub pdf: PathBuf,

    /// Document ID (default: lowercased file name, spaces as hyphens)
    #[arg(long, short = 'd')]
    pub document_id: Option<String>,

    /// Directory receiving page files (default: configured input directory)
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,
}

/// Extraction result response
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub document_id: String,
    pub source_path: String,
    pub pages: usize,
    pub total_chars: usize,
    pub files: Vec<PathBuf>,
    pub duration_secs: f64,
}

/// Execute the extract command
pub fn execute(
    args: ExtractArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let document_id = args
        .document_id
        .unwrap_or_else(|| document_id_from_path(&args.pdf));
    if document_id.trim().is_empty() {
        return Err(format!(
            "Cannot derive a document ID from '{}'. Pass one with --document-id.",
            args.pdf.display()
        )
        .into());
    }
    validate_document_id(&document_id).map_err(|e| format!("Invalid --document-id: {e}"))?;

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| config.paths.input_dir.clone());

    let pages = PdfExtractor::new().extract(&args.pdf, Some(document_id.as_str()))?;
    let store = PageStore::new(output_dir).with_pretty(config.output.pretty);
    let files = store.write_pages(&pages)?;

    let response = ExtractResponse {
        source_path: pages
            .first()
            .map(|p| p.source_path.clone())
            .unwrap_or_else(|| args.pdf.display().to_string()),
        document_id,
        pages: pages.len(),
        total_chars: pages.iter().map(|p| p.char_count).sum(),
        files,
        duration_secs: start.elapsed().as_secs_f64(),
    };

    match format {
        OutputFormat::Human => {
            print_success(&format!(
                "Extracted {} pages from {}",
                response.pages, response.source_path
            ));
            println!(
                "Document: {} ({} chars) in {}",
                colors::document_id(&response.document_id),
                colors::number(&response.total_chars.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            println!(
                "Page files: {}",
                colors::file_path(&store.dir().display().to_string())
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
