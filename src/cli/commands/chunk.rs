//! Chunk command - run the chunking pipeline

use crate::cli::output::{
    colors, format_duration, format_status_colored, print_header, skip_label,
};
use crate::cli::OutputFormat;
use crate::core::config::{Config, OutputLayout};
use crate::core::pipeline::ChunkingPipeline;
use crate::core::types::{RunReport, RunStatus};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

/// Output layout as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// One chunk file per page file
    PerSourceFile,
    /// One chunk file per document
    PerDocument,
}

impl From<LayoutArg> for OutputLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::PerSourceFile => OutputLayout::PerSourceFile,
            LayoutArg::PerDocument => OutputLayout::PerDocument,
        }
    }
}

/// Arguments for the chunk command
#[derive(Args, Debug, Default)]
pub struct ChunkArgs {
    /// Directory containing per-page JSON files
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving chunk files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// PDF to extract into the input directory first (can be specified multiple times)
    #[arg(long = "pdf", value_name = "FILE")]
    pub pdfs: Vec<PathBuf>,

    /// Minimum characters before a chunk may be emitted
    #[arg(long)]
    pub min_chars: Option<usize>,

    /// Soft upper bound on characters per chunk
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// How chunk files are partitioned
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Normalize each page as a whole instead of splitting on newlines first
    #[arg(long)]
    pub flatten_paragraphs: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl ChunkArgs {
    /// Overlay command-line values on a loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.input_dir {
            config.paths.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.paths.output_dir = dir.clone();
        }
        config.paths.pdf_sources.extend(self.pdfs.iter().cloned());

        if let Some(n) = self.min_chars {
            config.chunking.min_chars = n;
        }
        if let Some(n) = self.max_chars {
            config.chunking.max_chars = n;
        }
        if self.flatten_paragraphs {
            config.chunking.preserve_paragraphs = false;
        }
        if let Some(layout) = self.layout {
            config.output.layout = layout.into();
        }
    }
}

/// Chunking result response
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub status: RunStatus,
    pub input_dir: String,
    pub output_dir: String,
    #[serde(flatten)]
    pub report: RunReport,
}

/// Execute the chunk command
pub fn execute(
    args: ChunkArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<RunStatus, Box<dyn std::error::Error>> {
    args.apply(&mut config);
    config.validate()?;
    config.log_config();

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Chunking {} into {}...",
            colors::file_path(&config.paths.input_dir.display().to_string()),
            colors::file_path(&config.paths.output_dir.display().to_string())
        );
    }

    let pipeline = ChunkingPipeline::new(&config)?;
    let report = pipeline.run()?;
    let status = report.status();

    let response = ChunkResponse {
        status,
        input_dir: config.paths.input_dir.display().to_string(),
        output_dir: config.paths.output_dir.display().to_string(),
        report,
    };

    match format {
        OutputFormat::Human => print_human(&response),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(status)
}

fn print_human(response: &ChunkResponse) {
    let report = &response.report;

    println!(
        "{} {} documents ({} pages) into {} chunks in {}",
        colors::success("Chunked"),
        colors::number(&report.documents.to_string()),
        colors::number(&report.pages_processed.to_string()),
        colors::number(&report.chunks_written.to_string()),
        colors::number(&format_duration(report.duration_ms as f64 / 1000.0))
    );
    println!(
        "Output: {} files in {}",
        colors::number(&report.output_files.len().to_string()),
        colors::file_path(&response.output_dir)
    );

    if !report.skipped.is_empty() {
        println!();
        print_header(&format!("Skipped ({}):", report.skipped.len()));
        for item in &report.skipped {
            println!(
                "  {} {} {}",
                colors::warning(&format!("[{}]", skip_label(item.kind))),
                colors::file_path(&item.path),
                colors::dim(&item.reason)
            );
        }
    }

    println!("Status: {}", format_status_colored(response.status));
}
