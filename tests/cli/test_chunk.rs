//! Tests for the chunk CLI command
//!
//! - Human and JSON output
//! - Command-line overrides on top of configuration
//! - Exit codes for partial and failed runs

use crate::common::PageDir;
use clap::Parser;
use pdfchunk::cli::commands::chunk::{execute, ChunkArgs, LayoutArg};
use pdfchunk::cli::{exit_code, Cli, Commands, OutputFormat};
use pdfchunk::core::config::Config;
use pdfchunk::core::types::RunStatus;

fn args_for(fixture: &PageDir) -> ChunkArgs {
    ChunkArgs {
        input_dir: Some(fixture.pages_dir()),
        output_dir: Some(fixture.chunks_dir()),
        quiet: true,
        ..Default::default()
    }
}

/// Test chunking with human output
#[test]
fn test_chunk_human() {
    let fixture = PageDir::with_pages(&[("doc", 0, "Hello world")]);

    let result = execute(args_for(&fixture), Config::default(), OutputFormat::Human);

    assert!(result.is_ok(), "chunk should succeed: {:?}", result.err());
    assert_eq!(result.unwrap(), RunStatus::Success);
    assert_eq!(fixture.chunk_files(), vec!["doc_page_0_chunks.json"]);
}

/// Test chunking with JSON output
#[test]
fn test_chunk_json() {
    let fixture = PageDir::with_pages(&[("doc", 0, "Hello world")]);

    let result = execute(args_for(&fixture), Config::default(), OutputFormat::Json);

    assert_eq!(result.unwrap(), RunStatus::Success);
}

/// Test that size and layout flags reach the pipeline
#[test]
fn test_chunk_overrides() {
    let fixture = PageDir::with_pages(&[("doc", 0, "first line\nsecond line"), ("doc", 1, "x")]);
    let args = ChunkArgs {
        min_chars: Some(5),
        max_chars: Some(12),
        layout: Some(LayoutArg::PerDocument),
        ..args_for(&fixture)
    };

    execute(args, Config::default(), OutputFormat::Human).unwrap();

    assert_eq!(fixture.chunk_files(), vec!["doc_chunks.json"]);
    let chunks = fixture.read_chunks("doc_chunks.json");
    let ids: Vec<&str> = chunks.iter().map(|c| c.chunk_id.as_str()).collect();
    assert_eq!(ids, vec!["doc_0_0", "doc_0_1", "doc_1_0"]);
}

/// Test flattening paragraphs from the command line
#[test]
fn test_chunk_flatten_paragraphs() {
    let fixture = PageDir::with_pages(&[("doc", 0, "first line\nsecond line")]);
    let args = ChunkArgs {
        min_chars: Some(5),
        max_chars: Some(12),
        flatten_paragraphs: true,
        ..args_for(&fixture)
    };

    execute(args, Config::default(), OutputFormat::Human).unwrap();

    let chunks = fixture.read_chunks("doc_page_0_chunks.json");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "first line second line");
}

/// Test that invalid thresholds are rejected before running
#[test]
fn test_chunk_invalid_thresholds() {
    let fixture = PageDir::with_pages(&[("doc", 0, "text")]);
    let args = ChunkArgs {
        min_chars: Some(700),
        ..args_for(&fixture)
    };

    let result = execute(args, Config::default(), OutputFormat::Human);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Minimum chunk size"));
    assert!(fixture.chunk_files().is_empty());
}

/// Test that flags can repair thresholds that are only invalid in config
#[test]
fn test_chunk_overrides_fix_config_thresholds() {
    let fixture = PageDir::with_pages(&[("doc", 0, "Hello world")]);
    let mut config = Config::default();
    config.chunking.min_chars = 700;
    assert!(config.validate().is_err());

    let args = ChunkArgs {
        max_chars: Some(1000),
        ..args_for(&fixture)
    };

    let status = execute(args, config, OutputFormat::Human).unwrap();

    assert_eq!(status, RunStatus::Success);
    assert_eq!(fixture.chunk_files(), vec!["doc_page_0_chunks.json"]);
}

/// Test partial success and its exit code
#[test]
fn test_chunk_partial_success() {
    let fixture = PageDir::with_pages(&[("doc", 0, "text")]);
    fixture.write_raw("bad.json", "{");

    let status = execute(args_for(&fixture), Config::default(), OutputFormat::Json).unwrap();

    assert_eq!(status, RunStatus::PartialSuccess);
    assert_eq!(exit_code(status), 2);
}

/// Test failure when nothing could be written
#[test]
fn test_chunk_failure() {
    let fixture = PageDir::new();
    fixture.write_raw("bad.json", "{");

    let status = execute(args_for(&fixture), Config::default(), OutputFormat::Human).unwrap();

    assert_eq!(status, RunStatus::Failure);
    assert_eq!(exit_code(status), 1);
}

/// Test that a missing input directory is an error
#[test]
fn test_chunk_missing_input_dir() {
    let fixture = PageDir::new();
    let args = ChunkArgs {
        input_dir: Some(fixture.path().join("missing")),
        ..args_for(&fixture)
    };

    assert!(execute(args, Config::default(), OutputFormat::Human).is_err());
}

/// Test argument parsing for the chunk subcommand
#[test]
fn test_chunk_argument_parsing() {
    let cli = Cli::try_parse_from([
        "pdfchunk",
        "--format",
        "json",
        "chunk",
        "--input-dir",
        "pages",
        "--pdf",
        "a.pdf",
        "--pdf",
        "b.pdf",
        "--min-chars",
        "100",
        "--layout",
        "per-document",
        "--flatten-paragraphs",
        "-q",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    let Commands::Chunk(args) = cli.command else {
        panic!("expected chunk command");
    };
    assert_eq!(args.pdfs.len(), 2);
    assert_eq!(args.min_chars, Some(100));
    assert_eq!(args.layout, Some(LayoutArg::PerDocument));
    assert!(args.flatten_paragraphs);
    assert!(args.quiet);
}

/// Test exit code mapping
#[test]
fn test_exit_codes() {
    assert_eq!(exit_code(RunStatus::Success), 0);
    assert_eq!(exit_code(RunStatus::PartialSuccess), 2);
    assert_eq!(exit_code(RunStatus::Failure), 1);
}
