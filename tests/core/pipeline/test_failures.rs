// Per-file failures are skipped and reported; run-level failures are errors

use crate::common::{run_pipeline, PageDir};
use pdfchunk::core::config::OutputLayout;
use pdfchunk::core::error::ChunkError;
use pdfchunk::core::pipeline::ChunkingPipeline;
use pdfchunk::core::types::{RunStatus, SkipKind};

#[test]
fn test_malformed_json_is_skipped() {
    let fixture = PageDir::with_pages(&[("doc", 0, "good page")]);
    fixture.write_raw("broken.json", "{ not json");

    let report = run_pipeline(&fixture.config(200, 600));

    assert_eq!(report.status(), RunStatus::PartialSuccess);
    assert_eq!(report.files_skipped, 1);
    assert_eq!(report.skipped[0].kind, SkipKind::UnreadableFile);
    assert!(report.skipped[0].path.ends_with("broken.json"));
    assert_eq!(fixture.chunk_files(), vec!["doc_page_0_chunks.json"]);
}

#[test]
fn test_missing_document_id_is_skipped() {
    let fixture = PageDir::with_pages(&[("doc", 0, "good page")]);
    fixture.write_raw("orphan.json", r#"{"page_number": 1, "text": "no owner"}"#);
    fixture.write_raw("blank.json", r#"{"document_id": "  ", "text": "blank owner"}"#);

    let report = run_pipeline(&fixture.config(200, 600));

    assert_eq!(report.files_skipped, 2);
    assert!(report
        .skipped
        .iter()
        .all(|s| s.kind == SkipKind::MissingDocumentId));
    assert_eq!(report.chunks_written, 1);
}

#[test]
fn test_invalid_field_is_skipped() {
    let fixture = PageDir::with_pages(&[("doc", 0, "good page")]);
    fixture.write_raw(
        "negative.json",
        r#"{"document_id": "neg", "text": "x", "char_count": -4}"#,
    );

    let report = run_pipeline(&fixture.config(200, 600));

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].kind, SkipKind::InvalidPage);
    assert!(report.skipped[0].reason.contains("char_count"));
}

#[test]
fn test_document_id_with_path_is_skipped() {
    let fixture = PageDir::with_pages(&[("doc", 0, "good page")]);
    fixture.write_raw(
        "escaped_page_0.json",
        r#"{"document_id": "../../escaped", "page_number": 0, "text": "elsewhere"}"#,
    );
    let output_dir = fixture.path().join("out").join("chunks");
    let mut config = fixture.config(200, 600);
    config.paths.output_dir = output_dir.clone();
    config.output.layout = OutputLayout::PerDocument;

    let report = run_pipeline(&config);

    assert_eq!(report.status(), RunStatus::PartialSuccess);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].kind, SkipKind::InvalidPage);
    assert!(report.skipped[0].reason.contains("document_id"));

    assert_eq!(report.output_files, vec![output_dir.join("doc_chunks.json")]);
    assert!(!fixture.path().join("escaped_chunks.json").exists());
    assert!(!fixture.path().join("out").join("escaped_chunks.json").exists());
}

#[test]
fn test_empty_pages_are_skipped() {
    let fixture = PageDir::with_pages(&[
        ("doc", 0, "before"),
        ("doc", 1, "  \n\t  "),
        ("doc", 2, "after"),
    ]);
    fixture.write_raw(
        "doc_page_3.json",
        r#"{"document_id": "doc", "page_number": 3, "text": null}"#,
    );

    let report = run_pipeline(&fixture.config(200, 600));

    assert_eq!(report.pages_processed, 2);
    assert_eq!(report.pages_skipped, 2);
    assert!(!fixture.chunks_dir().join("doc_page_1_chunks.json").exists());

    // Stitching skips over the empty page
    let before = fixture.read_chunks("doc_page_0_chunks.json");
    assert_eq!(before[0].context_next, "after");
}

#[test]
fn test_all_pages_unusable_is_failure() {
    let fixture = PageDir::with_pages(&[("doc", 0, "   ")]);
    fixture.write_raw("broken.json", "[]");

    let report = run_pipeline(&fixture.config(200, 600));

    assert_eq!(report.status(), RunStatus::Failure);
    assert!(report.output_files.is_empty());
    assert!(fixture.chunk_files().is_empty());
}

#[test]
fn test_non_json_and_hidden_files_are_ignored() {
    let fixture = PageDir::with_pages(&[("doc", 0, "page")]);
    fixture.write_raw("notes.txt", "not a page");
    fixture.write_raw(".hidden.json", "{ broken");

    let report = run_pipeline(&fixture.config(200, 600));

    assert_eq!(report.status(), RunStatus::Success);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_missing_input_dir_is_error() {
    let fixture = PageDir::new();
    let mut config = fixture.config(200, 600);
    config.paths.input_dir = fixture.path().join("nowhere");

    let result = ChunkingPipeline::new(&config).unwrap().run();

    assert!(matches!(result, Err(ChunkError::InvalidPath(_))));
}

#[test]
fn test_uncreatable_output_dir_is_error() {
    let fixture = PageDir::with_pages(&[("doc", 0, "page")]);
    let blocker = fixture.path().join("blocker");
    std::fs::write(&blocker, "file, not a directory").unwrap();
    let mut config = fixture.config(200, 600);
    config.paths.output_dir = blocker.join("chunks");

    let result = ChunkingPipeline::new(&config).unwrap().run();

    assert!(matches!(result, Err(ChunkError::OutputError(_))));
}

#[test]
fn test_invalid_thresholds_rejected() {
    let fixture = PageDir::new();

    assert!(ChunkingPipeline::new(&fixture.config(0, 10)).is_err());
    assert!(ChunkingPipeline::new(&fixture.config(50, 50)).is_err());
    assert!(ChunkingPipeline::new(&fixture.config(60, 50)).is_err());
}
