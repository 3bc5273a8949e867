// Output layouts and paragraph modes

use crate::common::{run_pipeline, PageDir};
use pdfchunk::core::config::OutputLayout;
use pdfchunk::core::types::{ChunkRecord, RunStatus};

#[test]
fn test_per_source_file_layout_mirrors_inputs() {
    let fixture = PageDir::with_pages(&[("doc", 0, "a"), ("doc", 1, "b"), ("memo", 0, "c")]);

    let report = run_pipeline(&fixture.config(200, 600));

    assert_eq!(report.output_files.len(), 3);
    assert_eq!(
        fixture.chunk_files(),
        vec![
            "doc_page_0_chunks.json",
            "doc_page_1_chunks.json",
            "memo_page_0_chunks.json"
        ]
    );
}

#[test]
fn test_per_document_layout_consolidates() {
    let fixture = PageDir::with_pages(&[
        ("doc", 2, "third"),
        ("doc", 0, "first"),
        ("doc", 1, "second"),
        ("memo", 0, "memo text"),
    ]);
    let mut config = fixture.config(200, 600);
    config.output.layout = OutputLayout::PerDocument;

    let report = run_pipeline(&config);

    assert_eq!(report.status(), RunStatus::Success);
    assert_eq!(fixture.chunk_files(), vec!["doc_chunks.json", "memo_chunks.json"]);

    let doc = fixture.read_chunks("doc_chunks.json");
    let ids: Vec<&str> = doc.iter().map(|c| c.chunk_id.as_str()).collect();
    assert_eq!(ids, vec!["doc_0_0", "doc_1_0", "doc_2_0"]);
    assert_eq!(doc[1].context_prev, "first");
    assert_eq!(doc[1].context_next, "third");
}

#[test]
fn test_layouts_produce_same_chunks() {
    let fixture = PageDir::with_pages(&[
        ("doc", 0, "One.\nTwo is longer.\nThree."),
        ("doc", 1, "Four.\nFive."),
    ]);
    let per_file = fixture.config(5, 15);
    let mut per_doc = per_file.clone();
    per_doc.paths.output_dir = fixture.path().join("by-doc");
    per_doc.output.layout = OutputLayout::PerDocument;

    run_pipeline(&per_file);
    run_pipeline(&per_doc);

    let mut split = fixture.read_chunks("doc_page_0_chunks.json");
    split.extend(fixture.read_chunks("doc_page_1_chunks.json"));
    let joined: Vec<ChunkRecord> = serde_json::from_str(
        &std::fs::read_to_string(per_doc.paths.output_dir.join("doc_chunks.json")).unwrap(),
    )
    .unwrap();

    assert_eq!(split, joined);
}

#[test]
fn test_preserve_paragraphs_splits_on_newlines() {
    let fixture = PageDir::with_pages(&[("doc", 0, "first line\nsecond line\nthird")]);

    run_pipeline(&fixture.config(5, 12));

    let texts: Vec<String> = fixture
        .read_chunks("doc_page_0_chunks.json")
        .into_iter()
        .map(|c| c.text)
        .collect();
    assert_eq!(texts, vec!["first line", "second line", "third"]);
}

#[test]
fn test_flattened_page_is_one_paragraph() {
    let fixture = PageDir::with_pages(&[("doc", 0, "first line\nsecond line\nthird")]);
    let mut config = fixture.config(5, 12);
    config.chunking.preserve_paragraphs = false;

    run_pipeline(&config);

    let chunks = fixture.read_chunks("doc_page_0_chunks.json");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "first line second line third");
}

#[test]
fn test_compact_output_when_not_pretty() {
    let fixture = PageDir::with_pages(&[("doc", 0, "text")]);
    let mut config = fixture.config(200, 600);
    config.output.pretty = false;

    run_pipeline(&config);

    let raw =
        std::fs::read_to_string(fixture.chunks_dir().join("doc_page_0_chunks.json")).unwrap();
    assert!(raw.starts_with("[{"));
}
