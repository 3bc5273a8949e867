// UTF-8 tests: sizes are counted in characters

use crate::common::{assert_valid_chunks, run_pipeline, PageDir, Utf8TestData};
use pdfchunk::core::chunking::ChunkBuilder;

#[test]
fn test_multibyte_paragraphs_count_characters() {
    let data = Utf8TestData::new();
    let builder = ChunkBuilder::new(5, 40);

    let chunks = builder.build(&data.multibyte);
    let rejoined = chunks.join(" ");

    assert_eq!(rejoined, data.multibyte.join(" "));
    for c in &chunks[..chunks.len() - 1] {
        assert!(c.chars().count() >= 5);
    }
}

#[test]
fn test_emoji_page_char_count() {
    let data = Utf8TestData::new();
    let text = data.emoji.join("\n");
    let fixture = PageDir::with_pages(&[("emoji", 0, text.as_str())]);

    let report = run_pipeline(&fixture.config(5, 20));
    assert!(report.chunks_written > 0);

    let chunks = fixture.read_chunks("emoji_page_0_chunks.json");
    assert_valid_chunks(&chunks);
    assert_eq!(chunks[0].text, "Hello 👋 World");
    assert_eq!(chunks[0].char_count, 13);
}

#[test]
fn test_cjk_text_is_kept_verbatim_in_output() {
    let fixture = PageDir::with_pages(&[("cjk", 0, "中文测试\nこんにちは世界")]);
    run_pipeline(&fixture.config(2, 10));

    let raw =
        std::fs::read_to_string(fixture.chunks_dir().join("cjk_page_0_chunks.json")).unwrap();
    // Written as UTF-8, not \u escapes
    assert!(raw.contains("中文测试"));

    let chunks = fixture.read_chunks("cjk_page_0_chunks.json");
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].char_count, 4);
    assert_eq!(chunks[1].char_count, 7);
}
