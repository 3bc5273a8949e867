//! Paragraph splitting.

/// Split text into non-empty, trimmed paragraphs in input order.
///
/// Splits on newline characters (`\r\n`, `\r` and `\n` alike). Text
/// without line breaks comes back as a single paragraph, so the
/// result is never empty unless the input is blank.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
