//! Whitespace normalization for extracted page text.

/// Collapse every run of whitespace into a single space and trim.
///
/// `\r\n` and lone `\r` line endings are whitespace like any other,
/// so the result is always a single line. `None` and blank input
/// both yield an empty string.
pub fn normalize_text(raw: Option<&str>) -> String {
    match raw {
        Some(text) => text.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}
