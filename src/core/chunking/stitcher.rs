//! Neighbor-context stitching.

use crate::core::types::ChunkRecord;

/// Fill `context_prev`/`context_next` from adjacent chunks.
///
/// `chunks` must hold one document's chunks in page order, so the
/// last chunk of one page links to the first chunk of the next.
/// The first chunk gets an empty `context_prev` and the last an
/// empty `context_next`.
pub fn stitch_context(chunks: &mut [ChunkRecord]) {
    let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();

    for (i, chunk) in chunks.iter_mut().enumerate() {
        chunk.context_prev = match i.checked_sub(1) {
            Some(prev) => texts[prev].clone(),
            None => String::new(),
        };
        chunk.context_next = texts.get(i + 1).cloned().unwrap_or_default();
    }
}
