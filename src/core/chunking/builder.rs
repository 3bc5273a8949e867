//! Greedy paragraph packing.
//!
//! Packs paragraphs, in order, into chunks whose size falls between
//! a minimum and a maximum character count. Paragraphs are joined
//! with a single space and are never split.
//!
//! # Example
//!
//! ```
//! use pdfchunk::core::chunking::ChunkBuilder;
//!
//! let builder = ChunkBuilder::new(200, 600);
//! let paragraphs = ["A".repeat(300), "B".repeat(300), "C".repeat(300)];
//! let chunks = builder.build(&paragraphs);
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].chars().count(), 601);
//! assert_eq!(chunks[1], "C".repeat(300));
//! ```

/// Size-bounded chunk builder.
///
/// All sizes are measured in **characters**, not bytes.
#[derive(Debug, Clone)]
pub struct ChunkBuilder {
    /// A buffer shorter than this is never emitted mid-stream
    min_chars: usize,

    /// Packing stops before the buffer would pass this size
    max_chars: usize,
}

impl ChunkBuilder {
    /// Create a new builder with the given thresholds.
    ///
    /// # Panics
    ///
    /// Panics if `min_chars` is 0 or if `min_chars >= max_chars`.
    ///
    /// # Example
    ///
    /// ```
    /// use pdfchunk::core::chunking::ChunkBuilder;
    ///
    /// let builder = ChunkBuilder::new(200, 600);
    /// assert_eq!(builder.min_chars(), 200);
    /// assert_eq!(builder.max_chars(), 600);
    /// ```
    pub fn new(min_chars: usize, max_chars: usize) -> Self {
        assert!(min_chars > 0, "min_chars must be > 0");
        assert!(min_chars < max_chars, "min_chars must be < max_chars");

        Self {
            min_chars,
            max_chars,
        }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Pack paragraphs into chunks.
    ///
    /// A paragraph joins the current buffer while
    /// `len(buffer) + len(paragraph) <= max_chars` (the joining space
    /// is not counted). Otherwise the buffer is emitted if it has
    /// reached `min_chars` and the paragraph starts a new buffer;
    /// if it has not, the paragraph is appended anyway and the chunk
    /// runs over `max_chars`. Whatever remains at the end is emitted
    /// regardless of size.
    ///
    /// Blank paragraphs carry no text and are ignored. The output is
    /// a pure function of the input and the thresholds.
    pub fn build<S: AsRef<str>>(&self, paragraphs: &[S]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_len = 0;

        for paragraph in paragraphs {
            let paragraph = paragraph.as_ref();
            if paragraph.trim().is_empty() {
                continue;
            }
            let paragraph_len = paragraph.chars().count();

            if buffer_len + paragraph_len > self.max_chars && buffer_len >= self.min_chars {
                chunks.push(buffer.trim().to_string());
                buffer.clear();
                buffer_len = 0;
            }

            if !buffer.is_empty() {
                buffer.push(' ');
                buffer_len += 1;
            }
            buffer.push_str(paragraph);
            buffer_len += paragraph_len;
        }

        let tail = buffer.trim();
        if !tail.is_empty() {
            chunks.push(tail.to_string());
        }

        chunks
    }
}
