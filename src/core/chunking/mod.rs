//! Text chunking module.
//!
//! Turns page text into size-bounded chunks:
//!
//! - whitespace normalization
//! - paragraph splitting
//! - greedy paragraph packing between a minimum and maximum size
//! - neighbor-context stitching across a document
//!
//! # Sizes
//!
//! All lengths are measured in **characters**, not bytes, so
//! multi-byte text is never split or miscounted. Paragraphs are
//! never split internally; a chunk may exceed the maximum when a
//! single paragraph does, or when the buffer is still below the
//! minimum.

pub mod builder;
pub mod normalizer;
pub mod paragraphs;
pub mod stitcher;

pub use builder::ChunkBuilder;
pub use normalizer::normalize_text;
pub use paragraphs::split_paragraphs;
pub use stitcher::stitch_context;
