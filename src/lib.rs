//! pdfchunk - PDF pages to context-enriched chunks
//!
//! Turns per-page text extracted from PDFs into size-bounded chunks
//! ready for embedding and retrieval. Each chunk carries its
//! provenance (document, page, source path), a deterministic id and
//! the text of its neighbors within the same document.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - chunking (normalize, split, pack, stitch)
//!   - extract (PDF to page records)
//!   - storage (page files, chunk files, validation)
//!   - pipeline (discovery, grouping, run driver)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Properties
//!
//! - Character-based sizes (never splits a code point)
//! - Deterministic output: same input, byte-identical files
//! - Per-file failures are reported, never fatal

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{ChunkError, Result};
pub use crate::core::pipeline::ChunkingPipeline;
pub use crate::core::types::*;
