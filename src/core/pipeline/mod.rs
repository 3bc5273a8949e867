//! Document chunking pipeline.
//!
//! Drives a full run over a directory of per-page JSON files:
//! discovery, loading, grouping by document, chunking, context
//! stitching and output. Per-file and per-page problems are
//! recorded in the returned `RunReport`; only run-level failures
//! (unusable input or output directory) are errors.

pub mod driver;
pub mod grouping;
pub mod walker;

pub use driver::ChunkingPipeline;
pub use grouping::{group_by_document, LoadedPage};
pub use walker::PageFileWalker;
