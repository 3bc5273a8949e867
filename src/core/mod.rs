//! Core domain logic (interface-agnostic)
//!
//! This module contains everything that turns page files into chunk
//! files, independent of the command-line front end.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Page, chunk and run-report records
//! - **xdg**: XDG directory handling
//! - **chunking**: Normalization, paragraph splitting, packing, stitching
//! - **extract**: PDF to page-record extraction
//! - **storage**: Page store, chunk writer, record validation
//! - **pipeline**: Discovery, grouping and the run driver

pub mod chunking;
pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{ChunkError, Result};
pub use pipeline::ChunkingPipeline;
