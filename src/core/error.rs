//! Error types and error handling for the pdfchunk pipeline.
//!
//! Run-level failures surface as `ChunkError`. Per-file and per-page
//! problems are recorded in the run report instead of aborting the run.

use thiserror::Error;

/// Result type alias for pdfchunk operations
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Main error type for the chunking pipeline
#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("PDF not found: {0}")]
    PdfNotFound(String),

    #[error("PDF extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Invalid page record {path}: {message}")]
    InvalidPage { path: String, message: String },

    #[error("Missing document identifier in {0}")]
    MissingDocumentId(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ChunkError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChunkError::PdfNotFound(_) | ChunkError::InvalidPath(_))
    }

    /// Check if the error was caused by bad input data or settings
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ChunkError::InvalidPage { .. }
                | ChunkError::MissingDocumentId(_)
                | ChunkError::ConfigError(_)
                | ChunkError::SerdeError(_)
                | ChunkError::TomlError(_)
        )
    }
}
