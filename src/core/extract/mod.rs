//! PDF text extraction.
//!
//! The pipeline only depends on the `PageExtractor` trait; the
//! default implementation is `PdfExtractor`, backed by the
//! pure-Rust `pdf-extract` crate.

pub mod pdf;

pub use pdf::PdfExtractor;

use crate::core::error::Result;
use crate::core::types::PageRecord;
use std::path::Path;

/// Produces one page record per page of a PDF
pub trait PageExtractor {
    /// Extract every page of `pdf_path`.
    ///
    /// When `document_id` is `None` it is derived from the file name
    /// with [`document_id_from_path`].
    fn extract(&self, pdf_path: &Path, document_id: Option<&str>) -> Result<Vec<PageRecord>>;
}

/// Stable document id for a PDF: lowercased file stem, spaces as `-`
pub fn document_id_from_path(pdf_path: &Path) -> String {
    pdf_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase().replace(' ', "-"))
        .unwrap_or_default()
}
