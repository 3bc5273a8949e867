//! `pdf-extract` backed page extractor.

use std::fs;
use std::panic;
use std::path::Path;

use crate::core::chunking::normalize_text;
use crate::core::error::{ChunkError, Result};
use crate::core::extract::{document_id_from_path, PageExtractor};
use crate::core::types::{PageNumber, PageRecord, PDF_EXTRACT_METHOD};

/// Extracts per-page text with `pdf-extract`.
///
/// Page numbers are zero-based and page text is whitespace
/// normalized before it is stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PageExtractor for PdfExtractor {
    fn extract(&self, pdf_path: &Path, document_id: Option<&str>) -> Result<Vec<PageRecord>> {
        if !pdf_path.is_file() {
            return Err(ChunkError::PdfNotFound(pdf_path.display().to_string()));
        }
        let pdf_path = pdf_path.canonicalize()?;

        let doc_id = match document_id {
            Some(id) => id.to_string(),
            None => document_id_from_path(&pdf_path),
        };

        let bytes = fs::read(&pdf_path).map_err(|e| {
            ChunkError::ExtractionFailed(format!("Failed to read {}: {e}", pdf_path.display()))
        })?;

        // pdf-extract panics on some malformed documents
        let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
            .map_err(|_| {
                ChunkError::ExtractionFailed(format!(
                    "Failed to parse PDF {}: extractor panicked",
                    pdf_path.display()
                ))
            })?
            .map_err(|e| {
                ChunkError::ExtractionFailed(format!(
                    "Failed to parse PDF {}: {e}",
                    pdf_path.display()
                ))
            })?;

        let source_path = pdf_path.to_string_lossy().into_owned();
        let records: Vec<PageRecord> = pages
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                PageRecord::new(
                    doc_id.as_str(),
                    PageNumber::from(index),
                    normalize_text(Some(raw.as_str())),
                    source_path.as_str(),
                )
                .with_extraction_method(PDF_EXTRACT_METHOD)
            })
            .collect();

        tracing::debug!(
            "Extracted {} pages from {:?} as '{}'",
            records.len(),
            pdf_path,
            doc_id
        );

        Ok(records)
    }
}
