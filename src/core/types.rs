//! Core data types for the pdfchunk pipeline.
//!
//! This module defines the page and chunk records exchanged with
//! the filesystem, plus the structured report returned by a run.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// Extraction method recorded when a page file does not name one
pub const DEFAULT_EXTRACTION_METHOD: &str = "pymupdf";

/// Extraction method written by this crate's own PDF extractor
pub const PDF_EXTRACT_METHOD: &str = "pdf-extract";

/// Page number as stored in page files: integer or float
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageNumber {
    Int(i64),
    Float(f64),
}

impl PageNumber {
    /// Numeric value used for ordering
    pub fn as_f64(&self) -> f64 {
        match *self {
            PageNumber::Int(n) => n as f64,
            PageNumber::Float(f) => f,
        }
    }

    /// Total order over page numbers (NaN sorts last)
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.as_f64().total_cmp(&other.as_f64())
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        PageNumber::Int(0)
    }
}

impl From<usize> for PageNumber {
    fn from(n: usize) -> Self {
        PageNumber::Int(n as i64)
    }
}

impl fmt::Display for PageNumber {
    /// Integral floats keep their trailing `.0` so `3` and `3.0`
    /// produce distinct chunk ids.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PageNumber::Int(n) => write!(f, "{n}"),
            PageNumber::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            PageNumber::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One page of extracted text plus document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Stable ID for the source document
    pub document_id: String,

    /// Page number within the document
    pub page_number: PageNumber,

    /// Page text as produced by the extractor
    pub text: String,

    /// Path of the PDF the page came from
    pub source_path: String,

    /// How the text was obtained
    pub extraction_method: String,

    /// Character count of `text`
    pub char_count: usize,
}

impl PageRecord {
    /// Create a page record, computing `char_count` from `text`
    pub fn new(
        document_id: impl Into<String>,
        page_number: PageNumber,
        text: impl Into<String>,
        source_path: impl Into<String>,
    ) -> Self {
        let text = text.into();
        Self {
            document_id: document_id.into(),
            page_number,
            char_count: text.chars().count(),
            text,
            source_path: source_path.into(),
            extraction_method: DEFAULT_EXTRACTION_METHOD.to_string(),
        }
    }

    pub fn with_extraction_method(mut self, method: impl Into<String>) -> Self {
        self.extraction_method = method.into();
        self
    }
}

/// Page file contents before validation.
///
/// Every field is optional so that a malformed record can be
/// reported field by field instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPageRecord {
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub page_number: Option<PageNumber>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source_path: Option<String>,
    #[serde(default)]
    pub extraction_method: Option<String>,
    #[serde(default)]
    pub char_count: Option<f64>,
}

/// A size-bounded text unit with provenance and neighbor context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub document_id: String,
    pub page_number: PageNumber,
    pub source_path: String,

    /// `{document_id}_{page_number}_{index}`
    pub chunk_id: String,

    pub text: String,

    /// Text of the preceding chunk in the document ("" for the first)
    pub context_prev: String,

    /// Text of the following chunk in the document ("" for the last)
    pub context_next: String,

    /// Character count of `text`
    pub char_count: usize,
}

impl ChunkRecord {
    /// Materialize the `index`-th chunk of `page`
    pub fn new(page: &PageRecord, index: usize, text: String) -> Self {
        Self {
            document_id: page.document_id.clone(),
            page_number: page.page_number,
            source_path: page.source_path.clone(),
            chunk_id: chunk_id(&page.document_id, page.page_number, index),
            char_count: text.chars().count(),
            text,
            context_prev: String::new(),
            context_next: String::new(),
        }
    }
}

/// Deterministic chunk identifier
pub fn chunk_id(document_id: &str, page_number: PageNumber, index: usize) -> String {
    format!("{document_id}_{page_number}_{index}")
}

/// Why an input was left out of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    /// Page file could not be read or parsed
    UnreadableFile,
    /// Page record has no document identifier
    MissingDocumentId,
    /// Page record failed field validation
    InvalidPage,
    /// Page text was empty after normalization
    EmptyPage,
    /// Chunk record failed schema validation
    InvalidChunk,
    /// PDF source could not be turned into page files
    ExtractionFailed,
    /// Chunk file could not be written
    WriteFailed,
}

/// One skipped input, with enough context to find it again
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedItem {
    pub kind: SkipKind,
    pub path: String,
    pub reason: String,
}

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    PartialSuccess,
    Failure,
}

/// Statistics and skip list from one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Run start time (RFC 3339)
    pub started_at: String,

    /// Run duration in milliseconds
    pub duration_ms: u64,

    /// Number of distinct documents seen
    pub documents: usize,

    /// Pages that produced at least one chunk
    pub pages_processed: usize,

    /// Pages skipped (empty text)
    pub pages_skipped: usize,

    /// Page files or PDF sources that could not be loaded
    pub files_skipped: usize,

    /// Chunks written to output files
    pub chunks_written: usize,

    /// Chunks dropped by schema validation
    pub chunks_rejected: usize,

    /// Chunk files written, in write order
    pub output_files: Vec<PathBuf>,

    /// Every skipped item, in the order it was encountered
    pub skipped: Vec<SkippedItem>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            started_at: chrono::Utc::now().to_rfc3339(),
            duration_ms: 0,
            documents: 0,
            pages_processed: 0,
            pages_skipped: 0,
            files_skipped: 0,
            chunks_written: 0,
            chunks_rejected: 0,
            output_files: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Record a skipped item
    pub fn skip(&mut self, kind: SkipKind, path: impl Into<String>, reason: impl Into<String>) {
        match kind {
            SkipKind::UnreadableFile
            | SkipKind::MissingDocumentId
            | SkipKind::InvalidPage
            | SkipKind::ExtractionFailed => self.files_skipped += 1,
            SkipKind::EmptyPage => self.pages_skipped += 1,
            SkipKind::InvalidChunk => self.chunks_rejected += 1,
            SkipKind::WriteFailed => {}
        }
        self.skipped.push(SkippedItem {
            kind,
            path: path.into(),
            reason: reason.into(),
        });
    }

    pub fn status(&self) -> RunStatus {
        if self.skipped.is_empty() {
            RunStatus::Success
        } else if self.output_files.is_empty() {
            RunStatus::Failure
        } else {
            RunStatus::PartialSuccess
        }
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
