//! Per-page JSON files.
//!
//! One file per PDF page, named `{document_id}_page_{page_number}.json`,
//! all in a single directory. The store can also materialize those
//! files from a PDF when a document has none on disk yet.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{ChunkError, Result};
use crate::core::extract::{document_id_from_path, PageExtractor};
use crate::core::storage::validator::{describe, validate_document_id, validate_page};
use crate::core::storage::write_json;
use crate::core::types::{PageNumber, PageRecord, RawPageRecord};

/// `{document_id}_page_{page_number}.json`
static PAGE_FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<doc>.+)_page_(?P<page>-?\d+(?:\.\d+)?)\.json$").unwrap());

/// How `resolve_or_materialize` satisfied a PDF source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Page files were already on disk
    Existing(Vec<PathBuf>),
    /// Page files were extracted from the PDF and written
    Materialized(Vec<PathBuf>),
}

impl Resolution {
    pub fn files(&self) -> &[PathBuf] {
        match self {
            Resolution::Existing(files) | Resolution::Materialized(files) => files,
        }
    }
}

/// Directory of per-page JSON files
#[derive(Debug, Clone)]
pub struct PageStore {
    dir: PathBuf,
    pretty: bool,
}

impl PageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pretty: true,
        }
    }

    /// Pretty-print page files (default true)
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for one page
    pub fn page_file_name(document_id: &str, page_number: PageNumber) -> String {
        format!("{document_id}_page_{page_number}.json")
    }

    /// Document id encoded in a page file name, if it follows the
    /// naming scheme
    pub fn document_id_of(file_name: &str) -> Option<&str> {
        PAGE_FILE_RE
            .captures(file_name)
            .and_then(|caps| caps.name("doc"))
            .map(|m| m.as_str())
    }

    /// Load and validate one page file.
    ///
    /// # Errors
    ///
    /// - `IoError`/`SerdeError` when the file is unreadable or not JSON
    /// - `MissingDocumentId` when the record has no document id
    /// - `InvalidPage` for any other field problem, including a document
    ///   id that cannot be used in a file name
    pub fn read_page(path: &Path) -> Result<PageRecord> {
        let contents = fs::read_to_string(path)?;
        let raw: RawPageRecord = serde_json::from_str(&contents)?;
        let missing_id = raw
            .document_id
            .as_deref()
            .map_or(true, |id| id.trim().is_empty());

        validate_page(raw).map_err(|errors| {
            if missing_id {
                ChunkError::MissingDocumentId(path.display().to_string())
            } else {
                ChunkError::InvalidPage {
                    path: path.display().to_string(),
                    message: describe(&errors),
                }
            }
        })
    }

    /// Write one file per page, creating the directory if needed
    pub fn write_pages(&self, pages: &[PageRecord]) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir)?;

        let mut written = Vec::with_capacity(pages.len());
        for page in pages {
            validate_document_id(&page.document_id)
                .map_err(|e| ChunkError::InvalidPath(e.to_string()))?;
            let path = self
                .dir
                .join(Self::page_file_name(&page.document_id, page.page_number));
            write_json(&path, page, self.pretty)?;
            tracing::info!(
                "Saved page {} ({} chars) to {:?}",
                page.page_number,
                page.char_count,
                path
            );
            written.push(path);
        }

        Ok(written)
    }

    /// Page files already on disk for `document_id`, sorted by name
    pub fn existing_pages(&self, document_id: &str) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if Self::document_id_of(name) == Some(document_id) && entry.path().is_file() {
                files.push(entry.path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Make sure page files exist for the PDF at `pdf_path`.
    ///
    /// The document id is derived from the PDF file name. If any page
    /// file for that document is already in the store it is used as
    /// is; otherwise the extractor runs and its pages are written.
    pub fn resolve_or_materialize(
        &self,
        pdf_path: &Path,
        extractor: &dyn PageExtractor,
    ) -> Result<Resolution> {
        let document_id = document_id_from_path(pdf_path);
        if document_id.is_empty() {
            return Err(ChunkError::InvalidPath(format!(
                "Cannot derive a document id from {}",
                pdf_path.display()
            )));
        }

        let existing = self.existing_pages(&document_id)?;
        if !existing.is_empty() {
            tracing::debug!(
                "Using {} cached page files for '{}'",
                existing.len(),
                document_id
            );
            return Ok(Resolution::Existing(existing));
        }

        tracing::info!("Parsing {:?} as '{}'", pdf_path, document_id);
        let pages = extractor.extract(pdf_path, Some(document_id.as_str()))?;
        let written = self.write_pages(&pages)?;

        Ok(Resolution::Materialized(written))
    }
}
