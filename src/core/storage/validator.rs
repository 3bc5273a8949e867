//! Record validation.
//!
//! Validation never panics or short-circuits: every problem with a
//! record is collected into a list of `FieldError`s so callers can
//! log the full picture and decide what to skip.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{ChunkRecord, PageRecord, RawPageRecord, DEFAULT_EXTRACTION_METHOD};

/// One invalid field and what is wrong with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Join field errors into one log-friendly line
pub fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check that a document id can be used as part of a file name.
///
/// Output files are named after the document id, so the id must not
/// contain path separators or NUL and must not be `.` or `..`.
pub fn validate_document_id(id: &str) -> Result<(), FieldError> {
    if id.contains(['/', '\\', '\0']) || id == "." || id == ".." {
        return Err(FieldError::new(
            "document_id",
            format!("'{id}' is not usable in a file name"),
        ));
    }
    Ok(())
}

/// Validate a raw page file record and fill in defaults.
///
/// - `document_id` is required, must not be blank and must be usable
///   in a file name (see [`validate_document_id`])
/// - `page_number` defaults to 0
/// - `text` defaults to "" (null is treated as missing)
/// - `extraction_method` defaults to `"pymupdf"`
/// - `char_count` must be a non-negative whole number; absent or zero
///   means "compute from `text`"
pub fn validate_page(raw: RawPageRecord) -> Result<PageRecord, Vec<FieldError>> {
    let mut errors = Vec::new();

    let document_id = match raw.document_id {
        Some(id) if !id.trim().is_empty() => {
            if let Err(e) = validate_document_id(&id) {
                errors.push(e);
            }
            id
        }
        _ => {
            errors.push(FieldError::new("document_id", "missing or empty"));
            String::new()
        }
    };

    let text = raw.text.unwrap_or_default();
    let char_count = match raw.char_count {
        Some(n) if n < 0.0 => {
            errors.push(FieldError::new(
                "char_count",
                format!("must be non-negative, got {n}"),
            ));
            0
        }
        Some(n) if !n.is_finite() || n.fract() != 0.0 => {
            errors.push(FieldError::new(
                "char_count",
                format!("must be a whole number, got {n}"),
            ));
            0
        }
        Some(n) if n > 0.0 => n as usize,
        _ => text.chars().count(),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PageRecord {
        document_id,
        page_number: raw.page_number.unwrap_or_default(),
        text,
        source_path: raw.source_path.unwrap_or_default(),
        extraction_method: raw
            .extraction_method
            .unwrap_or_else(|| DEFAULT_EXTRACTION_METHOD.to_string()),
        char_count,
    })
}

/// Validate a chunk record against the chunk schema.
///
/// Checks that `document_id` and `text` are non-empty, that
/// `char_count` equals the character length of `text`, and that
/// `chunk_id` has the form `{document_id}_{page_number}_{index}`.
pub fn validate_chunk(chunk: &ChunkRecord) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if chunk.document_id.is_empty() {
        errors.push(FieldError::new("document_id", "must not be empty"));
    }

    if chunk.text.is_empty() {
        errors.push(FieldError::new("text", "must not be empty"));
    }

    let actual = chunk.text.chars().count();
    if chunk.char_count != actual {
        errors.push(FieldError::new(
            "char_count",
            format!("is {} but text has {actual} characters", chunk.char_count),
        ));
    }

    let prefix = format!("{}_{}_", chunk.document_id, chunk.page_number);
    let index_ok = chunk
        .chunk_id
        .strip_prefix(&prefix)
        .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()));
    if !index_ok {
        errors.push(FieldError::new(
            "chunk_id",
            format!("'{}' does not match '{prefix}<index>'", chunk.chunk_id),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
