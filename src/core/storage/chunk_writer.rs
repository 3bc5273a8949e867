//! Chunk file output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{ChunkError, Result};
use crate::core::storage::write_json;
use crate::core::types::ChunkRecord;

/// Output name for the chunks of one page file:
/// `report_page_3.json` becomes `report_page_3_chunks.json`
pub fn chunk_file_name(input_file_name: &str) -> String {
    let stem = input_file_name
        .strip_suffix(".json")
        .unwrap_or(input_file_name);
    format!("{stem}_chunks.json")
}

/// Output name when chunks are consolidated per document
pub fn document_file_name(document_id: &str) -> String {
    format!("{document_id}_chunks.json")
}

/// Writes chunk arrays into the output directory
#[derive(Debug, Clone)]
pub struct ChunkWriter {
    output_dir: PathBuf,
    pretty: bool,
}

impl ChunkWriter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            pretty,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory (and parents) if missing
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            ChunkError::OutputError(format!(
                "Cannot create output directory {}: {e}",
                self.output_dir.display()
            ))
        })
    }

    /// Write `chunks` as a JSON array to `file_name` in the output
    /// directory, replacing any previous file of that name
    pub fn write(&self, file_name: &str, chunks: &[ChunkRecord]) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        write_json(&path, chunks, self.pretty)?;
        tracing::debug!("Wrote {} chunks to {:?}", chunks.len(), path);
        Ok(path)
    }
}
