//! Flat-file persistence for page and chunk records.
//!
//! - page_store: per-page JSON files, including on-demand
//!   materialization from a PDF
//! - chunk_writer: chunk files in the output directory
//! - validator: field-level validation of page and chunk records
//!
//! Every file is written through [`write_json`], so a record is
//! either fully on disk or the write fails with an error.

pub mod chunk_writer;
pub mod page_store;
pub mod validator;

pub use chunk_writer::ChunkWriter;
pub use page_store::{PageStore, Resolution};
pub use validator::{validate_chunk, validate_document_id, validate_page, FieldError};

use crate::core::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize `value` to `path` as UTF-8 JSON (non-ASCII kept as is).
///
/// Pretty output uses a four-space indent.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    if pretty {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut writer, formatter);
        value.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }

    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
