//! Export file output

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::Result;

use super::ExportDocument;

/// Serialize with the one-space indentation Tachi exports use
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write a document into `dir`, creating the directory if needed.
///
/// An existing export for the same game is overwritten.
pub fn write_export<P: AsRef<Path>>(document: &ExportDocument, dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(document.file_name());
    fs::write(&path, to_pretty_json(document)?)?;

    info!(
        "Wrote {} {} scores to {}",
        document.len(),
        document.game(),
        path.display()
    );
    Ok(path)
}
