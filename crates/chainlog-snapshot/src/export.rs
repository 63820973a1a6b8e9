//! Snapshot export: encode the record sequence and write it in one shot.

use std::fs;
use std::path::Path;

use chainlog_core::Record;

use crate::error::Result;
use crate::format::SnapshotDoc;

/// Encode the records as the indented snapshot document.
///
/// Two-space indentation; byte-stable for identical records, so exporting
/// a frozen chain twice produces identical output.
pub fn to_json(records: &[Record]) -> Result<String> {
    let doc = SnapshotDoc::from_records(records);
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Serialize the records and persist them to `path` as one whole-file
/// write, replacing any prior content.
///
/// There is no partial or streaming write: either the destination ends up
/// holding the complete document or the error is surfaced to the caller.
/// The in-memory records are unaffected by a failed export.
pub fn write_snapshot(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let json = to_json(records)?;
    fs::write(path, json)?;
    Ok(())
}
