//! Snapshot import: re-parse an exported document back into records.
//!
//! Import rebuilds the records exactly as written; it does not verify
//! them. Callers that care about integrity run `verify_chain` over the
//! result, which is what makes a tampered snapshot detectable.

use std::fs;
use std::path::Path;

use chainlog_core::Record;

use crate::error::Result;
use crate::format::SnapshotDoc;

/// Parse a snapshot document into its record sequence.
pub fn from_json(json: &str) -> Result<Vec<Record>> {
    let doc: SnapshotDoc = serde_json::from_str(json)?;
    doc.into_records()
}

/// Read and parse the snapshot file at `path`.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}
