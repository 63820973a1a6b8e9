//! The snapshot document shape.
//!
//! Field names are capitalized to match the record's conceptual attributes
//! and digests travel as lowercase hex text, so the document is readable
//! and diffable without any tooling.

use serde::{Deserialize, Serialize};

use chainlog_core::{Record, Sha256Digest};

use crate::error::{Result, SnapshotError};

/// One record as it appears in the snapshot document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDoc {
    /// Position in the chain.
    #[serde(rename = "Index")]
    pub index: u64,

    /// Creation time (Unix milliseconds).
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,

    /// The payload text, escaped by JSON string encoding.
    #[serde(rename = "Data")]
    pub data: String,

    /// Predecessor digest in lowercase hex; empty for genesis.
    #[serde(rename = "PrevHash")]
    pub prev_hash: String,

    /// This record's digest in lowercase hex.
    #[serde(rename = "Hash")]
    pub hash: String,
}

impl RecordDoc {
    /// Render a record into its document form. Lossless.
    pub fn from_record(record: &Record) -> Self {
        Self {
            index: record.index,
            timestamp: record.timestamp,
            data: record.payload.clone(),
            prev_hash: record
                .prev_digest
                .map(|d| d.to_hex())
                .unwrap_or_default(),
            hash: record.digest.to_hex(),
        }
    }

    /// Rebuild the record this document describes.
    ///
    /// The digests are parsed back from hex; nothing is recomputed, so a
    /// tampered document still rebuilds and can then be caught by
    /// verification.
    pub fn into_record(self) -> Result<Record> {
        let prev_digest = if self.prev_hash.is_empty() {
            None
        } else {
            Some(parse_digest("PrevHash", self.index, &self.prev_hash)?)
        };
        let digest = parse_digest("Hash", self.index, &self.hash)?;

        Ok(Record {
            index: self.index,
            timestamp: self.timestamp,
            payload: self.data,
            prev_digest,
            digest,
        })
    }
}

fn parse_digest(field: &str, index: u64, hex: &str) -> Result<Sha256Digest> {
    Sha256Digest::from_hex(hex).map_err(|e| {
        SnapshotError::Malformed(format!("record {index}: bad {field} {hex:?}: {e}"))
    })
}

/// The whole-chain snapshot document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDoc {
    /// The records in index order.
    #[serde(rename = "Chain")]
    pub chain: Vec<RecordDoc>,
}

impl SnapshotDoc {
    /// Render a record sequence into its document form.
    pub fn from_records(records: &[Record]) -> Self {
        Self {
            chain: records.iter().map(RecordDoc::from_record).collect(),
        }
    }

    /// Rebuild the record sequence this document describes.
    pub fn into_records(self) -> Result<Vec<Record>> {
        self.chain.into_iter().map(RecordDoc::into_record).collect()
    }
}
