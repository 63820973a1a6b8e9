//! Record: one immutable link in the chain.
//!
//! A record is never edited after construction. New content is represented
//! as new records appended at the tail.

use serde::{Deserialize, Serialize};

use crate::digest::{record_digest, Sha256Digest};

/// The fixed payload of the genesis record.
pub const GENESIS_PAYLOAD: &str = "Genesis Block";

/// One link in the chain.
///
/// The digest commits to every other field, including the predecessor's
/// digest, so a record also commits transitively to the entire prefix of
/// the chain before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the chain, starting at 0 for the genesis record.
    pub index: u64,

    /// Creation time (Unix milliseconds). Best-effort monotonic; not an
    /// integrity invariant.
    pub timestamp: i64,

    /// Arbitrary payload text, opaque to the chain logic.
    pub payload: String,

    /// Digest of the immediately preceding record (None only for genesis).
    pub prev_digest: Option<Sha256Digest>,

    /// Digest over (index, timestamp, payload, prev_digest).
    pub digest: Sha256Digest,
}

impl Record {
    /// Create the unique first record.
    pub fn genesis(timestamp: i64) -> Self {
        let digest = record_digest(0, timestamp, GENESIS_PAYLOAD, None);
        Self {
            index: 0,
            timestamp,
            payload: GENESIS_PAYLOAD.to_string(),
            prev_digest: None,
            digest,
        }
    }

    /// Create the successor of `prev` carrying the given payload.
    ///
    /// Any payload text is accepted, including the empty string; the
    /// chain's integrity derives from the linkage, not payload semantics.
    pub fn next(prev: &Record, payload: impl Into<String>, timestamp: i64) -> Self {
        let payload = payload.into();
        let index = prev.index + 1;
        let digest = record_digest(index, timestamp, &payload, Some(&prev.digest));
        Self {
            index,
            timestamp,
            payload,
            prev_digest: Some(prev.digest),
            digest,
        }
    }

    /// Recompute the digest over this record's current field values.
    ///
    /// Equals [`Record::digest`] exactly when the record is unmodified.
    pub fn compute_digest(&self) -> Sha256Digest {
        record_digest(
            self.index,
            self.timestamp,
            &self.payload,
            self.prev_digest.as_ref(),
        )
    }

    /// Check if this is the genesis record.
    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }
}
