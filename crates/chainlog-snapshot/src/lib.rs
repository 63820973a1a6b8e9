//! # Chainlog Snapshot
//!
//! The export surface for chainlog: serializes the full record sequence
//! into an indented JSON document and persists it as one whole-file write.
//!
//! ## Key Types
//!
//! - [`SnapshotDoc`] / [`RecordDoc`] - The on-disk document shape
//! - [`SnapshotError`] - Serialization and I/O failures
//!
//! ## Format
//!
//! The document is a single object whose `Chain` field holds the records
//! in index order, each with `Index`, `Timestamp`, `Data`, `PrevHash`, and
//! `Hash` fields. Digests are lowercase hex; the genesis `PrevHash` is the
//! empty string. Two-space indentation; the destination file is replaced
//! wholesale on every export.

pub mod error;
pub mod export;
pub mod format;
pub mod import;

pub use error::{Result, SnapshotError};
pub use export::{to_json, write_snapshot};
pub use format::{RecordDoc, SnapshotDoc};
pub use import::{from_json, read_snapshot};
