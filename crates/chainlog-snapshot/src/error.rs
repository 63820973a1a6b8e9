//! Error types for the snapshot module.

use thiserror::Error;

/// Errors that can occur while exporting or re-parsing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The record sequence could not be encoded, or the document could not
    /// be decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The destination could not be written or the source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document parsed, but its contents do not form valid records.
    #[error("malformed snapshot: {0}")]
    Malformed(String),
}

/// Result type for snapshot operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;
