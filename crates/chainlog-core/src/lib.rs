//! # Chainlog Core
//!
//! Pure primitives for the chainlog ledger: records, digests, the chain
//! container, and verification.
//!
//! This crate contains no I/O. It is pure computation over a hash-linked
//! sequence of records.
//!
//! ## Key Types
//!
//! - [`Record`] - One immutable link in the chain
//! - [`Sha256Digest`] - The content digest binding a record to its fields
//! - [`Chain`] - The ordered, append-only container of records
//! - [`ChainHealth`] - The outcome of re-verifying a chain
//!
//! ## Integrity Model
//!
//! Every record's digest is computed over `(index, timestamp, payload,
//! predecessor digest)`, so any retroactive edit breaks either the edited
//! record's own digest or the linkage of its successor. See [`verify`].

pub mod chain;
pub mod clock;
pub mod digest;
pub mod record;
pub mod verify;

pub use chain::Chain;
pub use clock::{Clock, SystemClock};
pub use digest::{record_digest, Sha256Digest};
pub use record::{Record, GENESIS_PAYLOAD};
pub use verify::{verify_chain, ChainFault, ChainHealth};
