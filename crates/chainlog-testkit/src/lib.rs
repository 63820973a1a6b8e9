//! # Chainlog Testkit
//!
//! Testing utilities for chainlog.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Clocks**: Deterministic [`Clock`](chainlog_core::Clock)
//!   implementations so chains rebuild byte-for-byte
//! - **Fixtures**: Helpers for setting up sample chains
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Deterministic Chains
//!
//! ```rust
//! use chainlog_testkit::fixtures::sample_chain;
//!
//! let a = sample_chain(3);
//! let b = sample_chain(3);
//! assert_eq!(a.records(), b.records());
//! ```

pub mod clock;
pub mod fixtures;
pub mod generators;

pub use clock::{FixedClock, StepClock};
pub use fixtures::{sample_chain, sample_payloads};
