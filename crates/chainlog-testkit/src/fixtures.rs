//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use chainlog_core::Chain;

use crate::clock::StepClock;

/// The payloads used by [`sample_chain`].
pub fn sample_payloads(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("payload-{i}")).collect()
}

/// Build a deterministic chain with `count` appended records.
///
/// Timestamps come from a [`StepClock`] at a fixed epoch, so two calls
/// with the same `count` produce identical records.
pub fn sample_chain(count: usize) -> Chain<StepClock> {
    let mut chain = Chain::with_clock(StepClock::default_epoch());
    for payload in sample_payloads(count) {
        chain.append(payload);
    }
    chain
}
