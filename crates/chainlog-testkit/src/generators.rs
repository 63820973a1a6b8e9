//! Proptest generators for property-based testing.

use proptest::prelude::*;

use chainlog_core::{Record, Sha256Digest};

/// Generate a random digest.
pub fn digest() -> impl Strategy<Value = Sha256Digest> {
    any::<[u8; 32]>().prop_map(Sha256Digest::from_bytes)
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX / 2
}

/// Generate arbitrary payload text, including the empty string and
/// control characters.
pub fn payload() -> impl Strategy<Value = String> {
    ".{0,64}".prop_map(String::from)
}

/// Generate a vector of payloads for multi-append scenarios.
pub fn payload_sequence(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(payload(), 0..=max_len)
}

/// Generate a well-formed record sequence built through the append step.
pub fn record_sequence(max_appends: usize) -> impl Strategy<Value = Vec<Record>> {
    (timestamp(), payload_sequence(max_appends)).prop_map(|(start, payloads)| {
        let mut records = vec![Record::genesis(start)];
        for (i, payload) in payloads.into_iter().enumerate() {
            let next = Record::next(records.last().expect("non-empty"), payload, start + 1 + i as i64);
            records.push(next);
        }
        records
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainlog_core::verify_chain;

    proptest! {
        #[test]
        fn generated_sequences_verify(records in record_sequence(8)) {
            prop_assert!(verify_chain(&records).is_valid());
        }

        #[test]
        fn generated_digests_roundtrip_hex(d in digest()) {
            prop_assert_eq!(Sha256Digest::from_hex(&d.to_hex()).unwrap(), d);
        }
    }
}
