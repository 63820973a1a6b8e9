//! Chain verification: full re-check of linkage and digest invariants.
//!
//! Verification is the reason a hash chain exists: any retroactive edit to
//! a record changes its recomputed digest or breaks its successor's
//! linkage, and the walk below reports the first place that happens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::digest::Sha256Digest;
use crate::record::Record;

/// The invariant a record violated.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ChainFault {
    /// The record sequence is empty; even a fresh chain holds genesis.
    #[error("chain has no genesis record")]
    MissingGenesis,

    /// A record's index does not equal its position.
    #[error("index mismatch: expected {expected}, got {got}")]
    IndexMismatch { expected: u64, got: u64 },

    /// The genesis record carries a predecessor digest.
    #[error("genesis record must not have a predecessor digest")]
    GenesisHasPredecessor,

    /// A record's predecessor digest does not match the prior record.
    #[error("linkage broken: expected predecessor digest {expected}")]
    LinkageBroken {
        expected: Sha256Digest,
        got: Option<Sha256Digest>,
    },

    /// A record's stored digest does not match the digest recomputed over
    /// its current fields.
    #[error("digest mismatch: stored {stored}, recomputed {computed}")]
    DigestMismatch {
        stored: Sha256Digest,
        computed: Sha256Digest,
    },
}

/// Outcome of verifying a chain.
///
/// A failed check is a normal result value, not an error: the chain itself
/// is reporting on its own integrity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainHealth {
    /// Every record satisfies the linkage and digest invariants.
    Valid,

    /// Verification failed; `index` is the first offending record.
    Invalid {
        /// Position of the first record that violated an invariant.
        index: u64,
        /// Which invariant was violated.
        fault: ChainFault,
    },
}

impl ChainHealth {
    /// Check if the chain verified cleanly.
    pub fn is_valid(&self) -> bool {
        matches!(self, ChainHealth::Valid)
    }
}

/// Walk the records in index order and check every invariant.
///
/// Per record: contiguity (`record[i].index == i`), genesis shape or
/// linkage to the predecessor, then digest integrity (stored digest equals
/// the digest recomputed over current field values). Returns the first
/// violation found. Read-only; no side effects.
pub fn verify_chain(records: &[Record]) -> ChainHealth {
    if records.is_empty() {
        return ChainHealth::Invalid {
            index: 0,
            fault: ChainFault::MissingGenesis,
        };
    }

    for (position, record) in records.iter().enumerate() {
        let position = position as u64;

        if record.index != position {
            return ChainHealth::Invalid {
                index: position,
                fault: ChainFault::IndexMismatch {
                    expected: position,
                    got: record.index,
                },
            };
        }

        if position == 0 {
            if record.prev_digest.is_some() {
                return ChainHealth::Invalid {
                    index: 0,
                    fault: ChainFault::GenesisHasPredecessor,
                };
            }
        } else {
            let expected = records[position as usize - 1].digest;
            if record.prev_digest != Some(expected) {
                return ChainHealth::Invalid {
                    index: position,
                    fault: ChainFault::LinkageBroken {
                        expected,
                        got: record.prev_digest,
                    },
                };
            }
        }

        let computed = record.compute_digest();
        if record.digest != computed {
            return ChainHealth::Invalid {
                index: position,
                fault: ChainFault::DigestMismatch {
                    stored: record.digest,
                    computed,
                },
            };
        }
    }

    ChainHealth::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_records(payloads: &[&str]) -> Vec<Record> {
        let mut records = vec![Record::genesis(1736870400000)];
        for (i, payload) in payloads.iter().enumerate() {
            let next = Record::next(
                records.last().unwrap(),
                *payload,
                1736870400001 + i as i64,
            );
            records.push(next);
        }
        records
    }

    #[test]
    fn test_valid_chain() {
        let records = build_records(&["alpha", "beta", "gamma"]);
        assert_eq!(verify_chain(&records), ChainHealth::Valid);
        assert!(verify_chain(&records).is_valid());
    }

    #[test]
    fn test_genesis_only_is_valid() {
        let records = build_records(&[]);
        assert!(verify_chain(&records).is_valid());
    }

    #[test]
    fn test_empty_sequence() {
        let health = verify_chain(&[]);
        assert_eq!(
            health,
            ChainHealth::Invalid {
                index: 0,
                fault: ChainFault::MissingGenesis
            }
        );
    }

    #[test]
    fn test_tampered_payload_reported_at_its_index() {
        let mut records = build_records(&["alpha", "beta", "gamma"]);
        records[1].payload = "altered".to_string();

        // The stored digest is unchanged, so the first failure is the
        // digest recomputation at index 1, not the linkage at index 2.
        match verify_chain(&records) {
            ChainHealth::Invalid {
                index: 1,
                fault: ChainFault::DigestMismatch { stored, computed },
            } => {
                assert_eq!(stored, records[1].digest);
                assert_ne!(stored, computed);
            }
            other => panic!("expected digest mismatch at index 1, got {other:?}"),
        }
    }

    #[test]
    fn test_tampered_stored_digest() {
        let mut records = build_records(&["alpha", "beta"]);
        records[2].digest = Sha256Digest::from_bytes([0xff; 32]);

        assert!(matches!(
            verify_chain(&records),
            ChainHealth::Invalid {
                index: 2,
                fault: ChainFault::DigestMismatch { .. }
            }
        ));
    }

    #[test]
    fn test_rehashed_record_breaks_linkage() {
        let mut records = build_records(&["alpha", "beta"]);

        // Replace record 1 with an internally consistent record built on
        // the wrong predecessor: its own digest recomputes cleanly, so the
        // first failure is the linkage check.
        let impostor_parent = Record::genesis(999);
        records[1] = Record::next(&impostor_parent, "alpha", records[1].timestamp);

        assert!(matches!(
            verify_chain(&records),
            ChainHealth::Invalid {
                index: 1,
                fault: ChainFault::LinkageBroken { .. }
            }
        ));
    }

    #[test]
    fn test_dropped_record_breaks_contiguity() {
        let mut records = build_records(&["alpha", "beta", "gamma"]);
        records.remove(1);

        assert_eq!(
            verify_chain(&records),
            ChainHealth::Invalid {
                index: 1,
                fault: ChainFault::IndexMismatch {
                    expected: 1,
                    got: 2
                }
            }
        );
    }

    #[test]
    fn test_genesis_with_predecessor() {
        let mut records = build_records(&["alpha"]);
        records[0].prev_digest = Some(Sha256Digest::from_bytes([0x01; 32]));

        assert_eq!(
            verify_chain(&records),
            ChainHealth::Invalid {
                index: 0,
                fault: ChainFault::GenesisHasPredecessor
            }
        );
    }

    #[test]
    fn test_health_serde_roundtrip() {
        let health = ChainHealth::Invalid {
            index: 3,
            fault: ChainFault::LinkageBroken {
                expected: Sha256Digest::from_bytes([0x0f; 32]),
                got: None,
            },
        };

        let json = serde_json::to_string(&health).unwrap();
        let recovered: ChainHealth = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, health);
    }

    #[test]
    fn test_fault_messages_name_the_invariant() {
        let fault = ChainFault::IndexMismatch {
            expected: 1,
            got: 2,
        };
        assert_eq!(fault.to_string(), "index mismatch: expected 1, got 2");

        let fault = ChainFault::DigestMismatch {
            stored: Sha256Digest::from_bytes([0xaa; 32]),
            computed: Sha256Digest::from_bytes([0xbb; 32]),
        };
        assert!(fault.to_string().starts_with("digest mismatch"));
    }
}
