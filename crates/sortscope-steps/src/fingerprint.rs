//! Deterministic content hashing of step lists using blake3.
//!
//! Two step lists have the same fingerprint iff their canonical JSON encodings
//! are byte-identical. `StepRecord` holds only vectors, a small vector and a
//! `BTreeSet`, so its JSON output has a fixed field and element order.

use sortscope_core::StepRecord;

/// Computes a blake3 hash over every step, in order.
///
/// Each record is length-prefixed so that step boundaries contribute to the
/// digest. NaN entries encode as JSON `null`.
pub fn fingerprint(steps: &[StepRecord]) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(steps.len() as u64).to_le_bytes());
    for step in steps {
        let bytes = serde_json::to_vec(step).expect("StepRecord serialization should never fail");
        hasher.update(&(bytes.len() as u64).to_le_bytes());
        hasher.update(&bytes);
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{merge_sort_steps, quick_sort_steps};

    #[test]
    fn same_input_same_fingerprint() {
        let input = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0];
        assert_eq!(
            fingerprint(&merge_sort_steps(&input)),
            fingerprint(&merge_sort_steps(&input))
        );
    }

    #[test]
    fn different_algorithms_differ() {
        let input = [5.0, 3.0, 8.0, 1.0];
        assert_ne!(
            fingerprint(&merge_sort_steps(&input)),
            fingerprint(&quick_sort_steps(&input))
        );
    }

    #[test]
    fn step_flags_contribute() {
        let a = vec![StepRecord::compare(&[1.0, 2.0], 0, 1)];
        let b = vec![StepRecord::mutate(&[1.0, 2.0], 0, 1)];
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn empty_list_has_a_stable_digest() {
        assert_eq!(fingerprint(&[]), fingerprint(&[]));
        assert_ne!(fingerprint(&[]), fingerprint(&quick_sort_steps(&[2.0, 1.0])));
    }
}
