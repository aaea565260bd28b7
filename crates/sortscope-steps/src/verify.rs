//! Structural checks for generated traces.
//!
//! [`verify_trace`] replays a step list against the input it was generated
//! from and reports every way it departs from the step-record contract. A
//! trace produced by this crate's generators yields no violations; the check
//! exists for traces loaded from elsewhere and as a test oracle.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use sortscope_core::{Algorithm, AlgorithmKind, StepRecord};

/// A single departure from the step-record contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceViolation {
    /// A snapshot does not have the input's length.
    SnapshotLength { step: usize, expected: usize, got: usize },
    /// `comparing` or `sorted_indices` names an index outside the snapshot.
    IndexOutOfRange { step: usize, index: usize, len: usize },
    /// Sort steps compare two indices, search steps probe one.
    ComparingArity { step: usize, expected: usize, got: usize },
    /// A search step lacks `found`, or a sort step carries it.
    FoundPresence { step: usize, expected: bool },
    /// `found` disagrees with the probed value.
    FoundMismatch { step: usize, index: usize },
    /// A search step is marked as a mutation.
    SearchSwapped { step: usize },
    /// A search step changed the array.
    SearchSnapshotChanged { step: usize },
    /// A search kept probing after a match.
    ProbeAfterMatch { step: usize },
    /// The final sort snapshot is not a permutation of the input.
    NotPermutation,
    /// The final sort snapshot is out of order at `index`.
    NotSorted { index: usize },
}

/// Checks `steps` as the output of `algorithm` over `input`.
///
/// `target` is used to check search `found` flags; when it is `None` those
/// checks are skipped.
pub fn verify_trace(
    algorithm: Algorithm,
    input: &[f64],
    target: Option<f64>,
    steps: &[StepRecord],
) -> Vec<TraceViolation> {
    let kind = algorithm.kind();
    let mut violations = Vec::new();

    for (k, step) in steps.iter().enumerate() {
        check_shape(k, step, input.len(), kind, &mut violations);
    }

    match kind {
        AlgorithmKind::Sort => check_sorted_result(input, steps, &mut violations),
        AlgorithmKind::Search => check_search(input, target, steps, &mut violations),
    }

    if !violations.is_empty() {
        tracing::debug!(
            algorithm = algorithm.slug(),
            violations = violations.len(),
            "trace failed verification"
        );
    }
    violations
}

fn check_shape(
    k: usize,
    step: &StepRecord,
    len: usize,
    kind: AlgorithmKind,
    out: &mut Vec<TraceViolation>,
) {
    if step.array.len() != len {
        out.push(TraceViolation::SnapshotLength {
            step: k,
            expected: len,
            got: step.array.len(),
        });
    }

    let expected_arity = match kind {
        AlgorithmKind::Sort => 2,
        AlgorithmKind::Search => 1,
    };
    if step.comparing.len() != expected_arity {
        out.push(TraceViolation::ComparingArity {
            step: k,
            expected: expected_arity,
            got: step.comparing.len(),
        });
    }

    let sorted = step.sorted_indices.iter().flatten();
    for &index in step.comparing.iter().chain(sorted) {
        if index >= step.array.len() {
            out.push(TraceViolation::IndexOutOfRange {
                step: k,
                index,
                len: step.array.len(),
            });
        }
    }

    let is_search = kind == AlgorithmKind::Search;
    if step.is_search_step() != is_search {
        out.push(TraceViolation::FoundPresence {
            step: k,
            expected: is_search,
        });
    }
    if is_search && step.swapped {
        out.push(TraceViolation::SearchSwapped { step: k });
    }
}

fn check_sorted_result(input: &[f64], steps: &[StepRecord], out: &mut Vec<TraceViolation>) {
    let Some(last) = steps.last() else {
        return;
    };

    let mut expected = input.to_vec();
    expected.sort_by(f64::total_cmp);
    let mut got = last.array.clone();
    got.sort_by(f64::total_cmp);
    let same_multiset = expected.len() == got.len()
        && expected
            .iter()
            .zip(&got)
            .all(|(a, b)| a.total_cmp(b) == Ordering::Equal);
    if !same_multiset {
        out.push(TraceViolation::NotPermutation);
    }

    // NaN compares false both ways, so only a strict inversion counts.
    if let Some(index) = last.array.windows(2).position(|w| w[0] > w[1]) {
        out.push(TraceViolation::NotSorted { index });
    }
}

fn check_search(
    input: &[f64],
    target: Option<f64>,
    steps: &[StepRecord],
    out: &mut Vec<TraceViolation>,
) {
    let mut matched = false;
    for (k, step) in steps.iter().enumerate() {
        if matched {
            out.push(TraceViolation::ProbeAfterMatch { step: k });
        }
        if step.array.len() == input.len()
            && step
                .array
                .iter()
                .zip(input)
                .any(|(a, b)| a.to_bits() != b.to_bits())
        {
            out.push(TraceViolation::SearchSnapshotChanged { step: k });
        }

        let Some(&index) = step.comparing.first() else {
            continue;
        };
        if let (Some(target), Some(value)) = (target, step.value_at(index)) {
            if step.found != Some(value == target) {
                out.push(TraceViolation::FoundMismatch { step: k, index });
            }
        }
        matched |= step.is_found();
    }
}
