//! The step record: one observable moment of an algorithm run.
//!
//! Every generator in sortscope-steps emits a `Vec<StepRecord>`. Each record
//! owns its own copy of the working array, so no two records (and no record
//! and the caller's input) ever share storage. Replaying the list in order
//! reproduces the exact comparison and mutation trace of the algorithm.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Indices under examination in a single step.
///
/// Sorts compare pairs, searches probe a single index, so two inline slots
/// cover every record without a heap allocation.
pub type Comparing = SmallVec<[usize; 2]>;

/// A single snapshot-plus-metadata unit of an algorithm trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    /// Contents of the working array at this instant.
    pub array: Vec<f64>,
    /// One index for a search probe, two for a pairwise sort step.
    pub comparing: Comparing,
    /// True iff this step wrote to the working array (swap or positional write).
    pub swapped: bool,
    /// Search steps only: whether the probed index holds the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
    /// Indices already in their final sorted position. `None` means the
    /// generator does not track them, not that the set is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorted_indices: Option<BTreeSet<usize>>,
}

impl StepRecord {
    /// A pure comparison of two indices; `swapped` is false.
    pub fn compare(array: &[f64], a: usize, b: usize) -> Self {
        StepRecord {
            array: array.to_vec(),
            comparing: SmallVec::from_buf([a, b]),
            swapped: false,
            found: None,
            sorted_indices: None,
        }
    }

    /// A step that reflects a write to the working array.
    pub fn mutate(array: &[f64], a: usize, b: usize) -> Self {
        StepRecord {
            swapped: true,
            ..StepRecord::compare(array, a, b)
        }
    }

    /// A search probe of a single index.
    pub fn probe(array: &[f64], index: usize, found: bool) -> Self {
        let mut comparing = Comparing::new();
        comparing.push(index);
        StepRecord {
            array: array.to_vec(),
            comparing,
            swapped: false,
            found: Some(found),
            sorted_indices: None,
        }
    }

    /// Attaches the set of indices known to be in final position.
    pub fn with_sorted_indices(mut self, sorted: impl IntoIterator<Item = usize>) -> Self {
        self.sorted_indices = Some(sorted.into_iter().collect());
        self
    }

    /// Returns true if this step was produced by a search generator.
    pub fn is_search_step(&self) -> bool {
        self.found.is_some()
    }

    /// Returns true if this step reflects a mutation of the working array.
    pub fn is_mutation(&self) -> bool {
        self.swapped
    }

    /// Returns true if this is a search probe that hit the target.
    pub fn is_found(&self) -> bool {
        self.found == Some(true)
    }

    /// Value at `index` in this step's snapshot, if in range.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.array.get(index).copied()
    }
}
