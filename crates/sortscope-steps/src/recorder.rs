//! Working-copy bookkeeping shared by every generator.
//!
//! A [`Recorder`] owns the private working array and the growing step list.
//! Generators mutate the working array only through it, and every record it
//! produces snapshots the working array by value.

use sortscope_core::StepRecord;

pub(crate) struct Recorder {
    working: Vec<f64>,
    steps: Vec<StepRecord>,
}

impl Recorder {
    /// Copies `input` into a fresh working array. The input is never touched again.
    pub(crate) fn new(input: &[f64]) -> Self {
        Recorder {
            working: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.working.len()
    }

    pub(crate) fn get(&self, index: usize) -> f64 {
        self.working[index]
    }

    /// Contents of `lo..=hi` as an owned buffer.
    pub(crate) fn slice(&self, lo: usize, hi: usize) -> Vec<f64> {
        self.working[lo..=hi].to_vec()
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) {
        self.working[index] = value;
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.working.swap(a, b);
    }

    /// A comparison record of the current working state.
    pub(crate) fn compare_step(&self, a: usize, b: usize) -> StepRecord {
        StepRecord::compare(&self.working, a, b)
    }

    /// A mutation record of the current working state.
    pub(crate) fn mutate_step(&self, a: usize, b: usize) -> StepRecord {
        StepRecord::mutate(&self.working, a, b)
    }

    /// A search probe of `index` against `target`, using numeric equality.
    pub(crate) fn probe_step(&self, index: usize, target: f64) -> StepRecord {
        StepRecord::probe(&self.working, index, self.working[index] == target)
    }

    pub(crate) fn push(&mut self, step: StepRecord) {
        self.steps.push(step);
    }

    pub(crate) fn record_compare(&mut self, a: usize, b: usize) {
        let step = self.compare_step(a, b);
        self.push(step);
    }

    pub(crate) fn record_mutation(&mut self, a: usize, b: usize) {
        let step = self.mutate_step(a, b);
        self.push(step);
    }

    /// Swaps two slots and records the post-swap state.
    pub(crate) fn swap_and_record(&mut self, a: usize, b: usize) {
        self.swap(a, b);
        self.record_mutation(a, b);
    }

    pub(crate) fn finish(self) -> Vec<StepRecord> {
        self.steps
    }
}
