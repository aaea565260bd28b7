//! Bubble sort with the early-exit optimization.

use sortscope_core::StepRecord;

use crate::recorder::Recorder;

/// Records every adjacent comparison of a bubble sort over `input`.
///
/// A pass that performs no swap ends the sort; later passes emit nothing.
/// Swap steps carry the post-swap snapshot, comparison steps the unchanged
/// one. Each step tracks the suffix settled by the passes completed so far.
pub fn bubble_sort_steps(input: &[f64]) -> Vec<StepRecord> {
    let mut rec = Recorder::new(input);
    let n = rec.len();
    if n <= 1 {
        return rec.finish();
    }

    for pass in 0..n - 1 {
        let settled = (n - pass)..n;
        let mut swapped_in_pass = false;

        for j in 0..n - 1 - pass {
            let step = if rec.get(j) > rec.get(j + 1) {
                rec.swap(j, j + 1);
                swapped_in_pass = true;
                rec.mutate_step(j, j + 1)
            } else {
                rec.compare_step(j, j + 1)
            };
            rec.push(step.with_sorted_indices(settled.clone()));
        }

        if !swapped_in_pass {
            break;
        }
    }

    rec.finish()
}
