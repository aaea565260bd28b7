//! Selection sort.

use sortscope_core::StepRecord;

use crate::recorder::Recorder;

/// Records a selection sort over `input`.
///
/// Every scanned index produces a comparison step against the running
/// minimum (`comparing = [min_idx, j]`), including scans that change
/// nothing. An iteration whose minimum is already in place emits no swap
/// step. Steps track the prefix fixed by the finished iterations.
pub fn selection_sort_steps(input: &[f64]) -> Vec<StepRecord> {
    let mut rec = Recorder::new(input);
    let n = rec.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            let step = rec.compare_step(min_idx, j).with_sorted_indices(0..i);
            rec.push(step);
            if rec.get(j) < rec.get(min_idx) {
                min_idx = j;
            }
        }

        if min_idx != i {
            rec.swap(i, min_idx);
            let step = rec.mutate_step(i, min_idx).with_sorted_indices(0..=i);
            rec.push(step);
        }
    }

    rec.finish()
}
