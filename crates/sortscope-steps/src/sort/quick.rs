//! Quick sort with Lomuto partitioning around the last element.
//!
//! The recursion is driven by an explicit stack of `(lo, hi)` ranges. The
//! right range is pushed before the left one, so the left subtree is fully
//! processed first and steps come out in the same depth-first,
//! left-then-right order as the recursive formulation.

use sortscope_core::StepRecord;

use crate::recorder::Recorder;

/// Records a quick sort over `input`.
pub fn quick_sort_steps(input: &[f64]) -> Vec<StepRecord> {
    let mut rec = Recorder::new(input);
    if rec.len() <= 1 {
        return rec.finish();
    }

    let mut pending = vec![(0, rec.len() - 1)];
    while let Some((lo, hi)) = pending.pop() {
        if lo >= hi {
            continue;
        }
        let p = partition(&mut rec, lo, hi);
        if p + 1 < hi {
            pending.push((p + 1, hi));
        }
        if p > lo + 1 {
            pending.push((lo, p - 1));
        }
    }

    rec.finish()
}

/// Partitions `lo..=hi` around `arr[hi]` and returns the pivot's final index.
fn partition(rec: &mut Recorder, lo: usize, hi: usize) -> usize {
    let pivot = rec.get(hi);
    let mut i = lo;
    for j in lo..hi {
        rec.record_compare(j, hi);
        if rec.get(j) < pivot {
            if i != j {
                rec.swap_and_record(i, j);
            }
            i += 1;
        }
    }
    if i != hi {
        rec.swap_and_record(i, hi);
    }
    i
}
