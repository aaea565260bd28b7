//! Binary search over input the caller has already sorted ascending.

use sortscope_core::StepRecord;

use crate::recorder::Recorder;

/// Probes the midpoint of the live `lo..=hi` window until the target is
/// found or the window is empty. The input is not sorted here; unsorted
/// input yields a well-formed but meaningless trace.
pub fn binary_search_steps(sorted_input: &[f64], target: f64) -> Vec<StepRecord> {
    let mut rec = Recorder::new(sorted_input);
    if rec.len() == 0 {
        return rec.finish();
    }

    let mut lo = 0usize;
    let mut hi = rec.len() - 1;
    loop {
        let mid = lo + (hi - lo) / 2;
        let step = rec.probe_step(mid, target);
        let hit = step.is_found();
        rec.push(step);
        if hit {
            break;
        }

        if rec.get(mid) < target {
            lo = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            hi = mid - 1;
        }
        if lo > hi {
            break;
        }
    }
    rec.finish()
}
