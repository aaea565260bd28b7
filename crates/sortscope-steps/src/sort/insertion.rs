//! Insertion sort.

use sortscope_core::StepRecord;

use crate::recorder::Recorder;

/// Records an insertion sort over `input`.
///
/// Every emitted step is a structural change: one step per rightward shift
/// (`comparing = [j, j + 1]`, snapshot taken before the shift is written) and
/// one placement step per key (`comparing = [resting, i]`, snapshot after the
/// key lands). A key that does not move still gets its placement step.
/// There are no pure comparison steps.
pub fn insertion_sort_steps(input: &[f64]) -> Vec<StepRecord> {
    let mut rec = Recorder::new(input);

    for i in 1..rec.len() {
        let key = rec.get(i);
        // Slot the key will land in; everything in `resting..i` shifts right.
        let mut resting = i;
        while resting > 0 && rec.get(resting - 1) > key {
            let j = resting - 1;
            rec.record_mutation(j, j + 1);
            let shifted = rec.get(j);
            rec.set(j + 1, shifted);
            resting = j;
        }
        rec.set(resting, key);
        rec.record_mutation(resting, i);
    }

    rec.finish()
}
