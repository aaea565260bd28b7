//! Top-down merge sort.

use sortscope_core::StepRecord;

use crate::recorder::Recorder;

/// Records a merge sort over `input`.
///
/// While both halves have elements, each write is preceded by a comparison
/// step on the raw source indices `[lo + i, mid + 1 + j]`. Those indices are
/// not adjusted for writes already made in the range, so the values shown at
/// them can be stale. Each write is followed by a `[k, k]` mutation step.
/// Ties go to the left half, so the sort is stable.
pub fn merge_sort_steps(input: &[f64]) -> Vec<StepRecord> {
    let mut rec = Recorder::new(input);
    if rec.len() > 1 {
        let hi = rec.len() - 1;
        sort(&mut rec, 0, hi);
    }
    rec.finish()
}

fn sort(rec: &mut Recorder, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort(rec, lo, mid);
    sort(rec, mid + 1, hi);
    merge(rec, lo, mid, hi);
}

fn merge(rec: &mut Recorder, lo: usize, mid: usize, hi: usize) {
    let left = rec.slice(lo, mid);
    let right = rec.slice(mid + 1, hi);
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        rec.record_compare(lo + i, mid + 1 + j);
        if left[i] <= right[j] {
            rec.set(k, left[i]);
            i += 1;
        } else {
            rec.set(k, right[j]);
            j += 1;
        }
        rec.record_mutation(k, k);
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        rec.set(k, value);
        rec.record_mutation(k, k);
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_singleton_produce_no_steps() {
        assert!(merge_sort_steps(&[]).is_empty());
        assert!(merge_sort_steps(&[1.0]).is_empty());
    }

    #[test]
    fn compare_then_write_pairs() {
        let steps = merge_sort_steps(&[3.0, 1.0, 2.0]);
        let trail: Vec<(Vec<usize>, bool)> = steps
            .iter()
            .map(|s| (s.comparing.to_vec(), s.swapped))
            .collect();
        assert_eq!(
            trail,
            vec![
                // merge(0, 0, 1)
                (vec![0, 1], false),
                (vec![0, 0], true),
                (vec![1, 1], true),
                // merge(0, 1, 2)
                (vec![0, 2], false),
                (vec![0, 0], true),
                (vec![1, 2], false),
                (vec![1, 1], true),
                (vec![2, 2], true),
            ]
        );
    }

    #[test]
    fn write_snapshots_follow_each_write() {
        let steps = merge_sort_steps(&[3.0, 1.0, 2.0]);
        assert_eq!(steps[0].array, vec![3.0, 1.0, 2.0]);
        assert_eq!(steps[1].array, vec![1.0, 1.0, 2.0]);
        assert_eq!(steps[2].array, vec![1.0, 3.0, 2.0]);
        assert_eq!(steps[6].array, vec![1.0, 2.0, 2.0]);
        assert_eq!(steps[7].array, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn comparison_indices_can_point_at_stale_values() {
        // merge(0, 1, 3) over [1, 4 | 2, 3]: after writing 1 and 2, the
        // comparison of left[1] = 4 against right[1] = 3 is reported at
        // source indices [1, 3], where the snapshot already holds 2.
        let steps = merge_sort_steps(&[4.0, 1.0, 3.0, 2.0]);
        let stale = steps
            .iter()
            .find(|s| !s.swapped && s.comparing.as_slice() == [1, 3])
            .unwrap();
        assert_eq!(stale.array[1], 2.0);
    }

    #[test]
    fn ties_take_from_the_left() {
        let steps = merge_sort_steps(&[1.0, 1.0]);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].comparing.as_slice(), &[0, 0]);
        assert_eq!(steps[1].array, vec![1.0, 1.0]);
    }
}
