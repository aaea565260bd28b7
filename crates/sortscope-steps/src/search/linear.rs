//! Linear search.

use sortscope_core::StepRecord;

use crate::recorder::Recorder;

/// Probes `input` left to right for `target`, stopping at the first match.
pub fn linear_search_steps(input: &[f64], target: f64) -> Vec<StepRecord> {
    let mut rec = Recorder::new(input);
    for i in 0..rec.len() {
        let step = rec.probe_step(i, target);
        let hit = step.is_found();
        rec.push(step);
        if hit {
            break;
        }
    }
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_first_match() {
        let steps = linear_search_steps(&[3.0, 7.0, 1.0, 9.0], 1.0);
        assert_eq!(steps.len(), 3);
        let last = steps.last().unwrap();
        assert_eq!(last.found, Some(true));
        assert_eq!(last.comparing.as_slice(), &[2]);
        assert!(steps[..2].iter().all(|s| s.found == Some(false)));
    }

    #[test]
    fn miss_probes_every_index() {
        let steps = linear_search_steps(&[3.0, 7.0, 1.0], 5.0);
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.found == Some(false) && !s.swapped));
    }

    #[test]
    fn duplicates_report_the_first_occurrence() {
        let steps = linear_search_steps(&[2.0, 5.0, 5.0], 5.0);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].comparing.as_slice(), &[1]);
    }

    #[test]
    fn empty_input_produces_no_steps() {
        assert!(linear_search_steps(&[], 1.0).is_empty());
    }

    #[test]
    fn nan_entries_never_match() {
        let steps = linear_search_steps(&[f64::NAN, 2.0], f64::NAN);
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|s| !s.is_found()));
    }
}
