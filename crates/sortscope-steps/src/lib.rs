//! Step generation for the sortscope algorithm visualizer.
//!
//! Pure functions that run a classic sort or search over a private copy of the
//! caller's numbers and return every comparison, swap and probe as an ordered,
//! replayable list of [`StepRecord`]s.
//!
//! # Architecture
//!
//! - [`sort`]: bubble, insertion, selection, quick and merge sort generators
//! - [`search`]: linear and binary search generators
//! - [`generate`]: dispatches an [`Algorithm`] to its generator
//! - [`fingerprint`]: blake3 digest of a step list, for determinism checks
//! - [`verify`]: structural checks a well-formed trace must pass
//!
//! Every call is `Idle -> Generating -> Done` in one synchronous pass. There
//! is no shared state, so generators may run concurrently.
//!
//! # Usage
//!
//! ```
//! use sortscope_steps::sort::bubble_sort_steps;
//!
//! let steps = bubble_sort_steps(&[5.0, 1.0, 4.0, 2.0, 8.0]);
//! assert_eq!(steps[0].comparing.as_slice(), &[0, 1]);
//! assert_eq!(steps.last().unwrap().array, vec![1.0, 2.0, 4.0, 5.0, 8.0]);
//! ```

pub mod error;
pub mod fingerprint;
mod recorder;
pub mod search;
pub mod sort;
pub mod verify;

pub use error::StepError;
pub use fingerprint::fingerprint;
pub use verify::{verify_trace, TraceViolation};

use sortscope_core::{Algorithm, StepRecord};

/// Runs the generator for `algorithm` over `input`.
///
/// Sort algorithms ignore `target`. Search algorithms require a finite one;
/// binary search additionally expects `input` to be sorted ascending.
pub fn generate(
    algorithm: Algorithm,
    input: &[f64],
    target: Option<f64>,
) -> Result<Vec<StepRecord>, StepError> {
    let steps = match algorithm {
        Algorithm::Bubble => sort::bubble_sort_steps(input),
        Algorithm::Insertion => sort::insertion_sort_steps(input),
        Algorithm::Selection => sort::selection_sort_steps(input),
        Algorithm::Quick => sort::quick_sort_steps(input),
        Algorithm::Merge => sort::merge_sort_steps(input),
        Algorithm::Linear => search::linear_search_steps(input, search_target(algorithm, target)?),
        Algorithm::Binary => search::binary_search_steps(input, search_target(algorithm, target)?),
    };

    tracing::debug!(
        algorithm = algorithm.slug(),
        input_len = input.len(),
        steps = steps.len(),
        "generated step list"
    );
    Ok(steps)
}

fn search_target(algorithm: Algorithm, target: Option<f64>) -> Result<f64, StepError> {
    let target = target.ok_or(StepError::MissingTarget { algorithm })?;
    if !target.is_finite() {
        return Err(StepError::NonFiniteTarget { target });
    }
    Ok(target)
}
