//! Shared data contract for the sortscope algorithm visualizer.
//!
//! # Modules
//!
//! - [`step`]: [`StepRecord`], the snapshot every generator emits
//! - [`algorithm`]: the [`Algorithm`] catalogue and [`AlgorithmKind`]
//! - [`dataset`]: parsing user-supplied numbers and seeded random datasets
//! - [`error`]: [`CoreError`]

pub mod algorithm;
pub mod dataset;
pub mod error;
pub mod step;

// Re-export commonly used types
pub use algorithm::{Algorithm, AlgorithmKind};
pub use dataset::{numbers_from_json, parse_numbers, parse_target, random_dataset, DatasetConfig};
pub use error::CoreError;
pub use step::{Comparing, StepRecord};
