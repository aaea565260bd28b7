//! Core error types for sortscope-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! failure modes of the dataset source and the algorithm catalogue. Step
//! generation itself is infallible and has no variant here.

use thiserror::Error;

/// Core errors produced by the sortscope-core crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The dataset text contained no values.
    #[error("dataset is empty: provide at least one comma-separated number")]
    EmptyDataset,

    /// A token could not be parsed as a number.
    #[error("not a number: '{token}' at position {position}")]
    NotNumeric { token: String, position: usize },

    /// A token parsed, but to NaN or an infinity.
    #[error("non-finite value: '{token}'")]
    NonFinite { token: String },

    /// A JSON dataset element was not a number.
    #[error("dataset element {position} is not a number: {found}")]
    NotANumberElement { position: usize, found: String },

    /// An algorithm name did not match any known algorithm.
    #[error("unknown algorithm: '{name}'")]
    UnknownAlgorithm { name: String },

    /// Random dataset parameters were unusable.
    #[error("invalid dataset config: {reason}")]
    InvalidDatasetConfig { reason: String },
}
