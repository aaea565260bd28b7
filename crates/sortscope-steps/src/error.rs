//! Errors raised by the dispatching [`generate`](crate::generate) entry point.
//!
//! The generators themselves cannot fail. These variants cover the caller-side
//! validation that happens before a search generator is invoked.

use serde::{Deserialize, Serialize};
use sortscope_core::Algorithm;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum StepError {
    #[error("{algorithm} needs a target value")]
    MissingTarget { algorithm: Algorithm },

    #[error("search target must be a finite number, got {target}")]
    NonFiniteTarget { target: f64 },
}
