//! Playback error types.

use thiserror::Error;

/// Errors produced by the playback driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// A requested speed is outside the configured slider range.
    #[error("speed {speed_ms}ms is outside {min_ms}..={max_ms}ms")]
    SpeedOutOfRange { speed_ms: u64, min_ms: u64, max_ms: u64 },

    /// A step snapshot does not match the base array it is replayed over.
    #[error("step {step} has {got} values, base array has {expected}")]
    SnapshotLengthMismatch {
        step: usize,
        expected: usize,
        got: usize,
    },
}
