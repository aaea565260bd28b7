//! Playback configuration.
//!
//! Defaults mirror the classic player controls: a 300ms period, a speed
//! slider spanning 100..=2000ms in 50ms notches, and a hard floor of 50ms below which the
//! timer never runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PlaybackError;

/// Configuration for the playback driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Auto-advance period in milliseconds. Default: 300.
    pub speed_ms: u64,
    /// Slowest accepted period. Default: 2000.
    pub max_speed_ms: u64,
    /// Fastest accepted period. Default: 100.
    pub min_speed_ms: u64,
    /// Slider notch size; accepted speeds snap to it. Default: 50.
    pub speed_step_ms: u64,
    /// The timer period is never shorter than this. Default: 50.
    pub floor_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            speed_ms: 300,
            max_speed_ms: 2000,
            min_speed_ms: 100,
            speed_step_ms: 50,
            floor_ms: 50,
        }
    }
}

impl PlaybackConfig {
    /// Reads `SORTSCOPE_SPEED_MS` (default: 300). An unparseable or
    /// out-of-range value is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = PlaybackConfig::default();
        if let Ok(raw) = std::env::var("SORTSCOPE_SPEED_MS") {
            let checked = raw.trim().parse::<u64>().ok().map(|ms| config.check_speed(ms));
            match checked {
                Some(Ok(ms)) => config.speed_ms = ms,
                _ => tracing::warn!("ignoring SORTSCOPE_SPEED_MS={:?}", raw),
            }
        }
        config
    }

    /// Checks that `speed_ms` lies within the slider range and snaps it to
    /// the nearest notch.
    pub fn check_speed(&self, speed_ms: u64) -> Result<u64, PlaybackError> {
        if speed_ms < self.min_speed_ms || speed_ms > self.max_speed_ms {
            return Err(PlaybackError::SpeedOutOfRange {
                speed_ms,
                min_ms: self.min_speed_ms,
                max_ms: self.max_speed_ms,
            });
        }
        if self.speed_step_ms == 0 {
            return Ok(speed_ms);
        }
        let notches = (speed_ms - self.min_speed_ms + self.speed_step_ms / 2) / self.speed_step_ms;
        Ok((self.min_speed_ms + notches * self.speed_step_ms).min(self.max_speed_ms))
    }

    /// Period the auto-advance timer actually runs at.
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.speed_ms.max(self.floor_ms))
    }
}
