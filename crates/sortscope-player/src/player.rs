//! The playback state machine.
//!
//! A [`Player`] holds an immutable step list and a cursor into it. The
//! observable status is derived from the cursor and a playing flag:
//! `Idle -> Playing <-> Paused -> Finished`, with `reset` returning to `Idle`
//! from anywhere. Nothing here mutates the step list, so stopping at any
//! point needs no rollback.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sortscope_core::{Algorithm, StepRecord};

use crate::config::PlaybackConfig;
use crate::error::PlaybackError;
use crate::frame::Frame;

/// Observable state of a [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Cursor before the first step, not advancing.
    Idle,
    /// Advancing on each timer tick.
    Playing,
    /// Cursor on a step, not advancing.
    Paused,
    /// Cursor on the last step of a non-empty list.
    Finished,
}

/// Replays a step list one step at a time.
#[derive(Debug, Clone)]
pub struct Player {
    algorithm: Algorithm,
    base: Vec<f64>,
    steps: Arc<[StepRecord]>,
    /// `None` sits before the first step.
    cursor: Option<usize>,
    playing: bool,
    config: PlaybackConfig,
}

impl Player {
    /// Creates an idle player over `steps`, which must have been generated
    /// from `base`.
    pub fn new(
        algorithm: Algorithm,
        base: Vec<f64>,
        steps: Vec<StepRecord>,
        config: PlaybackConfig,
    ) -> Result<Self, PlaybackError> {
        check_lengths(&base, &steps)?;
        Ok(Player {
            algorithm,
            base,
            steps: Arc::from(steps),
            cursor: None,
            playing: false,
            config,
        })
    }

    /// Replaces the dataset and step list, then resets.
    pub fn load(
        &mut self,
        algorithm: Algorithm,
        base: Vec<f64>,
        steps: Vec<StepRecord>,
    ) -> Result<(), PlaybackError> {
        check_lengths(&base, &steps)?;
        self.algorithm = algorithm;
        self.base = base;
        self.steps = Arc::from(steps);
        self.reset();
        tracing::trace!(algorithm = algorithm.slug(), steps = self.steps.len(), "loaded trace");
        Ok(())
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.is_finished() {
            PlaybackStatus::Finished
        } else if self.playing {
            PlaybackStatus::Playing
        } else if self.cursor.is_none() {
            PlaybackStatus::Idle
        } else {
            PlaybackStatus::Paused
        }
    }

    /// Starts advancing. Does nothing on an empty or finished trace.
    /// Returns whether the player is now playing.
    pub fn play(&mut self) -> bool {
        if self.steps.is_empty() || self.is_finished() {
            return false;
        }
        self.playing = true;
        tracing::trace!(cursor = ?self.cursor, "play");
        true
    }

    pub fn pause(&mut self) {
        self.playing = false;
        tracing::trace!(cursor = ?self.cursor, "pause");
    }

    /// Stops and moves the cursor back before the first step.
    pub fn reset(&mut self) {
        self.playing = false;
        self.cursor = None;
        tracing::trace!("reset");
    }

    /// One timer tick: advances while playing and stops on reaching the last
    /// step. Returns whether the cursor moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.advance();
        if !moved || self.is_finished() {
            self.playing = false;
        }
        moved
    }

    /// Manual single step forward. Never runs past the last step.
    pub fn step_forward(&mut self) -> bool {
        self.advance()
    }

    /// Manual single step back. From the first step this returns to the
    /// position before it.
    pub fn step_back(&mut self) -> bool {
        match self.cursor {
            None => false,
            Some(0) => {
                self.cursor = None;
                true
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                true
            }
        }
    }

    /// Moves the cursor to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) {
        if let Some(last) = self.last_index() {
            self.cursor = Some(index.min(last));
            if self.is_finished() {
                self.playing = false;
            }
        }
    }

    /// Changes the auto-advance period.
    pub fn set_speed(&mut self, speed_ms: u64) -> Result<(), PlaybackError> {
        self.config.speed_ms = self.config.check_speed(speed_ms)?;
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True when the cursor is on the last step of a non-empty trace.
    pub fn is_finished(&self) -> bool {
        matches!((self.cursor, self.last_index()), (Some(c), Some(last)) if c >= last)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current_step(&self) -> Option<&StepRecord> {
        self.cursor.and_then(|i| self.steps.get(i))
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// A shared read-only handle to the step list.
    pub fn shared_steps(&self) -> Arc<[StepRecord]> {
        Arc::clone(&self.steps)
    }

    pub fn base(&self) -> &[f64] {
        &self.base
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// What a render adapter should draw at the current cursor.
    pub fn frame(&self) -> Frame {
        Frame::capture(self)
    }

    fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    fn advance(&mut self) -> bool {
        let Some(last) = self.last_index() else {
            return false;
        };
        let next = self.cursor.map_or(0, |c| c + 1);
        if next > last {
            return false;
        }
        self.cursor = Some(next);
        true
    }
}

fn check_lengths(base: &[f64], steps: &[StepRecord]) -> Result<(), PlaybackError> {
    match steps
        .iter()
        .position(|step| step.array.len() != base.len())
    {
        Some(step) => Err(PlaybackError::SnapshotLengthMismatch {
            step,
            expected: base.len(),
            got: steps[step].array.len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_steps::sort::bubble_sort_steps;

    /// Helper: a player over bubble sort of [3, 1, 2] (3 steps).
    fn small_player() -> Player {
        let base = vec![3.0, 1.0, 2.0];
        let steps = bubble_sort_steps(&base);
        assert_eq!(steps.len(), 3);
        Player::new(Algorithm::Bubble, base, steps, PlaybackConfig::default()).unwrap()
    }

    #[test]
    fn new_player_is_idle() {
        let player = small_player();
        assert_eq!(player.status(), PlaybackStatus::Idle);
        assert_eq!(player.cursor(), None);
        assert!(player.current_step().is_none());
    }

    #[test]
    fn tick_without_play_does_nothing() {
        let mut player = small_player();
        assert!(!player.tick());
        assert_eq!(player.cursor(), None);
    }

    #[test]
    fn play_advances_to_the_end_and_stops() {
        let mut player = small_player();
        assert!(player.play());
        assert_eq!(player.status(), PlaybackStatus::Playing);

        assert!(player.tick());
        assert_eq!(player.cursor(), Some(0));
        assert!(player.tick());
        assert!(player.tick());
        assert_eq!(player.cursor(), Some(2));
        assert_eq!(player.status(), PlaybackStatus::Finished);
        assert!(!player.is_playing());

        // No overrun.
        assert!(!player.tick());
        assert_eq!(player.cursor(), Some(2));
    }

    #[test]
    fn play_on_finished_trace_is_refused() {
        let mut player = small_player();
        player.seek(99);
        assert_eq!(player.cursor(), Some(2));
        assert!(player.is_finished());
        assert!(!player.play());
    }

    #[test]
    fn pause_keeps_cursor() {
        let mut player = small_player();
        player.play();
        player.tick();
        player.pause();
        assert_eq!(player.status(), PlaybackStatus::Paused);
        assert!(!player.tick());
        assert_eq!(player.cursor(), Some(0));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut player = small_player();
        player.play();
        player.tick();
        player.reset();
        assert_eq!(player.status(), PlaybackStatus::Idle);
        assert_eq!(player.cursor(), None);
    }

    #[test]
    fn manual_stepping_respects_both_ends() {
        let mut player = small_player();
        assert!(!player.step_back());
        assert!(player.step_forward());
        assert!(player.step_forward());
        assert!(player.step_forward());
        assert!(!player.step_forward());
        assert_eq!(player.cursor(), Some(2));
        assert!(player.step_back());
        assert_eq!(player.status(), PlaybackStatus::Paused);
        assert!(player.step_back());
        assert!(player.step_back());
        assert_eq!(player.cursor(), None);
    }

    #[test]
    fn empty_trace_never_plays() {
        let mut player =
            Player::new(Algorithm::Bubble, vec![1.0], vec![], PlaybackConfig::default()).unwrap();
        assert!(!player.play());
        assert!(!player.step_forward());
        assert!(!player.is_finished());
        player.seek(3);
        assert_eq!(player.cursor(), None);
    }

    #[test]
    fn load_replaces_trace_and_resets() {
        let mut player = small_player();
        player.seek(1);
        let base = vec![2.0, 1.0];
        let steps = bubble_sort_steps(&base);
        player.load(Algorithm::Bubble, base.clone(), steps).unwrap();
        assert_eq!(player.cursor(), None);
        assert_eq!(player.base(), base.as_slice());
        assert_eq!(player.steps().len(), 1);
    }

    #[test]
    fn mismatched_snapshots_are_rejected() {
        let steps = bubble_sort_steps(&[2.0, 1.0]);
        let err = Player::new(Algorithm::Bubble, vec![1.0], steps, PlaybackConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            PlaybackError::SnapshotLengthMismatch {
                step: 0,
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn set_speed_validates_range() {
        let mut player = small_player();
        player.set_speed(150).unwrap();
        assert_eq!(player.config().speed_ms, 150);
        assert!(player.set_speed(5).is_err());
        assert_eq!(player.config().speed_ms, 150);
    }

    #[test]
    fn shared_steps_are_the_same_allocation() {
        let player = small_player();
        let a = player.shared_steps();
        let b = player.shared_steps();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
