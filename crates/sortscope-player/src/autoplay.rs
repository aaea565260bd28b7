//! Background auto-advance timer for a [`Player`].
//!
//! [`AutoPlay`] owns at most one tokio task per player. The task ticks the
//! player on a fixed period, publishes each new [`Frame`] on a watch channel,
//! and exits on its own once the player stops playing (finished or paused).
//! [`AutoPlay::stop`] aborts the task at any point; the step list is shared
//! read-only, so cancellation never needs a rollback.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::error::PlaybackError;
use crate::frame::Frame;
use crate::player::Player;

pub struct AutoPlay {
    player: Arc<Mutex<Player>>,
    frames: watch::Sender<Frame>,
    task: Option<JoinHandle<()>>,
}

impl AutoPlay {
    pub fn new(player: Player) -> Self {
        let (frames, _) = watch::channel(player.frame());
        AutoPlay {
            player: Arc::new(Mutex::new(player)),
            frames,
            task: None,
        }
    }

    /// Shared handle to the driven player, for manual commands.
    pub fn player(&self) -> Arc<Mutex<Player>> {
        Arc::clone(&self.player)
    }

    /// Receives the latest frame after every tick and command.
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frames.subscribe()
    }

    /// True while a timer task is alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Starts playback and the timer. A no-op while a timer is already
    /// running, or when the player refuses to play (empty or finished).
    /// Returns whether a timer is running afterwards.
    pub async fn start(&mut self) -> bool {
        if self.is_running() {
            return true;
        }

        let period = {
            let mut player = self.player.lock().await;
            if !player.play() {
                return false;
            }
            self.frames.send_replace(player.frame());
            player.config().period()
        };

        let player = Arc::clone(&self.player);
        let frames = self.frames.clone();
        tracing::info!(period_ms = period.as_millis() as u64, "auto-advance started");
        self.task = Some(tokio::spawn(async move {
            let mut tick = interval_at(Instant::now() + period, period);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tick.tick().await;
                let mut player = player.lock().await;
                if player.tick() {
                    frames.send_replace(player.frame());
                }
                if !player.is_playing() {
                    tracing::info!(cursor = ?player.cursor(), "auto-advance finished");
                    break;
                }
            }
        }));
        true
    }

    /// Cancels the timer and pauses the player.
    pub async fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::info!("auto-advance stopped");
        }
        let mut player = self.player.lock().await;
        player.pause();
        self.frames.send_replace(player.frame());
    }

    /// Stops the timer and rewinds the player.
    pub async fn reset(&mut self) {
        self.stop().await;
        let mut player = self.player.lock().await;
        player.reset();
        self.frames.send_replace(player.frame());
    }

    /// Changes the period. A running timer is restarted with the new period.
    pub async fn set_speed(&mut self, speed_ms: u64) -> Result<(), PlaybackError> {
        self.player.lock().await.set_speed(speed_ms)?;
        if self.is_running() {
            if let Some(task) = self.task.take() {
                task.abort();
            }
            self.start().await;
        }
        Ok(())
    }

    /// Waits for the current timer task to end on its own.
    pub async fn wait(&mut self) {
        if let Some(task) = self.task.take() {
            // An aborted task reports a JoinError; either way it has ended.
            let _ = task.await;
        }
    }
}

impl Drop for AutoPlay {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::PlaybackConfig;
    use sortscope_core::Algorithm;
    use sortscope_steps::sort::bubble_sort_steps;

    /// Helper: bubble sort of [3, 1, 2] (3 steps) at 100ms per step.
    fn autoplay() -> AutoPlay {
        let base = vec![3.0, 1.0, 2.0];
        let steps = bubble_sort_steps(&base);
        let config = PlaybackConfig {
            speed_ms: 100,
            ..PlaybackConfig::default()
        };
        AutoPlay::new(Player::new(Algorithm::Bubble, base, steps, config).unwrap())
    }

    async fn cursor(auto: &AutoPlay) -> Option<usize> {
        auto.player().lock().await.cursor()
    }

    #[tokio::test(start_paused = true)]
    async fn runs_to_the_last_step_and_stops() {
        let mut auto = autoplay();
        assert!(auto.start().await);
        auto.wait().await;

        let player = auto.player();
        let player = player.lock().await;
        assert_eq!(player.cursor(), Some(2));
        assert!(player.is_finished());
        assert!(!player.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn first_advance_waits_one_period() {
        let mut auto = autoplay();
        auto.start().await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cursor(&auto).await, None);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(cursor(&auto).await, Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_idempotent() {
        let mut auto = autoplay();
        auto.start().await;
        auto.start().await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        // A second timer would have advanced twice by now.
        assert_eq!(cursor(&auto).await, Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_without_touching_steps() {
        let mut auto = autoplay();
        let before = auto.player().lock().await.steps().to_vec();
        auto.start().await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        auto.stop().await;
        assert!(!auto.is_running());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(cursor(&auto).await, Some(0));
        assert_eq!(auto.player().lock().await.steps(), before.as_slice());
    }

    #[tokio::test(start_paused = true)]
    async fn frames_are_published_per_tick() {
        let mut auto = autoplay();
        let mut frames = auto.subscribe();
        auto.start().await;
        auto.wait().await;
        let last = frames.borrow_and_update().clone();
        assert!(last.finished);
        assert_eq!(last.array, vec![1.0, 2.0, 3.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn finished_player_does_not_start() {
        let mut auto = autoplay();
        auto.player().lock().await.seek(2);
        assert!(!auto.start().await);
        assert!(!auto.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_rewinds() {
        let mut auto = autoplay();
        auto.start().await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        auto.reset().await;
        assert_eq!(cursor(&auto).await, None);
        assert!(auto.start().await);
    }

    #[tokio::test(start_paused = true)]
    async fn set_speed_restarts_running_timer() {
        let mut auto = autoplay();
        auto.start().await;
        auto.set_speed(1000).await.unwrap();
        assert!(auto.is_running());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(cursor(&auto).await, None);
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(cursor(&auto).await, Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn set_speed_rejects_out_of_range() {
        let mut auto = autoplay();
        assert!(auto.set_speed(10).await.is_err());
    }
}
