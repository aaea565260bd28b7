//! Playback driver and render adapters for sortscope step lists.
//!
//! # Modules
//!
//! - [`player`]: [`Player`], the cursor-over-steps state machine
//! - [`autoplay`]: [`AutoPlay`], a tokio timer that ticks a player
//! - [`frame`]: [`Frame`], highlights and explanation text for one position
//! - [`layout`]: bar, scatter and tree layouts of a snapshot
//! - [`config`]: [`PlaybackConfig`] with environment overrides
//! - [`error`]: [`PlaybackError`]

pub mod autoplay;
pub mod config;
pub mod error;
pub mod frame;
pub mod layout;
pub mod player;

pub use autoplay::AutoPlay;
pub use config::PlaybackConfig;
pub use error::PlaybackError;
pub use frame::{Frame, Highlight};
pub use layout::{bar_heights, scatter_positions, DisplayMode, Position, TreeLayout, TreeSlot, TreeSpacing};
pub use player::{PlaybackStatus, Player};
