// SPDX-License-Identifier: MPL-2.0
//! Playback engine for the video screen.
//!
//! [`PlaybackController`] turns user commands and [`Player`] events into
//! [`PlaybackState`] snapshots. It can be driven directly, or moved into
//! its own Tokio task with [`spawn_controller`] and driven through a
//! [`PlaybackHandle`].
//!
//! [`Player`]: crate::application::port::Player

mod actor;
mod controller;
pub mod item;
pub mod seek;
mod state;
mod store;
pub mod time_format;

pub use actor::{
    player_event_channel, spawn_controller, Command, PlaybackHandle, PlayerEventReceiver,
    PlayerEventSender,
};
pub use controller::{PlaybackController, NO_VIDEOS_MESSAGE};
pub use item::ItemSlot;
pub use seek::{CompletedSeek, SeekPurpose, SeekTracker};
pub use state::PlaybackState;
pub use store::{StateStore, StateSubscription};
pub use time_format::format_time;
