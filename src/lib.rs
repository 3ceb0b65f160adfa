// SPDX-License-Identifier: MPL-2.0
//! `reelcore` is the playback-state controller behind a video player screen.
//!
//! It loads a media catalog, drives an opaque [`Player`](application::port::Player)
//! through load, play, pause, seek, skip and rate changes, reacts to the
//! player's asynchronous status reports, and publishes an observable
//! [`PlaybackState`](video_player::PlaybackState). The control overlay's
//! auto-hide timer lives in [`ui::state`].
//!
//! # Example
//!
//! ```no_run
//! # async fn run(player: impl reelcore::application::port::Player + 'static) {
//! use reelcore::infrastructure::JsonCatalogLoader;
//! use reelcore::video_player::{player_event_channel, spawn_controller};
//!
//! let (config, _warning) = reelcore::config::load();
//! reelcore::logging::init(&config);
//!
//! // The player adapter reports its events on `_events_tx`.
//! let (_events_tx, events_rx) = player_event_channel();
//! let handle = spawn_controller(
//!     JsonCatalogLoader::from_config(&config),
//!     player,
//!     events_rx,
//!     &config,
//! );
//!
//! let mut states = handle.subscribe();
//! while let Some(state) = states.next().await {
//!     println!("{} playing={}", state.time_text(), state.is_playing);
//! }
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/reelcore/0.3.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
