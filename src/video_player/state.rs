// SPDX-License-Identifier: MPL-2.0
//! Observable playback state.
//!
//! [`PlaybackState`] is an immutable snapshot: the controller publishes a
//! fresh one after every transition, and the screen renders whatever
//! snapshot it last received.

use crate::config::DEFAULT_TIME_TEXT;
use crate::domain::video::{CatalogStatus, PlaybackRate, VideoDetails};

/// Snapshot of everything the screen shows about playback.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Whether the catalog is still loading, loaded, or failed.
    pub catalog_status: CatalogStatus,

    /// Playback was commanded to run.
    pub is_playing: bool,

    /// The current item reported ready. False while loading or failed.
    pub is_ready_to_play: bool,

    /// Secondary indicator: the player expects playback to stall.
    /// Never overrides `is_ready_to_play` or `error_message`.
    pub is_buffering: bool,

    /// Position / duration, in `[0, 1]`. Zero while the duration is unknown.
    pub progress: f64,

    pub current_time_text: String,
    pub duration_time_text: String,

    /// Time under an in-progress, not yet committed slider drag.
    pub seek_preview_text: String,

    pub error_message: Option<String>,

    /// Index of the current video within the active category.
    pub current_video_index: usize,

    /// Text details of the current video, set once it reports ready.
    pub current_video: Option<VideoDetails>,

    pub playback_rate: PlaybackRate,

    /// A slider drag is in progress; periodic time ticks leave `progress` alone.
    pub is_seeking: bool,
}

impl PlaybackState {
    /// The `current / duration` label.
    #[must_use]
    pub fn time_text(&self) -> String {
        format!("{} / {}", self.current_time_text, self.duration_time_text)
    }

    /// True while the screen should show its loading indicator.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        if self.catalog_status.is_loading() {
            return true;
        }
        self.error_message.is_none() && (!self.is_ready_to_play || self.is_buffering)
    }

    /// Transport controls are only usable once the item is ready.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.is_ready_to_play
    }

    /// Resets the per-item fields when a new item replaces the current one.
    ///
    /// `is_seeking` belongs to the slider gesture, not the item, and is left
    /// alone.
    pub(crate) fn reset_item(&mut self) {
        self.is_ready_to_play = false;
        self.is_buffering = false;
        self.progress = 0.0;
        self.current_time_text = DEFAULT_TIME_TEXT.to_string();
        self.duration_time_text = DEFAULT_TIME_TEXT.to_string();
        self.seek_preview_text = DEFAULT_TIME_TEXT.to_string();
        self.current_video = None;
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            catalog_status: CatalogStatus::Loading,
            is_playing: false,
            is_ready_to_play: false,
            is_buffering: false,
            progress: 0.0,
            current_time_text: DEFAULT_TIME_TEXT.to_string(),
            duration_time_text: DEFAULT_TIME_TEXT.to_string(),
            seek_preview_text: DEFAULT_TIME_TEXT.to_string(),
            error_message: None,
            current_video_index: 0,
            current_video: None,
            playback_rate: PlaybackRate::default(),
            is_seeking: false,
        }
    }
}
