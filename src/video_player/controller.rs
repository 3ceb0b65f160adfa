// SPDX-License-Identifier: MPL-2.0
//! Playback controller for the video screen.
//!
//! [`PlaybackController`] owns the catalog, the [`Player`] and the current
//! item. User commands and player events come in as method calls; every
//! resulting transition is published through a [`StateStore`].
//!
//! All methods run on one logical executor. The controller is `Send` so it
//! can be moved into its own task (see [`spawn_controller`]), but it is never
//! shared.
//!
//! [`spawn_controller`]: super::actor::spawn_controller

use super::item::ItemSlot;
use super::seek::{SeekPurpose, SeekTracker};
use super::state::PlaybackState;
use super::store::{StateStore, StateSubscription};
use super::time_format::format_time;
use crate::application::port::{
    ItemId, ItemStatus, Player, PlayerEvent, PlayerEventKind, SeekTolerance, SeekToken,
};
use crate::config::{Config, DEFAULT_TIME_TEXT, END_OF_MEDIA_TOLERANCE_SECS};
use crate::domain::catalog::{Catalog, Category, Video};
use crate::domain::error::{CatalogError, PlaybackError};
use crate::domain::video::{CatalogStatus, PlaybackRate, SkipInterval, VideoDetails};
use std::time::Duration;

/// Shown when the catalog loads but its active category is empty.
pub const NO_VIDEOS_MESSAGE: &str = "No videos available";

/// The screen only ever plays from the first category.
const ACTIVE_CATEGORY: usize = 0;

/// Playback state machine for a single screen.
#[derive(Debug)]
pub struct PlaybackController<P: Player> {
    player: P,
    store: StateStore,
    catalog: Option<Catalog>,
    item: ItemSlot,
    seeks: SeekTracker,
    skip_interval: SkipInterval,
    time_update_interval: Duration,
}

impl<P: Player> PlaybackController<P> {
    /// Creates a controller in the catalog-loading state. Nothing is sent to
    /// the player until a catalog arrives.
    pub fn new(player: P, config: &Config) -> Self {
        Self {
            player,
            store: StateStore::default(),
            catalog: None,
            item: ItemSlot::new(),
            seeks: SeekTracker::new(),
            skip_interval: config.skip_interval(),
            time_update_interval: config.time_update_interval(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    #[must_use]
    pub fn subscribe(&self) -> StateSubscription {
        self.store.subscribe()
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.store.current()
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// The category the screen plays from, once the catalog is loaded.
    #[must_use]
    pub fn active_category(&self) -> Option<&Category> {
        self.catalog.as_ref()?.category(ACTIVE_CATEGORY)
    }

    /// Number of videos in the active category.
    #[must_use]
    pub fn video_count(&self) -> usize {
        self.active_category().map_or(0, Category::video_count)
    }

    #[must_use]
    pub fn current_item(&self) -> Option<ItemId> {
        self.item.current()
    }

    #[must_use]
    pub fn skip_interval(&self) -> SkipInterval {
        self.skip_interval
    }

    #[must_use]
    pub fn player(&self) -> &P {
        &self.player
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Applies the result of the catalog fetch.
    ///
    /// On success the first video of the active category starts loading.
    pub fn on_catalog_loaded(&mut self, result: Result<Catalog, CatalogError>) {
        match result {
            Ok(catalog) => {
                tracing::info!(
                    categories = catalog.category_count(),
                    videos = catalog.total_videos(),
                    "catalog loaded"
                );
                let has_videos = catalog
                    .category(ACTIVE_CATEGORY)
                    .is_some_and(|category| !category.is_empty());
                self.catalog = Some(catalog);
                self.store.update(|s| {
                    s.catalog_status = CatalogStatus::Loaded;
                    s.error_message = if has_videos {
                        None
                    } else {
                        Some(NO_VIDEOS_MESSAGE.to_string())
                    };
                });
                if has_videos {
                    self.load_video(0);
                } else {
                    tracing::warn!("catalog has no videos to play");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog fetch failed");
                self.store.update(|s| {
                    s.catalog_status = CatalogStatus::Failed;
                    s.error_message = Some(err.to_string());
                });
            }
        }
    }

    // =========================================================================
    // Item loading and navigation
    // =========================================================================

    /// Replaces the current item with video `index` of the active category
    /// and starts playing it.
    ///
    /// An index outside the category, or a video without a playable source,
    /// only sets the error message; the current item keeps playing.
    pub fn load_video(&mut self, index: usize) {
        let video = match self.playable_video(index) {
            Ok(video) => video,
            Err(err) => {
                tracing::warn!(index, error = %err, "cannot load video");
                self.store.update(|s| s.error_message = Some(err.to_string()));
                return;
            }
        };
        let Some(source) = video.default_source().map(str::to_owned) else {
            return;
        };

        self.player.pause();
        let release_drag = self.seeks.reset();
        let item = self
            .item
            .replace(&mut self.player, &source, self.time_update_interval);
        self.player.play();

        tracing::info!(index, %item, title = %video.title, "loading video");
        self.store.update(|s| {
            s.reset_item();
            if release_drag {
                s.is_seeking = false;
            }
            s.error_message = None;
            s.current_video_index = index;
            s.is_playing = true;
        });
    }

    fn playable_video(&self, index: usize) -> Result<Video, PlaybackError> {
        let count = self.video_count();
        let video = self
            .active_category()
            .and_then(|category| category.video(index))
            .ok_or(PlaybackError::InvalidIndex { index, count })?;
        if !video.is_playable() {
            return Err(PlaybackError::LoadFailed(Some(format!(
                "\"{}\" has no playable source",
                video.title
            ))));
        }
        Ok(video.clone())
    }

    /// Handles a tap on a catalog row. Rows outside the active category are
    /// ignored.
    pub fn select_video(&mut self, section: usize, row: usize) {
        if section != ACTIVE_CATEGORY {
            tracing::debug!(section, row, "ignoring selection outside the active category");
            return;
        }
        self.load_video(row);
    }

    /// Loads the next video, wrapping to the first after the last.
    pub fn next_video(&mut self) {
        let count = self.video_count();
        if count == 0 {
            return;
        }
        let current = self.store.read(|s| s.current_video_index);
        self.load_video((current + 1) % count);
    }

    /// Loads the previous video, wrapping to the last before the first.
    pub fn prev_video(&mut self) {
        let count = self.video_count();
        if count == 0 {
            return;
        }
        let current = self.store.read(|s| s.current_video_index).min(count - 1);
        self.load_video((current + count - 1) % count);
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Pauses when playing. Otherwise plays, restarting from zero first
    /// when the position sits at the end of the media.
    pub fn toggle_play_pause(&mut self) {
        if self.item.current().is_none() {
            return;
        }
        if self.store.read(|s| s.is_playing) {
            self.pause();
            return;
        }
        if self.is_at_end() {
            let token = self.seeks.begin(SeekPurpose::RestartFromEnd);
            tracing::debug!(?token, "restarting from the beginning");
            self.player.seek(0.0, SeekTolerance::Exact, token);
            return;
        }
        self.player.play();
        self.store.update(|s| s.is_playing = true);
    }

    /// Pauses playback. Safe to call when already paused.
    pub fn pause(&mut self) {
        self.player.pause();
        self.store.update(|s| s.is_playing = false);
    }

    /// The screen left the foreground.
    pub fn enter_background(&mut self) {
        tracing::debug!("entering background");
        self.pause();
    }

    /// Switches to `rate` without changing whether playback runs.
    pub fn set_playback_rate(&mut self, rate: PlaybackRate) {
        self.player.set_rate(rate.value());
        self.store.update(|s| s.playback_rate = rate);
    }

    /// Advances to the next preset rate, wrapping after the fastest.
    pub fn cycle_playback_rate(&mut self) {
        let next = self.store.read(|s| s.playback_rate).next();
        self.set_playback_rate(next);
    }

    // =========================================================================
    // Seeking
    // =========================================================================

    /// A slider drag started. Periodic ticks stop moving `progress` until
    /// the committed seek completes.
    pub fn begin_seek(&mut self) {
        self.seeks.drag_started();
        self.store.update(|s| s.is_seeking = true);
    }

    /// Commits a seek to `fraction` of the duration with exact tolerance.
    ///
    /// With no item or an unknown duration nothing is sent to the player and
    /// the seek-in-progress flag is dropped.
    pub fn seek(&mut self, fraction: f64) {
        let Some(duration) = self.known_duration().filter(|_| self.item.current().is_some()) else {
            tracing::debug!(fraction, "seek ignored, duration unknown");
            self.store.update(|s| s.is_seeking = false);
            return;
        };
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let token = self.seeks.begin(SeekPurpose::Scrub);
        self.player
            .seek(fraction * duration, SeekTolerance::Exact, token);
    }

    /// Updates the preview label under a drag.
    pub fn update_seek_preview(&mut self, fraction: f64) {
        let text = self.formatted_time_for(fraction);
        self.store.update(|s| s.seek_preview_text = text);
    }

    /// Formats the time at `fraction` of the current duration.
    #[must_use]
    pub fn formatted_time_for(&self, fraction: f64) -> String {
        match self.known_duration() {
            Some(duration) if fraction.is_finite() => {
                format_time(fraction.clamp(0.0, 1.0) * duration)
            }
            _ => DEFAULT_TIME_TEXT.to_string(),
        }
    }

    /// Jumps forward by `secs`, clamped to the duration.
    pub fn skip_forward(&mut self, secs: f64) {
        self.skip_by(secs);
    }

    /// Jumps backward by `secs`, clamped at zero.
    pub fn skip_backward(&mut self, secs: f64) {
        self.skip_by(-secs);
    }

    /// Jumps forward by the configured skip interval.
    pub fn skip_forward_default(&mut self) {
        self.skip_forward(self.skip_interval.value());
    }

    /// Jumps backward by the configured skip interval.
    pub fn skip_backward_default(&mut self) {
        self.skip_backward(self.skip_interval.value());
    }

    fn skip_by(&mut self, delta: f64) {
        if self.item.current().is_none() || !delta.is_finite() {
            return;
        }
        let Some(duration) = self.known_duration() else {
            tracing::debug!(delta, "skip ignored, duration unknown");
            return;
        };
        let current = self.player.current_time();
        let current = if current.is_finite() { current } else { 0.0 };
        let target = (current + delta).clamp(0.0, duration);
        let token = self.seeks.begin(SeekPurpose::Skip);
        self.player.seek(target, SeekTolerance::Default, token);
    }

    // =========================================================================
    // Player events
    // =========================================================================

    /// Reacts to one player event. Events for any item other than the
    /// current one are dropped.
    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        if !self.item.accepts(event.item) {
            tracing::trace!(item = %event.item, "dropping event for a replaced item");
            return;
        }
        match event.kind {
            PlayerEventKind::Status(status) => self.on_status(status),
            PlayerEventKind::PlaybackLikelyToKeepUp(keeps_up) => {
                self.store.update(|s| s.is_buffering = !keeps_up);
            }
            PlayerEventKind::PeriodicTime(secs) => self.on_periodic_time(secs),
            PlayerEventKind::DidReachEnd => {
                tracing::debug!(item = %event.item, "reached end, advancing");
                self.next_video();
            }
            PlayerEventKind::SeekCompleted { token, finished } => {
                self.on_seek_completed(token, finished);
            }
        }
    }

    fn on_status(&mut self, status: ItemStatus) {
        match status {
            ItemStatus::Ready => {
                let index = self.store.read(|s| s.current_video_index);
                let details = self
                    .active_category()
                    .and_then(|category| category.video(index))
                    .map(VideoDetails::from);
                tracing::debug!(index, "item ready");
                self.store.update(|s| {
                    s.is_ready_to_play = true;
                    s.error_message = None;
                    s.current_video = details;
                });
            }
            ItemStatus::Failed(detail) => {
                let err = PlaybackError::LoadFailed(detail);
                tracing::warn!(error = %err, "item failed to load");
                self.store.update(|s| {
                    s.is_ready_to_play = false;
                    s.error_message = Some(err.to_string());
                });
            }
            ItemStatus::Unknown => {
                self.store.update(|s| s.is_ready_to_play = false);
            }
        }
    }

    fn on_periodic_time(&mut self, secs: f64) {
        let duration = self.player.duration();
        let progress = match self.known_duration() {
            Some(duration) if secs.is_finite() => (secs / duration).clamp(0.0, 1.0),
            _ => 0.0,
        };
        self.store.update(|s| {
            s.current_time_text = format_time(secs);
            s.duration_time_text = format_time(duration);
            if !s.is_seeking {
                s.progress = progress;
            }
        });
    }

    fn on_seek_completed(&mut self, token: SeekToken, finished: bool) {
        let Some(done) = self.seeks.complete(token) else {
            tracing::trace!(?token, "ignoring superseded seek");
            return;
        };
        if done.clears_seeking {
            self.store.update(|s| s.is_seeking = false);
        }
        if done.purpose == SeekPurpose::RestartFromEnd && finished {
            self.player.play();
            self.store.update(|s| s.is_playing = true);
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn known_duration(&self) -> Option<f64> {
        let duration = self.player.duration();
        (duration.is_finite() && duration > 0.0).then_some(duration)
    }

    fn is_at_end(&self) -> bool {
        let Some(duration) = self.known_duration() else {
            return false;
        };
        let current = self.player.current_time();
        current.is_finite() && (duration - current).abs() < END_OF_MEDIA_TOLERANCE_SECS
    }
}

impl<P: Player> Drop for PlaybackController<P> {
    fn drop(&mut self) {
        self.item.release(&mut self.player);
    }
}
