// SPDX-License-Identifier: MPL-2.0
//! Player port definition.
//!
//! This module defines the [`Player`] trait: the transport boundary between
//! the playback controller and an opaque media pipeline. Platform adapters
//! implement it; the controller is the only caller.
//!
//! # Design Notes
//!
//! - Methods are not `async`. Asynchronous outcomes (status, periodic
//!   time, end of media, seek completion) come back as [`PlayerEvent`]s
//!   through a channel owned by the adapter.
//! - Every event is tagged with the [`ItemId`] it belongs to, so the
//!   controller can drop events from an item it has already replaced.
//! - Seek completions carry the [`SeekToken`] of the request they answer.

use std::fmt;
use std::time::Duration;

/// Identifies one loaded player item (one call to [`Player::load`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Identifies one seek request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeekToken(u64);

impl SeekToken {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// How precisely a seek must land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekTolerance {
    /// Zero tolerance before and after the target.
    Exact,
    /// Whatever the pipeline prefers (usually the nearest keyframe).
    #[default]
    Default,
}

/// Readiness of the current item, as reported by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Not yet known; the item is still loading.
    Unknown,
    /// The item can be played.
    Ready,
    /// The item failed to load, with an optional human-readable detail.
    Failed(Option<String>),
}

/// What happened, for a [`PlayerEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEventKind {
    /// Item status changed.
    Status(ItemStatus),
    /// Buffering indicator: `false` means playback is likely to stall.
    PlaybackLikelyToKeepUp(bool),
    /// Periodic media-time tick, in seconds.
    PeriodicTime(f64),
    /// The item played through to its end.
    DidReachEnd,
    /// A previously issued seek finished (`finished == false` if it was
    /// interrupted by the pipeline).
    SeekCompleted { token: SeekToken, finished: bool },
}

/// Asynchronous signal from the player about one item.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEvent {
    pub item: ItemId,
    pub kind: PlayerEventKind,
}

impl PlayerEvent {
    #[must_use]
    pub fn new(item: ItemId, kind: PlayerEventKind) -> Self {
        Self { item, kind }
    }
}

/// Port for the opaque playback pipeline.
///
/// # Thread Safety
///
/// Implementations must be `Send` so the controller owning them can live
/// in its own task. They are not required to be `Sync`.
///
/// # Lifecycle
///
/// 1. `detach_observers()` for the outgoing item (if any)
/// 2. `load()` the new source under a fresh [`ItemId`]
/// 3. `attach_observers()` for the new item
/// 4. transport commands (`play`, `pause`, `seek`, `set_rate`)
pub trait Player: Send {
    /// Replaces the current item with a new one built from `source`.
    fn load(&mut self, source: &str, item: ItemId);

    /// Starts or resumes playback at the current rate.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    /// Starts an asynchronous seek; completion is reported as
    /// [`PlayerEventKind::SeekCompleted`] carrying `token`.
    fn seek(&mut self, to_secs: f64, tolerance: SeekTolerance, token: SeekToken);

    /// Sets the playback rate.
    fn set_rate(&mut self, rate: f64);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Duration of the current item in seconds. May be NaN or infinite
    /// while unknown.
    fn duration(&self) -> f64;

    /// Starts status, end-of-media and periodic-time reporting for `item`.
    fn attach_observers(&mut self, item: ItemId, interval: Duration);

    /// Stops all reporting for `item`. Must take effect before returning.
    fn detach_observers(&mut self, item: ItemId);
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn load(&mut self, source: &str, item: ItemId) {
        (**self).load(source, item);
    }

    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn seek(&mut self, to_secs: f64, tolerance: SeekTolerance, token: SeekToken) {
        (**self).seek(to_secs, tolerance, token);
    }

    fn set_rate(&mut self, rate: f64) {
        (**self).set_rate(rate);
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn attach_observers(&mut self, item: ItemId, interval: Duration) {
        (**self).attach_observers(item, interval);
    }

    fn detach_observers(&mut self, item: ItemId) {
        (**self).detach_observers(item);
    }
}
