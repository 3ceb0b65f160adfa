// SPDX-License-Identifier: MPL-2.0
//! Auto-hide scheduling for the control overlay.
//!
//! A single-slot, cancellable delayed action: at most one hide is pending
//! at any time, and starting a new one aborts the previous one first.
//! When the delay elapses the overlay is hidden only if playback is still
//! running and the overlay is still visible.
//!
//! The screen drives the scheduler from playback transitions:
//!
//! | Transition              | Call                        |
//! |-------------------------|-----------------------------|
//! | playing state changed   | [`AutoHideScheduler::on_playing_changed`] |
//! | tap on the video        | [`AutoHideScheduler::show_overlay`] |
//! | tap on the overlay      | [`AutoHideScheduler::hide_overlay`] |
//! | slider touch down       | [`AutoHideScheduler::on_seek_drag_start`] |
//! | slider released         | [`AutoHideScheduler::on_seek_drag_end`] |

use super::OverlayTimeout;
use crate::video_player::StateStore;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Shared visibility flag of the control overlay.
#[derive(Debug, Clone)]
pub struct OverlayVisibility(Arc<AtomicBool>);

impl OverlayVisibility {
    /// Creates a flag in the visible state (controls start shown).
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn show(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn hide(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for OverlayVisibility {
    fn default() -> Self {
        Self::new()
    }
}

type PlayingProbe = Arc<dyn Fn() -> bool + Send + Sync>;

struct PendingHide {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Single-slot delayed overlay hide.
pub struct AutoHideScheduler {
    delay: Duration,
    overlay: OverlayVisibility,
    is_playing: PlayingProbe,
    slot: Arc<Mutex<Option<PendingHide>>>,
    next_generation: u64,
}

impl AutoHideScheduler {
    /// Creates a scheduler that consults `is_playing` when the delay elapses.
    pub fn new(
        timeout: OverlayTimeout,
        overlay: OverlayVisibility,
        is_playing: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            delay: timeout.as_duration(),
            overlay,
            is_playing: Arc::new(is_playing),
            slot: Arc::new(Mutex::new(None)),
            next_generation: 0,
        }
    }

    /// Creates a scheduler that reads the playing flag from a controller's
    /// published state.
    pub fn for_store(timeout: OverlayTimeout, overlay: OverlayVisibility, store: StateStore) -> Self {
        Self::new(timeout, overlay, move || store.read(|s| s.is_playing))
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayVisibility {
        &self.overlay
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns true while a hide is scheduled and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Schedules a hide after the delay, cancelling any pending one.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn schedule(&mut self) {
        self.cancel();

        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);

        let delay = self.delay;
        let overlay = self.overlay.clone();
        let is_playing = Arc::clone(&self.is_playing);
        let slot = Arc::clone(&self.slot);

        // Holding the slot lock across the spawn keeps the task from
        // clearing the slot before its own entry is stored.
        let mut guard = self.slot.lock();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if is_playing() && overlay.is_visible() {
                overlay.hide();
                tracing::debug!("control overlay auto-hidden");
            }
            let mut slot = slot.lock();
            if slot.as_ref().is_some_and(|p| p.generation == generation) {
                *slot = None;
            }
        });
        *guard = Some(PendingHide { generation, handle });
    }

    /// Cancels the pending hide, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.slot.lock().take() {
            pending.handle.abort();
        }
    }

    /// Shows the overlay and restarts the countdown when playing.
    pub fn show_overlay(&mut self) {
        self.cancel();
        self.overlay.show();
        if (self.is_playing)() {
            self.schedule();
        }
    }

    /// Hides the overlay immediately.
    pub fn hide_overlay(&mut self) {
        self.cancel();
        self.overlay.hide();
    }

    /// The user grabbed the progress slider: keep the overlay up.
    pub fn on_seek_drag_start(&mut self) {
        self.cancel();
    }

    /// The user released the progress slider.
    pub fn on_seek_drag_end(&mut self) {
        if (self.is_playing)() {
            self.schedule();
        }
    }

    /// Reacts to a change of the controller's playing flag.
    ///
    /// Starting playback begins the countdown unless one is already
    /// running. Pausing reveals a hidden overlay, or stops the countdown
    /// of a visible one.
    pub fn on_playing_changed(&mut self, playing: bool) {
        if playing {
            if !self.is_pending() {
                self.schedule();
            }
        } else if self.overlay.is_visible() {
            self.cancel();
        } else {
            self.show_overlay();
        }
    }
}

impl fmt::Debug for AutoHideScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoHideScheduler")
            .field("delay", &self.delay)
            .field("overlay_visible", &self.overlay.is_visible())
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl Drop for AutoHideScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
