// SPDX-License-Identifier: MPL-2.0
//! Auto-hide delay for the control overlay.

use crate::config::{
    DEFAULT_OVERLAY_TIMEOUT_SECS, MAX_OVERLAY_TIMEOUT_SECS, MIN_OVERLAY_TIMEOUT_SECS,
};
use std::time::Duration;

/// Seconds of inactivity before the control overlay hides during playback.
///
/// Always within 1–30 seconds; out-of-range values are clamped.
///
/// # Example
///
/// ```
/// use reelcore::ui::state::OverlayTimeout;
///
/// assert_eq!(OverlayTimeout::default().value(), 2);
/// assert_eq!(OverlayTimeout::new(100).value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTimeout(u32);

impl OverlayTimeout {
    /// Creates a new overlay timeout value, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_OVERLAY_TIMEOUT_SECS, MAX_OVERLAY_TIMEOUT_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for OverlayTimeout {
    fn default() -> Self {
        Self(DEFAULT_OVERLAY_TIMEOUT_SECS)
    }
}

impl From<OverlayTimeout> for Duration {
    fn from(timeout: OverlayTimeout) -> Self {
        timeout.as_duration()
    }
}
