// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate presets.
pub mod rate_bounds {
    /// The fixed set of selectable rates, in cycling order.
    pub const PRESETS: &[f64] = &[0.5, 1.0, 1.5, 2.0];
    /// Default playback rate (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
}

/// Playback rate, guaranteed to be one of [`rate_bounds::PRESETS`].
///
/// Arbitrary values snap to the nearest preset, so an invalid rate can
/// never reach the player.
///
/// # Example
///
/// ```
/// use reelcore::domain::video::PlaybackRate;
///
/// let rate = PlaybackRate::new(1.4);
/// assert_eq!(rate.value(), 1.5);
///
/// // Cycling wraps around after the fastest preset
/// assert_eq!(PlaybackRate::new(2.0).next().value(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a playback rate, snapping to the nearest preset.
    ///
    /// Non-finite input yields the default rate.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if !rate.is_finite() {
            return Self::default();
        }
        let nearest = rate_bounds::PRESETS
            .iter()
            .copied()
            .min_by(|a, b| (a - rate).abs().total_cmp(&(b - rate).abs()))
            .unwrap_or(rate_bounds::DEFAULT);
        Self(nearest)
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the next preset, wrapping from the fastest back to the slowest.
    #[must_use]
    pub fn next(self) -> Self {
        let presets = rate_bounds::PRESETS;
        let index = self.preset_index();
        Self(presets[(index + 1) % presets.len()])
    }

    fn preset_index(self) -> usize {
        rate_bounds::PRESETS
            .iter()
            .position(|&p| (p - self.0).abs() < 0.001)
            .unwrap_or(0)
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}

// =============================================================================
// SkipInterval
// =============================================================================

/// Skip interval bounds (1 to 60 seconds).
pub mod skip_bounds {
    /// Minimum skip interval in seconds.
    pub const MIN: f64 = 1.0;
    /// Maximum skip interval in seconds.
    pub const MAX: f64 = 60.0;
    /// Default skip interval in seconds.
    pub const DEFAULT: f64 = 10.0;
}

/// Distance covered by the skip forward/backward buttons, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipInterval(f64);

impl SkipInterval {
    /// Creates a new skip interval, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(skip_bounds::MIN, skip_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SkipInterval {
    fn default() -> Self {
        Self(skip_bounds::DEFAULT)
    }
}
