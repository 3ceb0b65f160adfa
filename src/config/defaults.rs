// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Playback**: skip distance, periodic time interval, end-of-media tolerance
//! - **Overlay**: control overlay auto-hide timeout
//! - **Catalog**: bundled catalog file name
//! - **Logging**: default log filter

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default distance for the skip forward/backward buttons (in seconds).
pub const DEFAULT_SKIP_INTERVAL_SECS: f64 = 10.0;

/// Default interval of the periodic time signal (in seconds of media time).
pub const DEFAULT_TIME_UPDATE_INTERVAL_SECS: f64 = 0.5;

/// Minimum periodic time interval (in seconds).
pub const MIN_TIME_UPDATE_INTERVAL_SECS: f64 = 0.1;

/// Maximum periodic time interval (in seconds).
pub const MAX_TIME_UPDATE_INTERVAL_SECS: f64 = 5.0;

/// A paused position this close to the duration counts as end of media.
pub const END_OF_MEDIA_TOLERANCE_SECS: f64 = 0.1;

/// Text shown for an unknown or invalid time.
pub const DEFAULT_TIME_TEXT: &str = "00:00";

// ==========================================================================
// Overlay/Timeout Defaults
// ==========================================================================

/// Default auto-hide timeout for the control overlay (in seconds).
pub const DEFAULT_OVERLAY_TIMEOUT_SECS: u32 = 2;

/// Minimum overlay timeout (in seconds).
pub const MIN_OVERLAY_TIMEOUT_SECS: u32 = 1;

/// Maximum overlay timeout (in seconds).
pub const MAX_OVERLAY_TIMEOUT_SECS: u32 = 30;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// File name of the bundled catalog asset.
pub const DEFAULT_CATALOG_FILE: &str = "media.json";

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
