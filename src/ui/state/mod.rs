// SPDX-License-Identifier: MPL-2.0
//! Screen-side state that is governed by playback transitions.

pub mod auto_hide;
pub mod overlay_timeout;

// Re-export commonly used types for convenience
pub use auto_hide::{AutoHideScheduler, OverlayVisibility};
pub use overlay_timeout::OverlayTimeout;
