// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of infrastructure concerns. Neither kind of error is fatal to the
//! playback controller: both end up as a displayable message.

mod catalog;
mod playback;

pub use catalog::CatalogError;
pub use playback::{PlaybackError, GENERIC_LOAD_FAILURE};
