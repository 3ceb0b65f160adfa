// SPDX-License-Identifier: MPL-2.0
//! Errors produced by playback commands and player status reports.

use thiserror::Error;

/// Message used when the player reports a failure without any detail.
pub const GENERIC_LOAD_FAILURE: &str = "Failed to load video";

/// Playback failures surfaced to the screen as an error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The player could not load the current item.
    ///
    /// Displays the player-provided detail verbatim when there is one.
    #[error("{}", .0.as_deref().unwrap_or(GENERIC_LOAD_FAILURE))]
    LoadFailed(Option<String>),

    /// A video index outside the active category was requested.
    #[error("Video index {index} is out of range ({count} videos available)")]
    InvalidIndex { index: usize, count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failed_uses_detail_verbatim() {
        let err = PlaybackError::LoadFailed(Some("404".to_string()));
        assert_eq!(err.to_string(), "404");
    }

    #[test]
    fn load_failed_without_detail_uses_fallback() {
        assert_eq!(
            PlaybackError::LoadFailed(None).to_string(),
            GENERIC_LOAD_FAILURE
        );
    }

    #[test]
    fn invalid_index_mentions_range() {
        let err = PlaybackError::InvalidIndex { index: 5, count: 2 };
        let message = err.to_string();
        assert!(message.contains('5'));
        assert!(message.contains("2 videos"));
    }
}
