// SPDX-License-Identifier: MPL-2.0
//! Playback-related value objects shared by the controller and the screen.

use crate::domain::catalog::Video;

/// Progress of the catalog fetch that precedes any playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// Fetch in flight. This is the state a fresh controller starts in.
    #[default]
    Loading,
    /// Catalog decoded and stored.
    Loaded,
    /// Fetch failed; the error message holds the reason.
    Failed,
}

impl CatalogStatus {
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_loaded(self) -> bool {
        matches!(self, Self::Loaded)
    }

    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Text details of the current video, shown under the player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoDetails {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

impl From<&Video> for VideoDetails {
    fn from(video: &Video) -> Self {
        Self {
            title: video.title.clone(),
            subtitle: video.subtitle.clone(),
            description: video.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_loading() {
        assert_eq!(CatalogStatus::default(), CatalogStatus::Loading);
    }

    #[test]
    fn status_checks() {
        assert!(CatalogStatus::Loading.is_loading());
        assert!(!CatalogStatus::Loaded.is_loading());

        assert!(CatalogStatus::Loaded.is_loaded());
        assert!(!CatalogStatus::Failed.is_loaded());

        assert!(CatalogStatus::Failed.is_failed());
        assert!(!CatalogStatus::Loading.is_failed());
    }

    #[test]
    fn details_copy_video_text() {
        let video = Video {
            title: "Sintel".into(),
            subtitle: "By Blender Foundation".into(),
            description: "A lonely young woman.".into(),
            thumb: "images/Sintel.jpg".into(),
            sources: vec!["https://example.com/sintel.mp4".into()],
        };
        let details = VideoDetails::from(&video);
        assert_eq!(details.title, "Sintel");
        assert_eq!(details.subtitle, "By Blender Foundation");
        assert_eq!(details.description, "A lonely young woman.");
    }
}
