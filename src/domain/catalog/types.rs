// SPDX-License-Identifier: MPL-2.0
//! Catalog, category and video value types.
//!
//! The serde layout matches the bundled `media.json` wire format. Every
//! field is required; an absent field is a decode error.

use serde::{Deserialize, Serialize};

/// The full browsable set of categories and videos.
///
/// # Example
///
/// ```
/// use reelcore::domain::catalog::Catalog;
///
/// let json = r#"{ "categories": [ { "name": "Education", "videos": [] } ] }"#;
/// let catalog = Catalog::from_json(json).unwrap();
///
/// assert_eq!(catalog.category_count(), 1);
/// assert_eq!(catalog.category(0).unwrap().name, "Education");
/// assert!(catalog.category(1).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

/// A named group of videos (one table section on screen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub videos: Vec<Video>,
}

/// A single playable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Thumbnail URI.
    pub thumb: String,
    /// Source URIs; the first one is the default playback source.
    pub sources: Vec<String>,
}

impl Catalog {
    /// Decodes a catalog from its JSON wire format.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when a field is missing or
    /// has the wrong type.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Decodes a catalog from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_json`].
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Number of categories (table sections).
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns the category at `index`, if any.
    #[must_use]
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Returns the video at (`section`, `row`), if both indices are in range.
    #[must_use]
    pub fn video(&self, section: usize, row: usize) -> Option<&Video> {
        self.category(section)?.video(row)
    }

    /// Total number of videos across all categories.
    #[must_use]
    pub fn total_videos(&self) -> usize {
        self.categories.iter().map(Category::video_count).sum()
    }
}

impl Category {
    #[must_use]
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    #[must_use]
    pub fn video(&self, index: usize) -> Option<&Video> {
        self.videos.get(index)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Video {
    /// Returns the default playback source (the first URI), if any.
    #[must_use]
    pub fn default_source(&self) -> Option<&str> {
        self.sources.first().map(String::as_str)
    }

    /// Returns true if the video has at least one non-empty source.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.default_source().is_some_and(|s| !s.trim().is_empty())
    }
}
