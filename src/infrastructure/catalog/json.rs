// SPDX-License-Identifier: MPL-2.0
//! Catalog asset read from a JSON file.

use crate::application::port::CatalogLoader;
use crate::config::Config;
use crate::domain::catalog::Catalog;
use crate::domain::error::CatalogError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Loads the catalog from a JSON file.
///
/// Any failure to read the file (missing, unreadable) maps to
/// [`CatalogError::NotFound`]; content that is not a valid catalog maps to
/// [`CatalogError::Decode`].
#[derive(Debug, Clone)]
pub struct JsonCatalogLoader {
    path: PathBuf,
}

impl JsonCatalogLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the `[catalog] path` setting.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.catalog.path.clone())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogLoader for JsonCatalogLoader {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "catalog asset unavailable");
            CatalogError::NotFound
        })?;
        let catalog = Catalog::from_slice(&bytes)?;

        let unplayable = catalog
            .categories
            .iter()
            .flat_map(|category| &category.videos)
            .filter(|video| !video.is_playable())
            .count();
        if unplayable > 0 {
            tracing::debug!(unplayable, "catalog lists videos without a source");
        }
        Ok(catalog)
    }
}
