// SPDX-License-Identifier: MPL-2.0
//! Catalog served from memory.

use crate::application::port::CatalogLoader;
use crate::domain::catalog::Catalog;
use crate::domain::error::CatalogError;
use async_trait::async_trait;
use std::time::Duration;

/// Returns a fixed fetch result, optionally after a delay.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogLoader {
    result: Result<Catalog, CatalogError>,
    delay: Option<Duration>,
}

impl InMemoryCatalogLoader {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            result: Ok(catalog),
            delay: None,
        }
    }

    /// A loader whose fetch always fails with `error`.
    #[must_use]
    pub fn failing(error: CatalogError) -> Self {
        Self {
            result: Err(error),
            delay: None,
        }
    }

    /// Delays the fetch result, to simulate a slow source.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl CatalogLoader for InMemoryCatalogLoader {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}
