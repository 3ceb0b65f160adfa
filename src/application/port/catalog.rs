// SPDX-License-Identifier: MPL-2.0
//! Catalog loading port definition.
//!
//! This module defines the [`CatalogLoader`] trait. Infrastructure adapters
//! (bundled JSON file, in-memory fixture) implement it; the playback
//! controller only sees the resulting [`Catalog`] or [`CatalogError`].

use crate::domain::catalog::Catalog;
use crate::domain::error::CatalogError;
use async_trait::async_trait;

/// Port for fetching the media catalog.
///
/// The fetch is asynchronous and runs exactly once per controller. Both
/// error variants are terminal: callers surface them and do not retry.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use reelcore::application::port::CatalogLoader;
/// use reelcore::domain::catalog::Catalog;
/// use reelcore::domain::error::CatalogError;
///
/// struct MissingCatalog;
///
/// #[async_trait]
/// impl CatalogLoader for MissingCatalog {
///     async fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
///         Err(CatalogError::NotFound)
///     }
/// }
/// ```
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Fetches and decodes the catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] if the source does not exist
    /// - [`CatalogError::Decode`] if the source is not a valid catalog
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogError>;
}

#[async_trait]
impl<T: CatalogLoader + ?Sized> CatalogLoader for std::sync::Arc<T> {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        (**self).fetch_catalog().await
    }
}
