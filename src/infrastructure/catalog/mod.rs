// SPDX-License-Identifier: MPL-2.0
//! Adapters implementing the [`CatalogLoader`] port.
//!
//! - [`JsonCatalogLoader`]: reads the catalog asset from disk
//! - [`InMemoryCatalogLoader`]: serves a fixed result, for tests and previews
//!
//! [`CatalogLoader`]: crate::application::port::CatalogLoader

mod json;
mod memory;

pub use json::JsonCatalogLoader;
pub use memory::InMemoryCatalogLoader;
