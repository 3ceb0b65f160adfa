// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`catalog`]: Catalog loading from a JSON asset or from memory
//!   (implements [`CatalogLoader`])
//!
//! The [`Player`] port has no adapter here: the playback pipeline is
//! supplied by the embedding application.
//!
//! [`CatalogLoader`]: crate::application::port::CatalogLoader
//! [`Player`]: crate::application::port::Player

pub mod catalog;

pub use catalog::{InMemoryCatalogLoader, JsonCatalogLoader};
