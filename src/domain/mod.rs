// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no I/O.
//!
//! This module contains the catalog model, playback value objects and
//! domain errors. Besides `std` it only depends on `serde`/`serde_json` for the catalog
//! format and `thiserror` for error types.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog model ([`Catalog`](catalog::Catalog),
//!   [`Category`](catalog::Category), [`Video`](catalog::Video))
//! - [`error`]: Domain error types ([`CatalogError`](error::CatalogError),
//!   [`PlaybackError`](error::PlaybackError))
//! - [`video`]: Playback value objects ([`PlaybackRate`](video::PlaybackRate),
//!   [`SkipInterval`](video::SkipInterval), [`CatalogStatus`](video::CatalogStatus))

pub mod catalog;
pub mod error;
pub mod video;
