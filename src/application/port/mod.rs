// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the playback controller remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`catalog`]: Catalog fetching
//! - [`player`]: Transport commands and status events of the media pipeline

pub mod catalog;
pub mod player;

// Re-export main types for convenience
pub use catalog::CatalogLoader;
pub use player::{
    ItemId, ItemStatus, Player, PlayerEvent, PlayerEventKind, SeekToken, SeekTolerance,
};
