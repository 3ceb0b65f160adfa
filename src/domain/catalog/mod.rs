// SPDX-License-Identifier: MPL-2.0
//! Media catalog value types.
//!
//! A catalog is an ordered list of named categories, each holding an
//! ordered list of videos. It is immutable once loaded.

mod types;

pub use types::{Catalog, Category, Video};
