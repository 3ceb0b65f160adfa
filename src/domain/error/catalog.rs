// SPDX-License-Identifier: MPL-2.0
//! Errors produced while fetching or decoding the media catalog.

use thiserror::Error;

/// Failure outcome of a catalog fetch.
///
/// The controller treats every variant as terminal for the current fetch:
/// the message is surfaced and no retry is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog source does not exist.
    #[error("Media catalog not found")]
    NotFound,

    /// The catalog source exists but could not be decoded.
    #[error("Media catalog could not be decoded: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Builds a decode error from any displayable parser failure.
    pub fn decode(detail: impl std::fmt::Display) -> Self {
        Self::Decode(detail.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err)
    }
}
