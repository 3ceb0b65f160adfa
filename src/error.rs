// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Domain failures ([`CatalogError`], [`PlaybackError`]) are wrapped here so
//! that setup code (configuration, catalog files) can use a single `Result`.

use crate::domain::error::{CatalogError, PlaybackError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Playback Error: {0}")]
    Playback(#[from] PlaybackError),

    #[error("Playback controller is no longer running")]
    ControllerStopped,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
