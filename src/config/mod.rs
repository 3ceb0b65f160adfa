// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, read from a
//! `settings.toml` file. Settings are only ever read.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Skip distance and periodic time interval
//! - `[overlay]` - Control overlay auto-hide timeout
//! - `[catalog]` - Location of the catalog asset
//! - `[logging]` - Default log filter
//!
//! # Examples
//!
//! ```no_run
//! use reelcore::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("skip by {}s", config.skip_interval().value());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::video::SkipInterval;
use crate::error::Result;
use crate::ui::state::OverlayTimeout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ReelCore";

// =============================================================================
// Section Structs
// =============================================================================

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Skip forward/backward distance in seconds.
    #[serde(default = "default_skip_interval")]
    pub skip_interval_secs: f64,

    /// Periodic time signal interval in seconds.
    #[serde(default = "default_time_update_interval")]
    pub time_update_interval_secs: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            skip_interval_secs: DEFAULT_SKIP_INTERVAL_SECS,
            time_update_interval_secs: DEFAULT_TIME_UPDATE_INTERVAL_SECS,
        }
    }
}

/// Control overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Seconds of inactivity before the overlay hides during playback.
    #[serde(default = "default_auto_hide")]
    pub auto_hide_secs: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            auto_hide_secs: DEFAULT_OVERLAY_TIMEOUT_SECS,
        }
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path of the JSON catalog asset.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_skip_interval() -> f64 {
    DEFAULT_SKIP_INTERVAL_SECS
}

fn default_time_update_interval() -> f64 {
    DEFAULT_TIME_UPDATE_INTERVAL_SECS
}

fn default_auto_hide() -> u32 {
    DEFAULT_OVERLAY_TIMEOUT_SECS
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

// =============================================================================
// Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Skip distance, clamped to its valid range.
    #[must_use]
    pub fn skip_interval(&self) -> SkipInterval {
        SkipInterval::new(self.playback.skip_interval_secs)
    }

    /// Periodic time interval, clamped to its valid range.
    #[must_use]
    pub fn time_update_interval(&self) -> Duration {
        let secs = self.playback.time_update_interval_secs;
        let secs = if secs.is_nan() {
            DEFAULT_TIME_UPDATE_INTERVAL_SECS
        } else {
            secs.clamp(MIN_TIME_UPDATE_INTERVAL_SECS, MAX_TIME_UPDATE_INTERVAL_SECS)
        };
        Duration::from_secs_f64(secs)
    }

    /// Overlay auto-hide timeout, clamped to its valid range.
    #[must_use]
    pub fn overlay_timeout(&self) -> OverlayTimeout {
        OverlayTimeout::new(self.overlay.auto_hide_secs)
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
        .map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read
/// and [`Error::Config`](crate::error::Error::Config) if it is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
