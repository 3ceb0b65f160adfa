// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup for embedding applications.
//!
//! The crate itself only emits `tracing` events. Applications that do not
//! install their own subscriber can call [`init`] once at startup.

use crate::config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` when set, otherwise `default_level`.
fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

/// Installs a formatting subscriber using the `[logging] level` setting.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes. Safe to call more than once.
pub fn init(config: &Config) -> bool {
    init_with_level(&config.logging.level)
}

/// Same as [`init`] with an explicit default level.
pub fn init_with_level(default_level: &str) -> bool {
    tracing_subscriber::registry()
        .with(filter(default_level))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
