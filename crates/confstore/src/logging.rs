//! Tracing subscriber setup.
//!
//! The store only emits `tracing` events. Programs that want to see them call
//! [`init`] once at startup, usually with a [`LoggingConfig`] read out of the
//! store itself.

use confstore_core::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::store::ConfigStore;

/// Top-level key the logging section lives under.
pub const LOGGING_KEY: &str = "logging";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives, e.g. "info" or "confstore=debug". `RUST_LOG` wins when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LoggingConfig {
    /// Read the `logging` section, falling back to defaults when absent.
    pub fn from_store(store: &ConfigStore) -> Result<Self> {
        Ok(store.get_as::<Self, _>(&[LOGGING_KEY])?.unwrap_or_default())
    }
}

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init(),
    };

    installed.map_err(|e| ConfigError::Logging(e.to_string()))
}
