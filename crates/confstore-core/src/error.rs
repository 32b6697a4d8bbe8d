use thiserror::Error;

use crate::path::ConfigPath;

/// Unified error type for the confstore workspace.
#[derive(Error, Debug)]
pub enum ConfigError {
    // ── Lookup errors ──────────────────────────────────────────
    #[error("config key not found: {path}")]
    MissingKey { path: ConfigPath },

    #[error("config path not descendable: {path} is {found}, not a mapping")]
    NotDescendable { path: ConfigPath, found: &'static str },

    // ── Merge errors ───────────────────────────────────────────
    #[error("config data must be a mapping, got {found}")]
    NotAMapping { found: &'static str },

    // ── Logging errors ─────────────────────────────────────────
    #[error("logging setup failed: {0}")]
    Logging(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    /// True for the "path did not resolve" family of errors.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::MissingKey { .. } | Self::NotDescendable { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
