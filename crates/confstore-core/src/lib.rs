//! # confstore-core
//!
//! Shared vocabulary for the confstore workspace: the config map type, key
//! paths, and the error type every other crate returns.

pub mod error;
pub mod path;
pub mod types;

pub use error::{ConfigError, Result};
pub use path::ConfigPath;
pub use types::*;
