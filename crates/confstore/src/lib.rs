//! # confstore
//!
//! A configuration store: nested key/value data accumulated by shallow
//! top-level merges and read back by key path.
//!
//! [`ConfigStore`] is a plain owned value to construct once and pass where it
//! is needed. [`SharedConfigStore`] wraps one in a lock for use across threads.
//!
//! ```
//! use confstore::{ConfigStore, config_get, config_path};
//! use serde_json::json;
//!
//! let mut store = ConfigStore::new();
//! store.merge_value(json!({"foo": {"bar": {"baz": 1}}})).unwrap();
//!
//! assert_eq!(config_get!(store, "foo", "bar", "baz"), Some(&json!(1)));
//! assert_eq!(config_get!(store, "foo", "qux"), None);
//! assert_eq!(config_get!(store), &json!({"foo": {"bar": {"baz": 1}}}));
//! assert_eq!(config_path!("foo", "bar").to_string(), "foo.bar");
//! ```

pub mod logging;
#[doc(hidden)]
pub mod macros;
pub mod shared;
pub mod store;

pub use confstore_core::{ConfigError, ConfigMap, ConfigPath, Result};
pub use logging::{LogFormat, LoggingConfig};
pub use shared::SharedConfigStore;
pub use store::ConfigStore;
