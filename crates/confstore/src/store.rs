use confstore_core::{ConfigError, ConfigMap, ConfigPath, Result, value_kind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Nested key/value configuration, built up by shallow merges and read back
/// by key path.
///
/// The root is always a mapping. Lookups hand out read-only views; the only
/// way to change the tree is another merge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigStore {
    tree: Value,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            tree: Value::Object(ConfigMap::new()),
        }
    }
}

impl ConfigStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with `data`, as if by a single merge into an empty store.
    pub fn with_data(data: ConfigMap) -> Self {
        Self {
            tree: Value::Object(data),
        }
    }

    // ── Merging ────────────────────────────────────────────────

    /// Shallow-merge `data` into the store.
    ///
    /// Each top-level key in `data` replaces the stored value for that key
    /// wholesale; nested mappings are not merged recursively. Keys that only
    /// exist in the store are kept.
    pub fn merge(&mut self, data: ConfigMap) {
        let mut root = self.take_root();
        let incoming = data.len();
        let mut replaced = 0usize;
        for (key, value) in data {
            if root.insert(key, value).is_some() {
                replaced += 1;
            }
        }
        let total = root.len();
        self.tree = Value::Object(root);
        debug!(keys = incoming, replaced, total, "merged config data");
    }

    /// Merge an arbitrary JSON value. Only mappings are accepted; anything
    /// else leaves the store untouched.
    pub fn merge_value(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Object(map) => {
                self.merge(map);
                Ok(())
            }
            other => {
                let found = value_kind(&other);
                warn!(found, "rejected non-mapping config data");
                Err(ConfigError::NotAMapping { found })
            }
        }
    }

    /// Serialize `data` and merge the result. `data` must serialize to a
    /// mapping (a struct or a map).
    pub fn merge_from<T: Serialize + ?Sized>(&mut self, data: &T) -> Result<()> {
        self.merge_value(serde_json::to_value(data)?)
    }

    // ── Lookups ────────────────────────────────────────────────

    /// Look up the value at `path`.
    ///
    /// Returns `None` when a key is missing or an intermediate value is not a
    /// mapping. An empty path returns the whole tree.
    pub fn get<K: AsRef<str>>(&self, path: &[K]) -> Option<&Value> {
        match self.try_get(path) {
            Ok(value) => Some(value),
            Err(e) => {
                trace!(error = %e, "config lookup missed");
                None
            }
        }
    }

    pub fn get_path(&self, path: &ConfigPath) -> Option<&Value> {
        self.get(path.keys())
    }

    /// Like [`get`](Self::get), but reports where and why the path stopped
    /// resolving.
    pub fn try_get<K: AsRef<str>>(&self, path: &[K]) -> Result<&Value> {
        let mut current = &self.tree;
        for (depth, key) in path.iter().enumerate() {
            let Value::Object(map) = current else {
                return Err(ConfigError::NotDescendable {
                    path: ConfigPath::from(&path[..depth]),
                    found: value_kind(current),
                });
            };
            current = map
                .get(key.as_ref())
                .ok_or_else(|| ConfigError::MissingKey {
                    path: ConfigPath::from(&path[..=depth]),
                })?;
        }
        Ok(current)
    }

    /// Look up `path` and deserialize it into `T`. `Ok(None)` when the path
    /// does not resolve.
    pub fn get_as<T: DeserializeOwned, K: AsRef<str>>(&self, path: &[K]) -> Result<Option<T>> {
        self.get(path)
            .map(|value| T::deserialize(value))
            .transpose()
            .map_err(ConfigError::from)
    }

    pub fn contains<K: AsRef<str>>(&self, path: &[K]) -> bool {
        self.try_get(path).is_ok()
    }

    /// The whole tree. Always a mapping.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    /// Top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.tree.as_object().into_iter().flat_map(|map| map.keys())
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.tree.as_object().map_or(0, ConfigMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> ConfigMap {
        match self.tree {
            Value::Object(map) => map,
            _ => ConfigMap::new(),
        }
    }

    fn take_root(&mut self) -> ConfigMap {
        match std::mem::take(&mut self.tree) {
            Value::Object(map) => map,
            _ => ConfigMap::new(),
        }
    }
}

impl From<ConfigMap> for ConfigStore {
    fn from(data: ConfigMap) -> Self {
        Self::with_data(data)
    }
}
