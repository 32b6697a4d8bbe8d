use confstore_core::{ConfigMap, ConfigPath, Result};
use parking_lot::{RwLock, RwLockReadGuard};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::store::ConfigStore;

/// A [`ConfigStore`] shared across threads.
///
/// Clones share the same underlying store. Merges take the write lock,
/// lookups take the read lock and return owned values.
#[derive(Debug, Clone, Default)]
pub struct SharedConfigStore {
    inner: Arc<RwLock<ConfigStore>>,
}

impl SharedConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: ConfigStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn merge(&self, data: ConfigMap) {
        self.inner.write().merge(data);
    }

    pub fn merge_value(&self, value: Value) -> Result<()> {
        self.inner.write().merge_value(value)
    }

    pub fn merge_from<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        // Serialize outside the write lock.
        let value = serde_json::to_value(data)?;
        self.inner.write().merge_value(value)
    }

    /// Look up `path`, cloning the result out of the lock.
    pub fn get<K: AsRef<str>>(&self, path: &[K]) -> Option<Value> {
        self.inner.read().get(path).cloned()
    }

    pub fn get_path(&self, path: &ConfigPath) -> Option<Value> {
        self.get(path.keys())
    }

    pub fn try_get<K: AsRef<str>>(&self, path: &[K]) -> Result<Value> {
        self.inner.read().try_get(path).cloned()
    }

    pub fn get_as<T: DeserializeOwned, K: AsRef<str>>(&self, path: &[K]) -> Result<Option<T>> {
        self.inner.read().get_as(path)
    }

    pub fn contains<K: AsRef<str>>(&self, path: &[K]) -> bool {
        self.inner.read().contains(path)
    }

    /// The whole tree, cloned.
    pub fn tree(&self) -> Value {
        self.inner.read().tree().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// A point-in-time copy of the whole store.
    pub fn snapshot(&self) -> ConfigStore {
        self.inner.read().clone()
    }

    /// Hold the read lock for a batch of lookups. Merges block until the
    /// guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, ConfigStore> {
        self.inner.read()
    }
}

impl From<ConfigStore> for SharedConfigStore {
    fn from(store: ConfigStore) -> Self {
        Self::from_store(store)
    }
}
