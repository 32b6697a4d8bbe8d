use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of keys describing a descent from the root of a
/// config tree. The empty path addresses the whole tree.
///
/// A single key is taken verbatim, dots included. Use [`ConfigPath::dotted`]
/// to split a `"a.b.c"` style string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigPath {
    keys: Vec<String>,
}

impl ConfigPath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dot-separated path. Empty segments are skipped, so `""` is
    /// the root and `"a..b"` is `["a", "b"]`.
    pub fn dotted(path: &str) -> Self {
        Self {
            keys: path
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// A new path with `key` appended.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut keys = self.keys.clone();
        keys.push(key.into());
        Self { keys }
    }

    pub fn push(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }

    /// The first `len` keys of this path.
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            keys: self.keys[..len.min(self.keys.len())].to_vec(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keys.iter()
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keys.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.keys.join("."))
    }
}

impl AsRef<[String]> for ConfigPath {
    fn as_ref(&self) -> &[String] {
        &self.keys
    }
}

impl<'a> IntoIterator for &'a ConfigPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl<K: AsRef<str>> FromIterator<K> for ConfigPath {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(|k| k.as_ref().to_string()).collect(),
        }
    }
}

// ── Conversions ────────────────────────────────────────────────

impl From<&str> for ConfigPath {
    fn from(key: &str) -> Self {
        Self {
            keys: vec![key.to_string()],
        }
    }
}

impl From<String> for ConfigPath {
    fn from(key: String) -> Self {
        Self { keys: vec![key] }
    }
}

impl<K: AsRef<str>> From<&[K]> for ConfigPath {
    fn from(keys: &[K]) -> Self {
        keys.iter().collect()
    }
}

impl<K: AsRef<str>, const N: usize> From<[K; N]> for ConfigPath {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: AsRef<str>> From<Vec<K>> for ConfigPath {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}
