//! Variadic call sites for lookups and paths.

/// Look up a path given as individual keys.
///
/// `config_get!(store)` yields the whole tree; `config_get!(store, "a", "b")`
/// is `store.get(&["a", "b"])`. Works with both [`ConfigStore`](crate::ConfigStore)
/// and [`SharedConfigStore`](crate::SharedConfigStore).
#[macro_export]
macro_rules! config_get {
    ($store:expr $(,)?) => {
        $store.tree()
    };
    ($store:expr, $($key:expr),+ $(,)?) => {
        $store.get(&[$($crate::macros::key_str(&$key)),+])
    };
}

/// Build a [`ConfigPath`](crate::ConfigPath) from individual keys.
#[macro_export]
macro_rules! config_path {
    () => {
        $crate::ConfigPath::root()
    };
    ($($key:expr),+ $(,)?) => {
        <$crate::ConfigPath as ::core::iter::FromIterator<&str>>::from_iter([
            $($crate::macros::key_str(&$key)),+
        ])
    };
}

#[doc(hidden)]
pub fn key_str<K: AsRef<str> + ?Sized>(key: &K) -> &str {
    key.as_ref()
}
