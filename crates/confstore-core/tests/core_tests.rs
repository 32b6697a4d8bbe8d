#[cfg(test)]
mod tests {
    use confstore_core::*;
    use serde_json::json;

    // ── ConfigPath tests ───────────────────────────────────────

    #[test]
    fn test_path_from_single_key_keeps_dots() {
        let path = ConfigPath::from("db.host");
        assert_eq!(path.len(), 1);
        assert_eq!(path.keys(), ["db.host".to_string()]);
    }

    #[test]
    fn test_path_dotted_splits() {
        let path = ConfigPath::dotted("foo.bar.baz");
        assert_eq!(path.keys(), ["foo", "bar", "baz"]);
    }

    #[test]
    fn test_path_dotted_skips_empty_segments() {
        assert_eq!(ConfigPath::dotted("a..b.").keys(), ["a", "b"]);
        assert!(ConfigPath::dotted("").is_empty());
    }

    #[test]
    fn test_path_conversions_agree() {
        let from_array = ConfigPath::from(["foo", "bar"]);
        let from_slice = ConfigPath::from(&["foo", "bar"][..]);
        let from_vec = ConfigPath::from(vec!["foo".to_string(), "bar".to_string()]);
        let from_iter: ConfigPath = ["foo", "bar"].iter().collect();
        assert_eq!(from_array, from_slice);
        assert_eq!(from_array, from_vec);
        assert_eq!(from_array, from_iter);
        assert_eq!(from_array, ConfigPath::dotted("foo.bar"));
    }

    #[test]
    fn test_path_child_and_prefix() {
        let base = ConfigPath::from("foo");
        let child = base.child("bar");
        assert_eq!(child.to_string(), "foo.bar");
        assert_eq!(child.prefix(1), base);
        assert_eq!(child.prefix(10), child);
        assert!(child.prefix(0).is_empty());
        // Original is unchanged
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_path_push() {
        let mut path = ConfigPath::root();
        path.push("a");
        path.push(String::from("b"));
        assert_eq!(path.to_string(), "a.b");
    }

    #[test]
    fn test_path_display_root() {
        assert_eq!(ConfigPath::root().to_string(), "<root>");
    }

    #[test]
    fn test_path_serde_is_plain_list() {
        let path = ConfigPath::dotted("foo.bar");
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json, json!(["foo", "bar"]));
        let restored: ConfigPath = serde_json::from_value(json).unwrap();
        assert_eq!(restored, path);
    }

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_error_missing_key_display() {
        let err = ConfigError::MissingKey {
            path: ConfigPath::dotted("foo.qux"),
        };
        assert!(err.to_string().contains("foo.qux"));
        assert!(err.is_lookup());
    }

    #[test]
    fn test_error_not_descendable_display() {
        let err = ConfigError::NotDescendable {
            path: ConfigPath::dotted("a.b"),
            found: "a number",
        };
        let s = err.to_string();
        assert!(s.contains("a.b"));
        assert!(s.contains("a number"));
        assert!(err.is_lookup());
    }

    #[test]
    fn test_error_not_a_mapping() {
        let err = ConfigError::NotAMapping { found: "a list" };
        assert!(err.to_string().contains("a list"));
        assert!(!err.is_lookup());
    }

    #[test]
    fn test_error_from_serde_json() {
        let serde_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: ConfigError = serde_err.into();
        assert!(matches!(err, ConfigError::Serialization(_)));
        assert!(err.to_string().starts_with("serialization error"));
    }

    // ── Value kind tests ───────────────────────────────────────

    #[test]
    fn test_value_kind_names() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(false)), "a boolean");
        assert_eq!(value_kind(&json!(1.5)), "a number");
        assert_eq!(value_kind(&json!("x")), "a string");
        assert_eq!(value_kind(&json!([1])), "a list");
        assert_eq!(value_kind(&json!({})), "a mapping");
    }

    #[test]
    fn test_config_map_alias() {
        let mut map = ConfigMap::new();
        map.insert("k".into(), json!(1));
        assert_eq!(serde_json::Value::Object(map), json!({"k": 1}));
    }
}
