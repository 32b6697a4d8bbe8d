use serde_json::{Map, Value};

/// A mapping of string keys to config values. The unit of a merge.
pub type ConfigMap = Map<String, Value>;

/// Human-readable JSON type name, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
