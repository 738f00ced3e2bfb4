use indexmap::IndexMap;
use serde_json::Value;

/// Widget configuration and field values, exactly as the host round-trips
/// them. Insertion order is preserved because the registry's ordering
/// guarantees extend to every map handed to the rendering surface.
pub type ConfigMap = IndexMap<String, Value>;

/// Truthiness of a widget config value, following the host conventions:
/// `true`, nonzero numbers, and the strings "1" / "true" / "yes".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => {
            matches!(text.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
        }
        _ => false,
    }
}

pub fn truthy_entry(config: &ConfigMap, key: &str) -> bool {
    config.get(key).is_some_and(is_truthy)
}

/// Reads a non-negative count from a config value; number widgets post
/// numbers, but older stored configs may carry them as strings.
pub fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
