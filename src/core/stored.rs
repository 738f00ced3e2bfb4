use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::EditorKey;
use crate::core::field::ConfigurationField;
use crate::core::value::ConfigMap;

/// The persisted content value for one configured instance: which item
/// kind, and the value of each of its fields.
///
/// The core only serializes to and from this shape; storage is owned by
/// the host. A `key` that no longer resolves in the registry means
/// "unconfigured", and `value` entries for fields that no longer exist
/// are ignored, never errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredValue {
    pub key: EditorKey,
    pub value: ConfigMap,
}

impl StoredValue {
    pub fn new(key: EditorKey, value: ConfigMap) -> Self {
        Self { key, value }
    }

    pub fn is_configured(&self) -> bool {
        !self.key.as_str().is_empty()
    }
}

/// Layered default resolution for one field's current value:
/// stored value, then the item's default value, then the field's own
/// implicit default.
pub fn resolve_field_value(
    field: &ConfigurationField,
    stored: Option<&ConfigMap>,
    defaults: &ConfigMap,
) -> Value {
    if let Some(value) = stored.and_then(|values| values.get(field.key.as_str())) {
        return value.clone();
    }
    if let Some(value) = defaults.get(field.key.as_str()) {
        return value.clone();
    }
    field.implicit_default()
}
