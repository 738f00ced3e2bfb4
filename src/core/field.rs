use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::EditorKey;
use crate::core::error::{Error, Result};
use crate::core::item::ListItem;
use crate::core::value::ConfigMap;

/// One editable setting belonging to an editor item's schema.
///
/// `view` names the widget that renders the field; the core never
/// interprets it, it is carried through to the rendering surface as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationField {
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub view: String,
    #[serde(skip_serializing_if = "ConfigMap::is_empty")]
    pub config: ConfigMap,
}

impl ConfigurationField {
    pub fn new(key: impl Into<String>, name: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: None,
            view: view.into(),
            config: ConfigMap::new(),
        }
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_config_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Default declared by the widget itself (`config["default"]`), the
    /// last layer of the value resolution chain.
    pub fn implicit_default(&self) -> Value {
        self.config.get("default").cloned().unwrap_or(Value::Null)
    }
}

/// Authoring-time validation: field keys must be non-empty and unique
/// within one item. Runs from tests or a host boot check, never on the
/// request path.
pub fn validate_fields(item: &EditorKey, fields: &[ConfigurationField]) -> Result<()> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.key.is_empty() {
            return Err(Error::EmptyFieldKey { item: item.clone() });
        }
        if !seen.insert(field.key.as_str()) {
            return Err(Error::DuplicateFieldKey {
                item: item.clone(),
                key: field.key.clone(),
            });
        }
    }
    Ok(())
}

pub const OVERLAY_SIZE: &str = "overlaySize";
pub const MAX_ITEMS: &str = "maxItems";

/// Shared field letting an item pick the size of its own editing panel.
pub fn overlay_size_field(default_size: &str) -> ConfigurationField {
    let sizes = vec![
        ListItem::named("small", "Small"),
        ListItem::named("large", "Large"),
    ];
    ConfigurationField::new(OVERLAY_SIZE, "Editor overlay size", "radiobuttonlist")
        .with_description(
            "Select the size of the overlay editing panel. \
             If the editor fields require a smaller panel, select 'small'.",
        )
        .with_config_entry("items", serde_json::to_value(sizes).unwrap_or_default())
        .with_config_entry("default", default_size)
}

/// Shared "maximum items" field; zero means unlimited.
pub fn max_items_field() -> ConfigurationField {
    ConfigurationField::new(MAX_ITEMS, "Maximum items", "number")
        .with_description(
            "Enter the number for the maximum items allowed. Use '0' for an unlimited amount.",
        )
        .with_config_entry("default", 0)
}

/// Read-only informational block shown between editable fields.
pub fn notes_field(notes: impl Into<String>) -> ConfigurationField {
    ConfigurationField::new("notes", "Notes", "notes")
        .with_config_entry("notes", notes.into())
        .with_config_entry("hideLabel", true)
}
