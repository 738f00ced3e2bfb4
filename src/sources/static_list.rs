use serde_json::Value;

use crate::core::EditorKey;
use crate::core::error::Result;
use crate::core::field::ConfigurationField;
use crate::core::item::{DataListSource, EditorItem, ListItem};
use crate::core::value::ConfigMap;

/// A data list source backed by a fixed set of items.
///
/// The seed items are supplied at registration; an `items` array in the
/// configuration replaces them, entry by entry, so editors can author
/// their own list on top of the registered default. Malformed entries
/// are skipped rather than failing the whole list.
pub struct StaticListSource {
    items: Vec<ListItem>,
}

impl StaticListSource {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self { items }
    }
}

impl EditorItem for StaticListSource {
    fn key(&self) -> EditorKey {
        EditorKey::of::<Self>()
    }

    fn name(&self) -> Option<&str> {
        Some("Static List")
    }

    fn description(&self) -> Option<&str> {
        Some("Define a fixed list of items to use.")
    }

    fn icon(&self) -> Option<&str> {
        Some("icon-bulleted-list")
    }

    fn fields(&self) -> Vec<ConfigurationField> {
        vec![
            ConfigurationField::new("items", "Items", "dataTable")
                .with_description("Define the list items: a value and an optional name and icon each."),
        ]
    }

    fn as_source(&self) -> Option<&dyn DataListSource> {
        Some(self)
    }
}

impl DataListSource for StaticListSource {
    fn get_items(&self, config: &ConfigMap) -> Result<Vec<ListItem>> {
        if let Some(Value::Array(entries)) = config.get("items") {
            let items = entries
                .iter()
                .filter_map(|entry| serde_json::from_value::<ListItem>(entry.clone()).ok())
                .filter(|item| !item.value.is_empty())
                .collect();
            return Ok(items);
        }
        Ok(self.items.clone())
    }
}
