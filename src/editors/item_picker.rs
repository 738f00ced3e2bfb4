use crate::core::EditorKey;
use crate::core::field::{ConfigurationField, MAX_ITEMS, max_items_field, overlay_size_field};
use crate::core::item::{DataListEditor, EditorItem};
use crate::core::value::{ConfigMap, as_count};

/// Presents the chosen list inside a picker overlay; the stored value is
/// a sequence unless the configuration caps it at exactly one item.
pub struct ItemPickerDataListEditor;

impl EditorItem for ItemPickerDataListEditor {
    fn key(&self) -> EditorKey {
        EditorKey::of::<Self>()
    }

    fn name(&self) -> Option<&str> {
        Some("Item Picker")
    }

    fn description(&self) -> Option<&str> {
        Some("Select items from an overlay picker.")
    }

    fn icon(&self) -> Option<&str> {
        Some("icon-hand-pointer")
    }

    fn fields(&self) -> Vec<ConfigurationField> {
        vec![max_items_field(), overlay_size_field("small")]
    }

    fn as_editor(&self) -> Option<&dyn DataListEditor> {
        Some(self)
    }
}

impl DataListEditor for ItemPickerDataListEditor {
    fn view(&self) -> &str {
        "itempicker"
    }

    fn has_multiple_values(&self, config: &ConfigMap) -> bool {
        config.get(MAX_ITEMS).and_then(as_count) != Some(1)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ItemPickerDataListEditor;
    use crate::core::field::MAX_ITEMS;
    use crate::core::item::DataListEditor;
    use crate::core::value::ConfigMap;

    fn config(max_items: serde_json::Value) -> ConfigMap {
        let mut config = ConfigMap::new();
        config.insert(MAX_ITEMS.to_string(), max_items);
        config
    }

    #[test]
    fn single_valued_exactly_when_capped_at_one() {
        let editor = ItemPickerDataListEditor;
        assert!(!editor.has_multiple_values(&config(json!(1))));
        assert!(!editor.has_multiple_values(&config(json!("1"))));
        assert!(editor.has_multiple_values(&config(json!(0))));
        assert!(editor.has_multiple_values(&config(json!(5))));
        assert!(editor.has_multiple_values(&ConfigMap::new()));
    }
}
