use crate::core::EditorKey;
use crate::core::field::ConfigurationField;
use crate::core::item::{DataListEditor, EditorItem};
use crate::core::value::{ConfigMap, truthy_entry};

pub const ENABLE_MULTIPLE: &str = "enableMultiple";

/// Presents the chosen list as a group of toggle buttons. Whether the
/// field holds one value or many is itself a configuration choice.
pub struct ButtonsDataListEditor;

impl EditorItem for ButtonsDataListEditor {
    fn key(&self) -> EditorKey {
        EditorKey::of::<Self>()
    }

    fn name(&self) -> Option<&str> {
        Some("Buttons")
    }

    fn description(&self) -> Option<&str> {
        Some("Select one or more values from a group of buttons.")
    }

    fn icon(&self) -> Option<&str> {
        Some("icon-tab")
    }

    fn fields(&self) -> Vec<ConfigurationField> {
        vec![
            ConfigurationField::new("defaultIcon", "Default icon", "iconpicker")
                .with_description("Select an icon for buttons whose item has none of its own.")
                .with_config_entry("default", "icon-science"),
            ConfigurationField::new(ENABLE_MULTIPLE, "Multiple selection?", "boolean")
                .with_description("Enable to let multiple buttons be active at once.")
                .with_config_entry("default", false),
        ]
    }

    fn as_editor(&self) -> Option<&dyn DataListEditor> {
        Some(self)
    }
}

impl DataListEditor for ButtonsDataListEditor {
    fn view(&self) -> &str {
        "buttons"
    }

    fn has_multiple_values(&self, config: &ConfigMap) -> bool {
        truthy_entry(config, ENABLE_MULTIPLE)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ButtonsDataListEditor, ENABLE_MULTIPLE};
    use crate::core::item::DataListEditor;
    use crate::core::value::ConfigMap;

    #[test]
    fn multiplicity_follows_the_configuration() {
        let editor = ButtonsDataListEditor;
        assert!(!editor.has_multiple_values(&ConfigMap::new()));

        let mut config = ConfigMap::new();
        config.insert(ENABLE_MULTIPLE.to_string(), json!("1"));
        assert!(editor.has_multiple_values(&config));

        config.insert(ENABLE_MULTIPLE.to_string(), json!(false));
        assert!(!editor.has_multiple_values(&config));
    }
}
