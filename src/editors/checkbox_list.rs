use crate::core::EditorKey;
use crate::core::field::ConfigurationField;
use crate::core::item::{DataListEditor, EditorItem};
use crate::core::value::ConfigMap;

/// Presents the chosen list as a checkbox per item; the stored value is
/// always a sequence.
pub struct CheckboxListDataListEditor;

impl EditorItem for CheckboxListDataListEditor {
    fn key(&self) -> EditorKey {
        EditorKey::of::<Self>()
    }

    fn name(&self) -> Option<&str> {
        Some("Checkbox List")
    }

    fn description(&self) -> Option<&str> {
        Some("Select multiple values from a list of checkboxes.")
    }

    fn icon(&self) -> Option<&str> {
        Some("icon-checkbox")
    }

    fn fields(&self) -> Vec<ConfigurationField> {
        vec![
            ConfigurationField::new("checkAll", "Check all?", "boolean")
                .with_description("Include a toggle to check or uncheck every item at once.")
                .with_config_entry("default", false),
            ConfigurationField::new("showDescriptions", "Show descriptions?", "boolean")
                .with_description("Display the item descriptions underneath their names.")
                .with_config_entry("default", true),
            ConfigurationField::new("showIcons", "Show icons?", "boolean")
                .with_description("Display the item icons next to their names.")
                .with_config_entry("default", false),
        ]
    }

    fn as_editor(&self) -> Option<&dyn DataListEditor> {
        Some(self)
    }
}

impl DataListEditor for CheckboxListDataListEditor {
    fn view(&self) -> &str {
        "checkboxlist"
    }

    fn has_multiple_values(&self, _config: &ConfigMap) -> bool {
        true
    }
}
