use crate::core::EditorKey;
use crate::core::field::ConfigurationField;
use crate::core::item::{DataListEditor, EditorItem};

pub const ALLOW_EMPTY: &str = "allowEmpty";

/// Presents the chosen list as a single-value dropdown select.
pub struct DropdownListDataListEditor;

impl EditorItem for DropdownListDataListEditor {
    fn key(&self) -> EditorKey {
        EditorKey::of::<Self>()
    }

    fn name(&self) -> Option<&str> {
        Some("Dropdown List")
    }

    fn description(&self) -> Option<&str> {
        Some("Select a single value from a dropdown select list.")
    }

    fn icon(&self) -> Option<&str> {
        Some("icon-indent")
    }

    fn fields(&self) -> Vec<ConfigurationField> {
        vec![
            ConfigurationField::new(ALLOW_EMPTY, "Allow empty?", "boolean")
                .with_description(
                    "Enable to allow an empty option at the top of the dropdown list.",
                )
                .with_config_entry("default", true),
        ]
    }

    fn as_editor(&self) -> Option<&dyn DataListEditor> {
        Some(self)
    }
}

impl DataListEditor for DropdownListDataListEditor {
    fn view(&self) -> &str {
        "dropdown"
    }
}
