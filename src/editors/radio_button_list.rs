use crate::core::EditorKey;
use crate::core::field::ConfigurationField;
use crate::core::item::{DataListEditor, EditorItem};

/// Presents the chosen list as a radio button per item.
pub struct RadioButtonListDataListEditor;

impl EditorItem for RadioButtonListDataListEditor {
    fn key(&self) -> EditorKey {
        EditorKey::of::<Self>()
    }

    fn name(&self) -> Option<&str> {
        Some("Radio Button List")
    }

    fn description(&self) -> Option<&str> {
        Some("Select a single value from a list of radio buttons.")
    }

    fn icon(&self) -> Option<&str> {
        Some("icon-target")
    }

    fn fields(&self) -> Vec<ConfigurationField> {
        vec![
            ConfigurationField::new("showDescriptions", "Show descriptions?", "boolean")
                .with_description("Display the item descriptions underneath their names.")
                .with_config_entry("default", true),
        ]
    }

    fn as_editor(&self) -> Option<&dyn DataListEditor> {
        Some(self)
    }
}

impl DataListEditor for RadioButtonListDataListEditor {
    fn view(&self) -> &str {
        "radiobuttonlist"
    }
}
