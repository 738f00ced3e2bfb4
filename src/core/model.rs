use serde::{Deserialize, Serialize};

use crate::core::field::ConfigurationField;
use crate::core::item::EditorItem;
use crate::core::value::ConfigMap;
use crate::core::{DEFAULT_ICON, EditorKey};

/// The transient schema handed to a rendering surface: display metadata
/// plus the ordered field list of one editor item.
///
/// Built fresh per request, never mutated afterwards, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationEditorModel {
    pub key: EditorKey,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub icon: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ConfigurationField>,
    #[serde(skip_serializing_if = "ConfigMap::is_empty")]
    pub default_values: ConfigMap,
}

/// Builds the editor model for one item.
///
/// `ignore_fields` suppresses the field list while keeping the metadata,
/// for contexts that only need identity and display info.
pub fn build_model(item: &dyn EditorItem, ignore_fields: bool) -> ConfigurationEditorModel {
    let key = item.key();
    let fields = if ignore_fields {
        Vec::new()
    } else {
        item.fields()
    };

    ConfigurationEditorModel {
        name: item
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| split_pascal_casing(key.short_name())),
        description: item.description().map(str::to_string),
        icon: item.icon().unwrap_or(DEFAULT_ICON).to_string(),
        fields,
        default_values: item.default_values(),
        key,
    }
}

/// Builds models for a sequence of items, preserving the input order.
/// Callers iterating the registry therefore get registration order back,
/// which the selection UI relies on for its default ordering.
pub fn build_models<'a, I>(items: I, ignore_fields: bool) -> Vec<ConfigurationEditorModel>
where
    I: IntoIterator<Item = &'a dyn EditorItem>,
{
    items
        .into_iter()
        .map(|item| build_model(item, ignore_fields))
        .collect()
}

/// Splits a PascalCase identifier into words: `DropdownListDataListEditor`
/// becomes "Dropdown List Data List Editor". Runs of capitals stay
/// together as an acronym until the run ends.
pub fn split_pascal_casing(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 8);

    for (idx, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && idx > 0 {
            let prev = chars[idx - 1];
            let next_is_lower = chars.get(idx + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push(' ');
            }
        }
        out.push(ch);
    }

    out
}
