use serde::{Deserialize, Serialize};

use crate::core::EditorKey;
use crate::core::error::Result;
use crate::core::field::ConfigurationField;
use crate::core::value::ConfigMap;

/// One selectable entry produced by a data list source.
///
/// `value` is the equality and selection key; everything else is display
/// metadata. Items carry no identity beyond `value` and are recreated on
/// every source invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListItem {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn named(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.value.as_str())
    }
}

/// A registered, pluggable kind of list source or list editor.
///
/// Constructed once while the registry is populated and immutable
/// afterwards; shared across request threads behind an `Arc`. Capability
/// accessors replace runtime type inspection: a variant opts into a
/// capability by returning itself.
pub trait EditorItem: Send + Sync {
    fn key(&self) -> EditorKey;

    fn name(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> Option<&str> {
        None
    }

    fn icon(&self) -> Option<&str> {
        None
    }

    /// Ordered schema of the item's own settings; empty is fine.
    fn fields(&self) -> Vec<ConfigurationField> {
        Vec::new()
    }

    /// Per-field defaults used only when the item has never been
    /// configured.
    fn default_values(&self) -> ConfigMap {
        ConfigMap::new()
    }

    fn as_source(&self) -> Option<&dyn DataListSource> {
        None
    }

    fn as_editor(&self) -> Option<&dyn DataListEditor> {
        None
    }
}

/// Capability contract: resolve a configuration into an ordered item list.
pub trait DataListSource: EditorItem {
    /// Produces the items for the given resolved field values.
    ///
    /// Must not mutate `config` and must be pure apart from reads through
    /// the external data provider. Unknown or unsupported config values
    /// yield an empty list, never an error; configuration is routinely
    /// incomplete while an editor is mid-edit. Only a failing provider
    /// propagates.
    fn get_items(&self, config: &ConfigMap) -> Result<Vec<ListItem>>;
}

/// Capability contract: how a chosen list is presented as a field value.
pub trait DataListEditor: EditorItem {
    /// Identifier of the leaf widget rendering the final list; opaque to
    /// the core.
    fn view(&self) -> &str;

    /// Whether the edited field holds one value or many, as a function of
    /// configuration. Drives the stored content value shape.
    fn has_multiple_values(&self, _config: &ConfigMap) -> bool {
        false
    }
}
