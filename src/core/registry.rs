use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::EditorKey;
use crate::core::error::Result;
use crate::core::field::validate_fields;
use crate::core::item::{DataListEditor, DataListSource, EditorItem};
use crate::core::model::{ConfigurationEditorModel, build_models};

/// Collects editor items during the startup populate phase.
///
/// The populate/read split is enforced by construction: once [`build`]
/// consumes the builder, the resulting [`EditorRegistry`] exposes no
/// mutation API at all.
///
/// [`build`]: RegistryBuilder::build
#[derive(Default)]
pub struct RegistryBuilder {
    items: IndexMap<EditorKey, Arc<dyn EditorItem>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one item under its own key.
    ///
    /// Registering a key twice is not an error: the later registration
    /// replaces the earlier one in place, so hosts can override built-in
    /// kinds without disturbing the catalog order.
    pub fn register(&mut self, item: Arc<dyn EditorItem>) -> &mut Self {
        let key = item.key();
        if self.items.contains_key(&key) {
            debug!("editor item `{key}` re-registered, replacing the earlier registration");
        }
        self.items.insert(key, item);
        self
    }

    pub fn with(mut self, item: Arc<dyn EditorItem>) -> Self {
        self.register(item);
        self
    }

    /// Freezes the catalog.
    pub fn build(self) -> EditorRegistry {
        EditorRegistry { items: self.items }
    }
}

/// Read-only catalog of every registered editor item, in registration
/// order. Safe for concurrent readers without locking.
pub struct EditorRegistry {
    items: IndexMap<EditorKey, Arc<dyn EditorItem>>,
}

impl EditorRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn get(&self, key: &str) -> Option<&Arc<dyn EditorItem>> {
        self.items.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn EditorItem>> {
        self.items.values()
    }

    pub fn get_source(&self, key: &str) -> Option<&dyn DataListSource> {
        self.get(key).and_then(|item| item.as_source())
    }

    pub fn get_editor(&self, key: &str) -> Option<&dyn DataListEditor> {
        self.get(key).and_then(|item| item.as_editor())
    }

    pub fn sources(&self) -> impl Iterator<Item = &dyn DataListSource> {
        self.items.values().filter_map(|item| item.as_source())
    }

    pub fn editors(&self) -> impl Iterator<Item = &dyn DataListEditor> {
        self.items.values().filter_map(|item| item.as_editor())
    }

    /// Models for every registered source, in registration order.
    pub fn source_models(&self, ignore_fields: bool) -> Vec<ConfigurationEditorModel> {
        build_models(
            self.items
                .values()
                .map(|item| item.as_ref())
                .filter(|item| item.as_source().is_some()),
            ignore_fields,
        )
    }

    /// Models for every registered editor, in registration order.
    pub fn editor_models(&self, ignore_fields: bool) -> Vec<ConfigurationEditorModel> {
        build_models(
            self.items
                .values()
                .map(|item| item.as_ref())
                .filter(|item| item.as_editor().is_some()),
            ignore_fields,
        )
    }

    /// Authoring-time validation pass over every item's field schema.
    pub fn validate(&self) -> Result<()> {
        for item in self.items.values() {
            validate_fields(&item.key(), &item.fields())?;
        }
        Ok(())
    }
}
