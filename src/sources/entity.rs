use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::core::EditorKey;
use crate::core::error::Result;
use crate::core::field::{ConfigurationField, notes_field};
use crate::core::item::{DataListSource, EditorItem, ListItem};
use crate::core::model::split_pascal_casing;
use crate::core::value::ConfigMap;

/// Entity kinds the host's read-only entity service can enumerate by
/// identifier. The host supports more kinds than these, but only these
/// can be queried by GUID-style identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    DataType,
    Document,
    DocumentType,
    Media,
    MediaType,
    Member,
    MemberType,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::DataType,
        EntityKind::Document,
        EntityKind::DocumentType,
        EntityKind::Media,
        EntityKind::MediaType,
        EntityKind::Member,
        EntityKind::MemberType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataType => "DataType",
            Self::Document => "Document",
            Self::DocumentType => "DocumentType",
            Self::Media => "Media",
            Self::MediaType => "MediaType",
            Self::Member => "Member",
            Self::MemberType => "MemberType",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == input)
    }

    /// Segment used in the `umb://` identifiers the source emits.
    fn udi_kind(&self) -> &'static str {
        match self {
            Self::DataType => "data-type",
            Self::Document => "document",
            Self::DocumentType => "document-type",
            Self::Media => "media",
            Self::MediaType => "media-type",
            Self::Member => "member",
            Self::MemberType => "member-type",
        }
    }

    /// Per-kind list icon; kinds without one fall back to the source icon.
    fn icon(&self) -> Option<&'static str> {
        match self {
            Self::DataType => Some("icon-autofill"),
            Self::DocumentType => Some("icon-item-arrangement"),
            Self::MediaType => Some("icon-thumbnails"),
            Self::Member => Some("icon-user"),
            Self::MemberType => Some("icon-users"),
            Self::Document | Self::Media => None,
        }
    }
}

/// One entity as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
}

impl EntityRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Read-only query surface onto the host's entity store. The core never
/// writes through this interface.
pub trait EntityService: Send + Sync {
    fn entities_by_type(&self, kind: EntityKind) -> Result<Vec<EntityRef>>;
}

const SOURCE_ICON: &str = "icon-science";

/// Enumerates host entities of a configured type as list items.
pub struct EntityDataListSource {
    service: Arc<dyn EntityService>,
}

impl EntityDataListSource {
    pub fn new(service: Arc<dyn EntityService>) -> Self {
        Self { service }
    }
}

impl EditorItem for EntityDataListSource {
    fn key(&self) -> EditorKey {
        EditorKey::of::<Self>()
    }

    fn name(&self) -> Option<&str> {
        Some("Umbraco Entity")
    }

    fn description(&self) -> Option<&str> {
        Some("Select an entity type to populate the data source.")
    }

    fn icon(&self) -> Option<&str> {
        Some(SOURCE_ICON)
    }

    fn fields(&self) -> Vec<ConfigurationField> {
        let kinds: Vec<ListItem> = EntityKind::ALL
            .iter()
            .map(|kind| ListItem::named(kind.as_str(), split_pascal_casing(kind.as_str())))
            .collect();

        vec![
            notes_field(
                "<p><strong>A note about supported entity types.</strong></p>\
                 <p>The host entity service has limited support for querying entity \
                 types by identifier. Supported entity types are available in the \
                 list below.</p>",
            ),
            ConfigurationField::new("entityType", "Entity type", "dropdown")
                .with_description("Select the entity type to use.")
                .with_config_entry("allowEmpty", false)
                .with_config_entry("items", serde_json::to_value(kinds).unwrap_or_default()),
        ]
    }

    fn as_source(&self) -> Option<&dyn DataListSource> {
        Some(self)
    }
}

impl DataListSource for EntityDataListSource {
    fn get_items(&self, config: &ConfigMap) -> Result<Vec<ListItem>> {
        let entity_type = config
            .get("entityType")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let Some(kind) = EntityKind::parse(entity_type) else {
            debug!("unsupported entity type `{entity_type}`, returning no items");
            return Ok(Vec::new());
        };

        let icon = kind.icon().unwrap_or(SOURCE_ICON);
        let mut entities = self.service.entities_by_type(kind)?;
        entities.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entities
            .into_iter()
            .map(|entity| {
                ListItem::named(
                    format!("umb://{}/{}", kind.udi_kind(), entity.id),
                    entity.name,
                )
                .with_icon(icon)
            })
            .collect())
    }
}
