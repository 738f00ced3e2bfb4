use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::core::EditorKey;
use crate::core::field::ConfigurationField;
use crate::core::model::ConfigurationEditorModel;
use crate::core::stored::{StoredValue, resolve_field_value};
use crate::core::value::ConfigMap;
use crate::runtime::config::{OverlayConfig, OverlayMode, OverlaySize};
use crate::runtime::event::OverlayEvent;

/// One field of the item being configured, with its current value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    #[serde(flatten)]
    pub field: ConfigurationField,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Saved,
    Cancelled,
}

#[derive(Debug, Clone)]
pub enum Stage {
    Select,
    Edit {
        editor: ConfigurationEditorModel,
        values: Vec<FieldState>,
    },
    Closed(CloseReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Select,
    Edit,
    Closed,
}

/// Read-only view of a session for the rendering surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySnapshot {
    pub title: String,
    pub stage: StageKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ConfigurationEditorModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_size: Option<OverlaySize>,
    pub enable_filter: bool,
}

/// One interactive select-then-configure session.
///
/// Exactly one user drives one session; sessions share no mutable state
/// with each other. All observable consequences of a transition are
/// returned as [`OverlayEvent`]s; after the session closes, further
/// intents are ignored.
pub struct OverlaySession {
    config: OverlayConfig,
    stored: Option<StoredValue>,
    stage: Stage,
    title: String,
    size: Option<OverlaySize>,
    filter: String,
}

impl OverlaySession {
    /// Opens a session. The initial stage is computed from the
    /// configuration: a sole candidate with auto-select enabled skips the
    /// selection list entirely, and a zero-field sole candidate commits
    /// straight away.
    pub fn start(config: OverlayConfig, stored: Option<StoredValue>) -> (Self, Vec<OverlayEvent>) {
        let mut session = Self {
            config,
            stored,
            stage: Stage::Select,
            title: String::new(),
            size: None,
            filter: String::new(),
        };

        let mut events = Vec::new();
        match session.config.mode {
            OverlayMode::Select => {
                if session.config.auto_select && session.config.items.len() == 1 {
                    let sole = session.config.items[0].clone();
                    session.enter_chosen(sole, &mut events);
                } else {
                    session.enter_select(&mut events);
                }
            }
            OverlayMode::Edit => match session.config.editor.clone() {
                Some(editor) => session.enter_edit(editor, &mut events),
                None => {
                    debug!("edit mode without an editor model, falling back to selection");
                    session.enter_select(&mut events);
                }
            },
        }

        (session, events)
    }

    // --- transitions ---

    /// Choose a candidate while selecting. An unknown key is ignored.
    pub fn choose(&mut self, key: &EditorKey) -> Vec<OverlayEvent> {
        let mut events = Vec::new();
        if !matches!(self.stage, Stage::Select) {
            debug!("choose ignored outside the selection stage");
            return events;
        }
        let Some(editor) = self
            .config
            .items
            .iter()
            .find(|item| item.key == *key)
            .cloned()
        else {
            debug!("chose unknown editor item `{key}`, ignoring");
            return events;
        };
        self.enter_chosen(editor, &mut events);
        events
    }

    pub fn set_filter(&mut self, text: String) -> Vec<OverlayEvent> {
        if matches!(self.stage, Stage::Select) && self.config.enable_filter {
            self.filter = text;
        }
        Vec::new()
    }

    /// Write one field's current value. Unknown field keys are ignored.
    pub fn set_field(&mut self, key: &str, value: Value) -> Vec<OverlayEvent> {
        let Stage::Edit { values, .. } = &mut self.stage else {
            debug!("set_field ignored outside the edit stage");
            return Vec::new();
        };
        let Some(state) = values.iter_mut().find(|state| state.field.key == key) else {
            debug!("set_field for unknown field `{key}`, ignoring");
            return Vec::new();
        };
        state.value = value;
        vec![OverlayEvent::Dirty {
            key: key.to_string(),
        }]
    }

    /// Commit the edited values: the result maps every field key of the
    /// edited item, no extras, no drops. The workflow performs no field
    /// validation of its own; widgets gate their own values before save
    /// is permitted.
    pub fn save(&mut self) -> Vec<OverlayEvent> {
        let mut events = Vec::new();
        let Stage::Edit { editor, values } = &self.stage else {
            debug!("save ignored outside the edit stage");
            return events;
        };
        let collected: ConfigMap = values
            .iter()
            .map(|state| (state.field.key.clone(), state.value.clone()))
            .collect();
        let stored = StoredValue::new(editor.key.clone(), collected);
        self.commit(stored, &mut events);
        events
    }

    /// User-driven close without a result; permitted from any stage,
    /// terminal.
    pub fn cancel(&mut self) -> Vec<OverlayEvent> {
        if matches!(self.stage, Stage::Closed(_)) {
            return Vec::new();
        }
        self.stage = Stage::Closed(CloseReason::Cancelled);
        vec![OverlayEvent::Cancelled]
    }

    // --- read-only surface ---

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn overlay_size(&self) -> Option<OverlaySize> {
        self.size
    }

    pub fn filter(&self) -> &str {
        self.filter.as_str()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.stage, Stage::Closed(_))
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        match self.stage {
            Stage::Closed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Candidate list as the selection surface should show it: filtered
    /// when a filter is active, sorted by display name when the ordering
    /// key is `"name"`, registration order otherwise.
    pub fn visible_items(&self) -> Vec<&ConfigurationEditorModel> {
        let mut items: Vec<&ConfigurationEditorModel> = self.config.items.iter().collect();
        if self.config.enable_filter && !self.filter.is_empty() {
            let needle = self.filter.to_lowercase();
            items.retain(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|text| text.to_lowercase().contains(&needle))
            });
        }
        if self.config.order_by == "name" {
            items.sort_by_key(|item| item.name.to_lowercase());
        }
        items
    }

    pub fn snapshot(&self) -> OverlaySnapshot {
        let (stage, items, fields) = match &self.stage {
            Stage::Select => (
                StageKind::Select,
                self.visible_items().into_iter().cloned().collect(),
                Vec::new(),
            ),
            Stage::Edit { values, .. } => (StageKind::Edit, Vec::new(), values.clone()),
            Stage::Closed(_) => (StageKind::Closed, Vec::new(), Vec::new()),
        };
        OverlaySnapshot {
            title: self.title.clone(),
            stage,
            items,
            fields,
            overlay_size: self.size,
            enable_filter: self.config.enable_filter,
        }
    }

    // --- internals ---

    fn enter_select(&mut self, events: &mut Vec<OverlayEvent>) {
        self.title = format!("Select {}...", self.config.label.to_lowercase());
        self.stage = Stage::Select;
        events.push(OverlayEvent::EnteredSelect);
    }

    fn enter_chosen(&mut self, editor: ConfigurationEditorModel, events: &mut Vec<OverlayEvent>) {
        if editor.fields.is_empty() {
            // Nothing to configure; commit without showing an empty form.
            self.commit(StoredValue::new(editor.key, ConfigMap::new()), events);
        } else {
            self.enter_edit(editor, events);
        }
    }

    fn enter_edit(&mut self, editor: ConfigurationEditorModel, events: &mut Vec<OverlayEvent>) {
        if self.size != Some(self.config.overlay_size) {
            self.size = Some(self.config.overlay_size);
            events.push(OverlayEvent::SizeChanged(self.config.overlay_size));
        }
        self.title = format!("Configure {}", editor.name);

        let stored_values = self
            .stored
            .as_ref()
            .filter(|stored| stored.key == editor.key)
            .map(|stored| &stored.value);
        let values = editor
            .fields
            .iter()
            .map(|field| FieldState {
                value: resolve_field_value(field, stored_values, &editor.default_values),
                field: field.clone(),
            })
            .collect();

        events.push(OverlayEvent::EnteredEdit {
            key: editor.key.clone(),
        });
        self.stage = Stage::Edit { editor, values };
    }

    fn commit(&mut self, value: StoredValue, events: &mut Vec<OverlayEvent>) {
        events.push(OverlayEvent::FormSubmitting);
        events.push(OverlayEvent::Submitted(value));
        self.stage = Stage::Closed(CloseReason::Saved);
    }
}
