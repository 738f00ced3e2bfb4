pub mod core;
pub mod editors;
pub mod runtime;
pub mod sources;

pub use crate::core::error::{Error, Result};
pub use crate::core::field::ConfigurationField;
pub use crate::core::item::{DataListEditor, DataListSource, EditorItem, ListItem};
pub use crate::core::model::{ConfigurationEditorModel, build_model, build_models};
pub use crate::core::registry::{EditorRegistry, RegistryBuilder};
pub use crate::core::stored::StoredValue;
pub use crate::core::value::ConfigMap;
pub use crate::core::{DEFAULT_ICON, EditorKey};
pub use crate::runtime::config::{OverlayConfig, OverlayMode, OverlaySize};
pub use crate::runtime::event::OverlayEvent;
pub use crate::runtime::intent::Intent;
pub use crate::runtime::reducer::Reducer;
pub use crate::runtime::state::{
    CloseReason, FieldState, OverlaySession, OverlaySnapshot, Stage, StageKind,
};
