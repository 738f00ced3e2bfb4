use serde::{Deserialize, Serialize};

use crate::core::model::ConfigurationEditorModel;

/// Size of the overlay editing panel; a presentation hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlaySize {
    Small,
    Large,
}

impl OverlaySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

/// Which end of the workflow the overlay opens at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayMode {
    /// Pick an item kind first, then configure it.
    #[default]
    Select,
    /// Jump straight to configuring a pre-chosen item.
    Edit,
}

/// Configuration the host hands to a selection/configuration session.
/// Every field has a default, so a bare `{}` is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    pub mode: OverlayMode,
    /// Skip the selection list entirely when only one candidate exists.
    pub auto_select: bool,
    /// Human label for the kind of thing being selected ("data source",
    /// "list editor", ...); used in the selection title.
    pub label: String,
    /// Candidate item models for `Select` mode.
    pub items: Vec<ConfigurationEditorModel>,
    /// Pre-chosen item model for `Edit` mode.
    pub editor: Option<ConfigurationEditorModel>,
    pub overlay_size: OverlaySize,
    /// Offer a text filter over the candidate list.
    pub enable_filter: bool,
    /// Candidate ordering key; `"name"` sorts by display name, anything
    /// else keeps the given (registration) order.
    pub order_by: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            mode: OverlayMode::Select,
            auto_select: true,
            label: String::new(),
            items: Vec::new(),
            editor: None,
            overlay_size: OverlaySize::Large,
            enable_filter: false,
            order_by: "name".to_string(),
        }
    }
}
