use serde_json::Value;

use crate::core::EditorKey;

/// Inbound operations from the rendering surface driving one session.
#[derive(Debug, Clone)]
pub enum Intent {
    /// Choose a candidate item while selecting.
    Choose(EditorKey),
    /// Replace the filter text over the candidate list.
    SetFilter(String),
    /// Write one field's current value while editing.
    SetField { key: String, value: Value },
    Save,
    Cancel,
}
