use crate::core::EditorKey;
use crate::core::stored::StoredValue;
use crate::runtime::config::OverlaySize;

/// Explicit transition outputs of a session.
///
/// Callers subscribe to these instead of watching ambient form state:
/// every observable consequence of an intent is in the returned events.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    EnteredSelect,
    EnteredEdit { key: EditorKey },
    /// The overlay panel should resize; emitted only when entering the
    /// edit stage with a size different from the current one.
    SizeChanged(OverlaySize),
    /// One field value changed while editing.
    Dirty { key: String },
    /// Broadcast immediately before save collects field values, so
    /// dependent surfaces can flush pending edits synchronously.
    FormSubmitting,
    /// The session committed; the payload is the caller's new value.
    Submitted(StoredValue),
    /// The session ended without a result; the caller's prior value is
    /// left untouched.
    Cancelled,
}
