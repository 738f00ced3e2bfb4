use thiserror::Error;

use crate::core::EditorKey;

/// Convenient result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type.
///
/// Expected data-shape drift (missing registry keys, stale stored field
/// keys, unsupported source options) is absorbed where it is detected and
/// never surfaces here. Only authoring mistakes and external provider
/// failures are errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Two configuration fields on the same item share a key.
    #[error("duplicate configuration field key `{key}` on editor item `{item}`")]
    DuplicateFieldKey { item: EditorKey, key: String },

    /// A configuration field was declared without a key.
    #[error("empty configuration field key on editor item `{item}`")]
    EmptyFieldKey { item: EditorKey },

    /// The external data provider itself failed.
    #[error("data provider failure: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Box::new(err))
    }
}
