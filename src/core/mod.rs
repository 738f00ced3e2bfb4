pub mod error;
pub mod field;
pub mod item;
pub mod model;
pub mod registry;
pub mod stored;
pub mod value;

use std::any::type_name;
use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon applied when an editor item does not declare one of its own.
pub const DEFAULT_ICON: &str = "icon-document";

/// Stable identity of an editor item: its fully qualified type path.
///
/// Doubles as the registry lookup key and as the persisted discriminator
/// inside a [`StoredValue`](crate::core::stored::StoredValue).
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EditorKey(String);

impl EditorKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Key of a concrete item type.
    pub fn of<T: ?Sized>() -> Self {
        Self(type_name::<T>().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Final path segment; display-name fallbacks are derived from this.
    pub fn short_name(&self) -> &str {
        let tail = self.0.rsplit("::").next().unwrap_or(self.0.as_str());
        tail.rsplit('.').next().unwrap_or(tail)
    }
}

impl fmt::Display for EditorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for EditorKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for EditorKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for EditorKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EditorKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for EditorKey {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}
