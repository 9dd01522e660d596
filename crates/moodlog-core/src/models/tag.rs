//! Tags and tag references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(pub String);

impl TagId {
    /// Creates a tag id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TagId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A by-id reference to a tag, as stored on a log entry.
///
/// Entries only carry the id; label and color live on [`Tag`] in the
/// settings section of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    /// Id of the referenced tag.
    pub id: TagId,
}

impl TagRef {
    /// Creates a reference to the given tag id.
    pub fn new(id: impl Into<TagId>) -> Self {
        Self { id: id.into() }
    }
}

/// A user-defined tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier.
    pub id: TagId,

    /// Display label shown in the filter editor.
    pub label: String,

    /// Display color name, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Tag {
    /// Creates a tag with the given id and label and no color.
    pub fn new(id: impl Into<TagId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: None,
        }
    }
}
