//! The filter specification edited by the user.

use serde::{Deserialize, Serialize};

use crate::models::{Rating, TagId};

/// The set of active filter constraints.
///
/// Starts all-empty, is mutated by the filter editor, and can be reset back
/// to defaults. It is session state only and is never persisted.
///
/// Each dimension is inactive while empty:
///
/// - `text` — substring to look for in entry messages, case-insensitive.
/// - `ratings` — acceptable ratings; an entry must carry one of them.
/// - `tag_ids` — tag ids that must ALL be present on an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Free-text constraint; empty string means no constraint.
    #[serde(default)]
    pub text: String,

    /// Acceptable ratings; empty means no constraint.
    #[serde(default)]
    pub ratings: Vec<Rating>,

    /// Required tag ids; empty means no constraint.
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
}

impl FilterSpec {
    /// Creates an all-empty spec. Identical to `Default::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one dimension is active.
    pub fn is_filtering(&self) -> bool {
        !self.text.is_empty() || !self.ratings.is_empty() || !self.tag_ids.is_empty()
    }

    /// Number of active filter selections.
    ///
    /// The text dimension counts once when non-empty; each selected rating
    /// and each required tag counts individually. This is the badge count
    /// shown next to the filter button.
    pub fn filter_count(&self) -> usize {
        usize::from(!self.text.is_empty()) + self.ratings.len() + self.tag_ids.len()
    }

    /// Clears all dimensions back to the defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
