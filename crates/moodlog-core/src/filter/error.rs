//! Error types for building filter specs.

use thiserror::Error;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while resolving user input into a [`FilterSpec`].
///
/// Evaluation itself has no failure modes — absent optional fields are
/// handled by the matching policy — so these errors only arise at the
/// boundary where labels and rating names are resolved.
///
/// [`FilterSpec`]: super::FilterSpec
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A tag label or id did not resolve against the known tags.
    #[error("unknown tag: {name}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
    UnknownTag {
        /// The label or id that failed to resolve.
        name: String,
        /// Closest known label, if one is similar enough.
        suggestion: Option<String>,
    },

    /// A rating name did not parse.
    #[error("unknown rating: {value} (expected negative, neutral or positive)")]
    UnknownRating {
        /// The value that failed to parse.
        value: String,
    },
}

impl FilterError {
    /// Creates an unknown-tag error.
    pub fn unknown_tag(name: impl Into<String>, suggestion: Option<String>) -> Self {
        FilterError::UnknownTag {
            name: name.into(),
            suggestion,
        }
    }

    /// Creates an unknown-rating error.
    pub fn unknown_rating(value: impl Into<String>) -> Self {
        FilterError::UnknownRating {
            value: value.into(),
        }
    }
}
