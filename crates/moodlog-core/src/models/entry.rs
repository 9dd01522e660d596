//! Log entries and ratings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tag::{TagId, TagRef};

/// Maximum length of an entry message, in characters.
///
/// The entry editor caps input at this length; imported messages beyond it
/// are truncated at a char boundary.
pub const MAX_MESSAGE_LEN: usize = 500;

/// Opaque unique identifier of a log entry.
///
/// Assigned at creation by the producing application; never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// Creates an entry id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Mood rating of a log entry.
///
/// A closed enumeration; an entry may also carry no rating at all, which is
/// modeled as `Option<Rating>` on [`LogEntry`] rather than an extra variant,
/// so the "absent never matches a non-empty constraint" rule stays an
/// explicit branch in the filter evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Negative,
    Neutral,
    Positive,
}

impl Rating {
    /// All ratings, in ascending order of sentiment.
    pub const ALL: [Rating; 3] = [Rating::Negative, Rating::Neutral, Rating::Positive];

    /// Returns the lowercase name used in the export format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Negative => "negative",
            Rating::Neutral => "neutral",
            Rating::Positive => "positive",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a rating from a string fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown rating: {value} (expected negative, neutral or positive)")]
pub struct RatingParseError {
    /// The value that failed to parse.
    pub value: String,
}

impl FromStr for Rating {
    type Err = RatingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "negative" => Ok(Rating::Negative),
            "neutral" => Ok(Rating::Neutral),
            "positive" => Ok(Rating::Positive),
            _ => Err(RatingParseError {
                value: s.to_string(),
            }),
        }
    }
}

/// A single mood log entry.
///
/// One entry per calendar day; `id` and `date` are immutable after
/// creation, `message` and `tags` are editable in the producing app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier, stable across edits.
    pub id: EntryId,

    /// The calendar day this entry belongs to (YYYY-MM-DD in the export).
    pub date: NaiveDate,

    /// Mood rating, if one was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    /// Free-text journal message; capped at [`MAX_MESSAGE_LEN`] characters.
    #[serde(default)]
    pub message: String,

    /// Tags attached to the entry, referenced by id.
    #[serde(default)]
    pub tags: Vec<TagRef>,

    /// Creation timestamp.
    #[serde(
        default,
        rename = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// Full timestamp of the moment the entry describes.
    #[serde(default, rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
}

impl LogEntry {
    /// Creates a minimal entry for the given id and date.
    pub fn new(id: impl Into<EntryId>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
            rating: None,
            message: String::new(),
            tags: Vec::new(),
            created_at: None,
            date_time: None,
        }
    }

    /// Returns the ids of the tags attached to this entry.
    pub fn tag_ids(&self) -> impl Iterator<Item = &TagId> {
        self.tags.iter().map(|t| &t.id)
    }

    /// Returns true if the entry has a non-empty message.
    pub fn has_text(&self) -> bool {
        !self.message.is_empty()
    }

    /// Returns true if the entry carries any visible content: a non-empty
    /// message or a rating.
    pub fn has_content(&self) -> bool {
        self.has_text() || self.rating.is_some()
    }

    /// Truncates the message to [`MAX_MESSAGE_LEN`] characters, respecting
    /// char boundaries.
    pub fn clamp_message(&mut self) {
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            self.message = self.message.chars().take(MAX_MESSAGE_LEN).collect();
        }
    }
}

impl From<EntryId> for String {
    fn from(id: EntryId) -> Self {
        id.0
    }
}
