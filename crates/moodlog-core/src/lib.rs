//! Core library for mood log data.
//!
//! This crate holds the in-memory [`LogBook`] collection together with the
//! calendar filter machinery built on top of it:
//!
//! - [`models`] — entries, ratings and tags as they appear in the app's
//!   JSON export.
//! - [`filter`] — the [`FilterSpec`](filter::FilterSpec) /
//!   [`FilterEvaluator`](filter::FilterEvaluator) pair that computes which
//!   entries a set of active filters excludes.
//! - [`calendar`] — a pure month view model consuming the evaluator's
//!   output, for rendering dimmed/normal calendar cells.
//! - [`import`] — a read-only loader for the export file. The export is
//!   produced elsewhere; this crate never writes it.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod calendar;
pub mod filter;
pub mod import;
pub mod models;

use models::{EntryId, LogEntry, Tag, TagId};

/// Errors produced by [`LogBook`] mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LogBookError {
    /// An entry with this id already exists.
    #[error("duplicate entry id: {0}")]
    DuplicateId(EntryId),

    /// An entry for this date already exists. The calendar assumes at most
    /// one entry per day, so a second one is rejected rather than shadowed.
    #[error("an entry for {0} already exists")]
    DuplicateDate(NaiveDate),

    /// No entry with this id exists.
    #[error("entry not found: {0}")]
    NotFound(EntryId),
}

/// In-memory collection of log entries and tags.
///
/// The structure mirrors the app's export: a keyed set of entries plus the
/// tag list from settings. Lookup indexes are not serialized and are
/// rebuilt after deserialization via [`rebuild_indexes`](Self::rebuild_indexes).
///
/// Every mutation bumps [`revision`](Self::revision), which callers can use
/// as the collection half of a `(spec, revision)` memoization key when
/// re-evaluating filters on every change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogBook {
    /// All log entries, kept sorted by date ascending.
    #[serde(default)]
    pub entries: Vec<LogEntry>,

    /// All known tags.
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Mutation counter; not serialized.
    #[serde(skip)]
    revision: u64,

    /// Index from entry id to position in `entries`; not serialized.
    #[serde(skip)]
    id_index: HashMap<EntryId, usize>,

    /// Index from date to position in `entries`; not serialized.
    #[serde(skip)]
    date_index: HashMap<NaiveDate, usize>,
}

impl Default for LogBook {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBook {
    /// Creates an empty log book.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            tags: Vec::new(),
            revision: 0,
            id_index: HashMap::new(),
            date_index: HashMap::new(),
        }
    }

    /// Returns true if the book contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the book.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Current mutation counter. Increases by at least one on every
    /// successful mutation; never decreases.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Rebuilds the id and date indexes from `entries`.
    ///
    /// Must be called after deserializing a book, since the indexes are
    /// skipped by serde. Also sorts entries by date ascending.
    pub fn rebuild_indexes(&mut self) {
        self.entries.sort_by_key(|e| e.date);
        self.id_index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        self.date_index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.date, i))
            .collect();
    }

    /// Looks up an entry by id.
    pub fn entry(&self, id: &EntryId) -> Option<&LogEntry> {
        self.id_index.get(id).map(|&i| &self.entries[i])
    }

    /// Looks up the entry for a calendar day.
    pub fn entry_for_date(&self, date: NaiveDate) -> Option<&LogEntry> {
        self.date_index.get(&date).map(|&i| &self.entries[i])
    }

    /// Looks up a tag by id.
    pub fn tag(&self, id: &TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| &t.id == id)
    }

    /// Iterates entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`LogBookError::DuplicateId`] or [`LogBookError::DuplicateDate`]
    /// if an entry with the same id or date already exists.
    pub fn insert(&mut self, entry: LogEntry) -> Result<(), LogBookError> {
        if self.id_index.contains_key(&entry.id) {
            return Err(LogBookError::DuplicateId(entry.id));
        }
        if self.date_index.contains_key(&entry.date) {
            return Err(LogBookError::DuplicateDate(entry.date));
        }

        self.entries.push(entry);
        self.rebuild_indexes();
        self.revision += 1;
        Ok(())
    }

    /// Replaces the entry with the same id, or inserts it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`LogBookError::DuplicateDate`] if the entry's date collides
    /// with a different entry.
    pub fn upsert(&mut self, entry: LogEntry) -> Result<(), LogBookError> {
        if let Some(&date_pos) = self.date_index.get(&entry.date) {
            if self.entries[date_pos].id != entry.id {
                return Err(LogBookError::DuplicateDate(entry.date));
            }
        }

        match self.id_index.get(&entry.id) {
            Some(&pos) => {
                self.entries[pos] = entry;
                self.rebuild_indexes();
            }
            None => {
                self.entries.push(entry);
                self.rebuild_indexes();
            }
        }
        self.revision += 1;
        Ok(())
    }

    /// Removes the entry with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`LogBookError::NotFound`] if no such entry exists.
    pub fn remove(&mut self, id: &EntryId) -> Result<LogEntry, LogBookError> {
        let pos = *self
            .id_index
            .get(id)
            .ok_or_else(|| LogBookError::NotFound(id.clone()))?;
        let entry = self.entries.remove(pos);
        self.rebuild_indexes();
        self.revision += 1;
        Ok(entry)
    }

    /// Replaces the tag list.
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
        self.revision += 1;
    }
}
