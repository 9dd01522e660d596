//! Filter evaluation against log entries.
//!
//! The [`FilterEvaluator`] applies a [`FilterSpec`] to entries. It is a
//! pure function of its two inputs: it runs synchronously on the calling
//! thread, performs no I/O, holds no locks, and mutates neither the spec
//! nor the entries. Re-evaluating with unchanged inputs yields identical
//! results.

use std::collections::BTreeSet;

use crate::models::{EntryId, LogEntry};
use crate::LogBook;

use super::spec::FilterSpec;

/// Result of evaluating a [`FilterSpec`] against a collection of entries.
///
/// `excluded` holds the ids of entries that do NOT match the active
/// filters — the set the calendar dims. Note the polarity: this is the
/// filtered-*out* set, not the matching set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Ids of entries excluded by the active filters.
    pub excluded: BTreeSet<EntryId>,

    /// True if at least one filter dimension is active.
    pub is_filtering: bool,

    /// Number of active filter selections (the badge count).
    pub filter_count: usize,
}

impl FilterOutcome {
    /// Returns true if the entry with the given id was excluded.
    pub fn is_excluded(&self, id: &EntryId) -> bool {
        self.excluded.contains(id)
    }
}

/// Evaluates a filter spec against log entries.
///
/// Borrows the spec for the duration of the evaluation; construct it
/// wherever a spec and entries meet rather than holding it long-term.
#[derive(Debug, Clone)]
pub struct FilterEvaluator<'a> {
    spec: &'a FilterSpec,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates an evaluator for the given spec.
    pub fn new(spec: &'a FilterSpec) -> Self {
        Self { spec }
    }

    /// Returns true if the entry satisfies every *active* filter
    /// dimension. Inactive dimensions are vacuously satisfied, so the
    /// all-empty spec matches everything.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        self.matches_text(entry) && self.matches_ratings(entry) && self.matches_tags(entry)
    }

    /// Text dimension: case-folded substring containment.
    fn matches_text(&self, entry: &LogEntry) -> bool {
        if self.spec.text.is_empty() {
            return true;
        }
        entry
            .message
            .to_lowercase()
            .contains(&self.spec.text.to_lowercase())
    }

    /// Ratings dimension: the entry's rating must be one of the selected
    /// ratings. An unset rating never matches a non-empty selection.
    fn matches_ratings(&self, entry: &LogEntry) -> bool {
        if self.spec.ratings.is_empty() {
            return true;
        }
        match entry.rating {
            Some(rating) => self.spec.ratings.contains(&rating),
            None => false,
        }
    }

    /// Tags dimension: every required tag id must be present on the entry
    /// (subset test; extra entry tags are permitted). An entry without
    /// tags never matches a non-empty requirement.
    fn matches_tags(&self, entry: &LogEntry) -> bool {
        if self.spec.tag_ids.is_empty() {
            return true;
        }
        self.spec
            .tag_ids
            .iter()
            .all(|required| entry.tag_ids().any(|id| id == required))
    }

    /// Computes the ids of entries that do NOT match the spec.
    ///
    /// Membership, not order, is what downstream consumers observe; the
    /// result is a set and each id appears at most once.
    pub fn excluded_entries<'b, I>(&self, entries: I) -> BTreeSet<EntryId>
    where
        I: IntoIterator<Item = &'b LogEntry>,
    {
        entries
            .into_iter()
            .filter(|entry| !self.matches(entry))
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// Evaluates the spec against a whole log book.
    pub fn evaluate(&self, book: &LogBook) -> FilterOutcome {
        FilterOutcome {
            excluded: self.excluded_entries(book.iter()),
            is_filtering: self.spec.is_filtering(),
            filter_count: self.spec.filter_count(),
        }
    }
}
