//! Calendar filter evaluation.
//!
//! This module decides which log entries a set of active filters excludes,
//! so the calendar can dim the matching-out days and show an active-filter
//! badge count.
//!
//! A [`FilterSpec`] holds the three filter dimensions the filter editor
//! offers:
//!
//! - free text matched case-insensitively against entry messages,
//! - a set of acceptable ratings,
//! - a set of tag ids that must all be present on an entry.
//!
//! An empty dimension is inactive and constrains nothing; the all-empty
//! spec matches every entry. The [`FilterEvaluator`] applies a spec to
//! entries and reports the *excluded* set — the entries that do NOT match —
//! because that is what the calendar consumes to dim cells.
//!
//! # Example
//!
//! ```
//! use moodlog_core_rs::LogBook;
//! use moodlog_core_rs::filter::{FilterEvaluator, FilterSpec};
//! use moodlog_core_rs::models::{LogEntry, Rating};
//!
//! let mut book = LogBook::new();
//! let mut entry = LogEntry::new("e1", "2020-01-02".parse().unwrap());
//! entry.rating = Some(Rating::Negative);
//! book.insert(entry).unwrap();
//!
//! let mut spec = FilterSpec::default();
//! spec.ratings.push(Rating::Positive);
//!
//! let outcome = FilterEvaluator::new(&spec).evaluate(&book);
//! assert!(outcome.is_filtering);
//! assert_eq!(outcome.filter_count, 1);
//! assert!(outcome.excluded.contains(&"e1".into()));
//! ```

mod context;
mod error;
mod evaluator;
mod memo;
mod spec;

pub use context::FilterContext;
pub use error::{FilterError, FilterResult};
pub use evaluator::{FilterEvaluator, FilterOutcome};
pub use memo::EvaluationCache;
pub use spec::FilterSpec;
