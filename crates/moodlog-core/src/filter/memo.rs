//! Memoized filter evaluation.

use crate::LogBook;

use super::evaluator::{FilterEvaluator, FilterOutcome};
use super::spec::FilterSpec;

/// Caches the most recent [`FilterOutcome`].
///
/// Evaluation is pure, so an outcome stays valid until either the spec or
/// the log book changes. The book side is tracked by [`LogBook::revision`],
/// which bumps on every successful mutation; the spec side is compared
/// structurally. Only the latest result is retained, which matches the
/// access pattern of a view re-rendering against one current filter.
#[derive(Debug, Clone, Default)]
pub struct EvaluationCache {
    cached: Option<(FilterSpec, u64, FilterOutcome)>,
}

impl EvaluationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the outcome for `spec` against `book`, evaluating only if
    /// the cached result is stale or absent.
    pub fn evaluate(&mut self, spec: &FilterSpec, book: &LogBook) -> FilterOutcome {
        let revision = book.revision();
        if let Some((cached_spec, cached_revision, outcome)) = &self.cached {
            if cached_spec == spec && *cached_revision == revision {
                return outcome.clone();
            }
        }

        let outcome = FilterEvaluator::new(spec).evaluate(book);
        self.cached = Some((spec.clone(), revision, outcome.clone()));
        outcome
    }

    /// Drops any cached result.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogEntry, Rating};

    fn book() -> LogBook {
        let mut book = LogBook::new();
        let mut entry = LogEntry::new("e1", "2020-01-02".parse().unwrap());
        entry.rating = Some(Rating::Positive);
        book.insert(entry).unwrap();
        book
    }

    #[test]
    fn test_cache_hit_returns_same_outcome() {
        let book = book();
        let mut spec = FilterSpec::default();
        spec.ratings.push(Rating::Negative);

        let mut cache = EvaluationCache::new();
        let first = cache.evaluate(&spec, &book);
        let second = cache.evaluate(&spec, &book);
        assert_eq!(first, second);
        assert!(first.excluded.contains(&"e1".into()));
    }

    #[test]
    fn test_spec_change_invalidates() {
        let book = book();
        let mut cache = EvaluationCache::new();

        let mut spec = FilterSpec::default();
        spec.ratings.push(Rating::Negative);
        assert_eq!(cache.evaluate(&spec, &book).excluded.len(), 1);

        spec.ratings[0] = Rating::Positive;
        assert!(cache.evaluate(&spec, &book).excluded.is_empty());
    }

    #[test]
    fn test_book_mutation_invalidates() {
        let mut book = book();
        let mut spec = FilterSpec::default();
        spec.ratings.push(Rating::Positive);

        let mut cache = EvaluationCache::new();
        assert!(cache.evaluate(&spec, &book).excluded.is_empty());

        let unrated = LogEntry::new("e2", "2020-01-03".parse().unwrap());
        book.insert(unrated).unwrap();
        let outcome = cache.evaluate(&spec, &book);
        assert!(outcome.excluded.contains(&"e2".into()));
    }
}
