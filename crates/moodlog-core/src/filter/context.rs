//! Resolution context for building filter specs from user input.

use std::str::FromStr;

use crate::models::{Rating, Tag, TagId};

use super::error::{FilterError, FilterResult};
use super::spec::FilterSpec;

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Context for resolving user-facing names into a [`FilterSpec`].
///
/// Borrows the tag list so that tag labels typed by the user can be turned
/// into the ids the evaluator works with. The context is always passed
/// explicitly; there is no ambient/global filter state, and an
/// unresolvable reference is a hard [`FilterError`] rather than a silent
/// default.
#[derive(Debug, Clone)]
pub struct FilterContext<'a> {
    tags: &'a [Tag],
}

impl<'a> FilterContext<'a> {
    /// Creates a new context over the known tags.
    pub fn new(tags: &'a [Tag]) -> Self {
        Self { tags }
    }

    /// Finds a tag by label (case-insensitive) or by exact id.
    pub fn find_tag(&self, name: &str) -> Option<&Tag> {
        let name_lower = name.to_lowercase();
        self.tags
            .iter()
            .find(|t| t.label.to_lowercase() == name_lower || t.id.as_str() == name)
    }

    /// Resolves a tag label or id, suggesting the closest label on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownTag`] when nothing resolves.
    pub fn resolve_tag(&self, name: &str) -> FilterResult<TagId> {
        match self.find_tag(name) {
            Some(tag) => Ok(tag.id.clone()),
            None => Err(FilterError::unknown_tag(name, self.suggest_tag(name))),
        }
    }

    /// Returns the known label most similar to `name`, if any is close
    /// enough to be a plausible typo.
    fn suggest_tag(&self, name: &str) -> Option<String> {
        let name_lower = name.to_lowercase();
        self.tags
            .iter()
            .map(|t| {
                let score = strsim::jaro_winkler(&name_lower, &t.label.to_lowercase());
                (score, &t.label)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, label)| label.clone())
    }

    /// Builds a [`FilterSpec`] from raw user input: free text, rating names
    /// and tag labels/ids.
    ///
    /// # Errors
    ///
    /// Returns the first [`FilterError`] hit while resolving ratings or
    /// tags.
    pub fn build_spec(
        &self,
        text: &str,
        ratings: &[String],
        tags: &[String],
    ) -> FilterResult<FilterSpec> {
        let ratings = ratings
            .iter()
            .map(|r| Rating::from_str(r).map_err(|e| FilterError::unknown_rating(e.value)))
            .collect::<FilterResult<Vec<_>>>()?;

        let tag_ids = tags
            .iter()
            .map(|t| self.resolve_tag(t))
            .collect::<FilterResult<Vec<_>>>()?;

        Ok(FilterSpec {
            text: text.to_string(),
            ratings,
            tag_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<Tag> {
        vec![
            Tag::new("t1", "work"),
            Tag::new("t2", "sleep"),
            Tag::new("t3", "exercise"),
        ]
    }

    #[test]
    fn test_find_tag_case_insensitive_label() {
        let tags = tags();
        let context = FilterContext::new(&tags);
        assert_eq!(context.find_tag("WORK").unwrap().id.as_str(), "t1");
    }

    #[test]
    fn test_find_tag_by_id() {
        let tags = tags();
        let context = FilterContext::new(&tags);
        assert_eq!(context.find_tag("t2").unwrap().label, "sleep");
    }

    #[test]
    fn test_resolve_tag_unknown_with_suggestion() {
        let tags = tags();
        let context = FilterContext::new(&tags);

        let err = context.resolve_tag("wrok").unwrap_err();
        match err {
            FilterError::UnknownTag { name, suggestion } => {
                assert_eq!(name, "wrok");
                assert_eq!(suggestion.as_deref(), Some("work"));
            }
            other => panic!("expected UnknownTag, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_tag_unknown_without_suggestion() {
        let tags = tags();
        let context = FilterContext::new(&tags);

        let err = context.resolve_tag("zzzzzz").unwrap_err();
        match err {
            FilterError::UnknownTag { suggestion, .. } => assert!(suggestion.is_none()),
            other => panic!("expected UnknownTag, got {other:?}"),
        }
    }

    #[test]
    fn test_build_spec() {
        let tags = tags();
        let context = FilterContext::new(&tags);

        let spec = context
            .build_spec("walk", &["positive".to_string()], &["work".to_string()])
            .unwrap();
        assert_eq!(spec.text, "walk");
        assert_eq!(spec.ratings, vec![Rating::Positive]);
        assert_eq!(spec.tag_ids, vec!["t1".into()]);
        assert_eq!(spec.filter_count(), 3);
    }

    #[test]
    fn test_build_spec_bad_rating() {
        let tags = tags();
        let context = FilterContext::new(&tags);

        let err = context
            .build_spec("", &["meh".to_string()], &[])
            .unwrap_err();
        assert_eq!(err, FilterError::unknown_rating("meh"));
    }
}
