//! List command implementation.
//!
//! Lists entries from the export, optionally filtered by text, ratings and
//! tags. With `--excluded` the selection inverts and shows the entries the
//! filters would dim on the calendar.

use std::path::Path;

use moodlog_core_rs::filter::{FilterContext, FilterEvaluator};
use moodlog_core_rs::import::load_log_book;
use moodlog_core_rs::models::LogEntry;
use moodlog_core_rs::LogBook;

use super::{CommandContext, Result};
use crate::output::{format_entries_json, format_entries_table};

/// Options for the list command.
#[derive(Debug)]
pub struct ListOptions {
    /// Free-text filter.
    pub text: Option<String>,
    /// Rating filters.
    pub ratings: Vec<String>,
    /// Tag filters (labels or ids).
    pub tags: Vec<String>,
    /// Show the entries the filters exclude instead.
    pub excluded: bool,
    /// Limit results.
    pub limit: u32,
    /// Show all entries (no limit).
    pub all: bool,
    /// Newest first.
    pub reverse: bool,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if the export cannot be loaded or a filter value does
/// not resolve.
pub fn execute(ctx: &CommandContext, opts: &ListOptions, logs_path: &Path) -> Result<()> {
    let book = load_log_book(logs_path)?;

    if ctx.verbose {
        eprintln!("Loaded {} entries from {}", book.len(), logs_path.display());
    }

    let entries = select_entries(&book, opts)?;
    let total = entries.len();
    let entries = apply_order_and_limit(entries, opts);

    if ctx.json_output {
        let output = format_entries_json(&entries, &book, total)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_entries_table(&entries, &book, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Selects entries per the filter options. Entries come back in date order.
fn select_entries<'a>(book: &'a LogBook, opts: &ListOptions) -> Result<Vec<&'a LogEntry>> {
    let context = FilterContext::new(&book.tags);
    let spec = context.build_spec(
        opts.text.as_deref().unwrap_or(""),
        &opts.ratings,
        &opts.tags,
    )?;
    let evaluator = FilterEvaluator::new(&spec);

    Ok(book
        .iter()
        .filter(|e| evaluator.matches(e) != opts.excluded)
        .collect())
}

/// Applies ordering and the result limit.
fn apply_order_and_limit<'a>(
    mut entries: Vec<&'a LogEntry>,
    opts: &ListOptions,
) -> Vec<&'a LogEntry> {
    if opts.reverse {
        entries.reverse();
    }

    if opts.all {
        entries
    } else {
        entries.into_iter().take(opts.limit as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlog_core_rs::models::Rating;

    fn options() -> ListOptions {
        ListOptions {
            text: None,
            ratings: Vec::new(),
            tags: Vec::new(),
            excluded: false,
            limit: 50,
            all: false,
            reverse: false,
        }
    }

    fn sample_book() -> LogBook {
        let mut book = LogBook::new();
        for (id, day, rating) in [
            ("e1", "2024-03-04", Some(Rating::Negative)),
            ("e2", "2024-03-05", Some(Rating::Positive)),
            ("e3", "2024-03-06", None),
        ] {
            let mut entry = LogEntry::new(id, day.parse().unwrap());
            entry.rating = rating;
            book.insert(entry).unwrap();
        }
        book
    }

    #[test]
    fn test_select_all_by_default() {
        let book = sample_book();
        let entries = select_entries(&book, &options()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id.as_str(), "e1");
    }

    #[test]
    fn test_select_by_rating() {
        let book = sample_book();
        let mut opts = options();
        opts.ratings = vec!["positive".to_string()];

        let entries = select_entries(&book, &opts).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.as_str(), "e2");
    }

    #[test]
    fn test_excluded_inverts_selection() {
        let book = sample_book();
        let mut opts = options();
        opts.ratings = vec!["positive".to_string()];
        opts.excluded = true;

        let entries = select_entries(&book, &opts).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.id.as_str() != "e2"));
    }

    #[test]
    fn test_unknown_rating_is_an_error() {
        let book = sample_book();
        let mut opts = options();
        opts.ratings = vec!["meh".to_string()];
        assert!(select_entries(&book, &opts).is_err());
    }

    #[test]
    fn test_reverse_and_limit() {
        let book = sample_book();
        let entries = select_entries(&book, &options()).unwrap();

        let mut opts = options();
        opts.reverse = true;
        opts.limit = 2;

        let limited = apply_order_and_limit(entries, &opts);
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].id.as_str(), "e3");
        assert_eq!(limited[1].id.as_str(), "e2");
    }
}
