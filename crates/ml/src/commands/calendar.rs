//! Calendar command implementation.
//!
//! Renders a month of entries as a grid, dimming the days the active
//! filters exclude.

use std::path::Path;

use chrono::{Datelike, Local, NaiveDate, Weekday};

use moodlog_core_rs::calendar::month_view;
use moodlog_core_rs::filter::{FilterContext, FilterEvaluator};
use moodlog_core_rs::import::load_log_book;

use super::{CommandContext, CommandError, Result};
use crate::output::{format_month_json, format_month_table};

/// Options for the calendar command.
#[derive(Debug)]
pub struct CalendarOptions {
    /// Month to show as YYYY-MM; current month when absent.
    pub month: Option<String>,
    /// Free-text filter.
    pub text: Option<String>,
    /// Rating filters.
    pub ratings: Vec<String>,
    /// Tag filters (labels or ids).
    pub tags: Vec<String>,
    /// First day of the week.
    pub week_start: Weekday,
}

/// Executes the calendar command.
///
/// # Errors
///
/// Returns an error if the export cannot be loaded, the month does not
/// parse, or a filter value does not resolve.
pub fn execute(ctx: &CommandContext, opts: &CalendarOptions, logs_path: &Path) -> Result<()> {
    let book = load_log_book(logs_path)?;

    if ctx.verbose {
        eprintln!("Loaded {} entries from {}", book.len(), logs_path.display());
    }

    let today = Local::now().date_naive();
    let (year, month) = resolve_month(opts.month.as_deref(), today)?;

    let context = FilterContext::new(&book.tags);
    let spec = context.build_spec(
        opts.text.as_deref().unwrap_or(""),
        &opts.ratings,
        &opts.tags,
    )?;
    let outcome = FilterEvaluator::new(&spec).evaluate(&book);

    let view = month_view(&book, &outcome, year, month, opts.week_start, today)
        .ok_or_else(|| CommandError::Config(format!("invalid month: {year}-{month:02}")))?;

    if ctx.json_output {
        let output = format_month_json(&view, outcome.is_filtering, outcome.filter_count)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_month_table(&view, opts.week_start, outcome.filter_count, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Parses a YYYY-MM month argument, defaulting to today's month.
fn resolve_month(month: Option<&str>, today: NaiveDate) -> Result<(i32, u32)> {
    let Some(raw) = month else {
        return Ok((today.year(), today.month()));
    };

    let parsed = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .map_err(|_| CommandError::Config(format!("invalid month '{raw}' (expected YYYY-MM)")))?;
    Ok((parsed.year(), parsed.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_resolve_month_default_is_today() {
        let today = date("2024-03-10");
        assert_eq!(resolve_month(None, today).unwrap(), (2024, 3));
    }

    #[test]
    fn test_resolve_month_explicit() {
        let today = date("2024-03-10");
        assert_eq!(resolve_month(Some("2023-12"), today).unwrap(), (2023, 12));
    }

    #[test]
    fn test_resolve_month_invalid() {
        let today = date("2024-03-10");
        assert!(resolve_month(Some("March"), today).is_err());
        assert!(resolve_month(Some("2024-13"), today).is_err());
    }
}
