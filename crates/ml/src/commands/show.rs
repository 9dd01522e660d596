//! Show command implementation.
//!
//! Shows a single entry in full, looked up by date or by id.

use std::path::Path;

use chrono::NaiveDate;

use moodlog_core_rs::import::load_log_book;
use moodlog_core_rs::models::LogEntry;
use moodlog_core_rs::LogBook;

use super::{CommandContext, CommandError, Result};
use crate::output::{format_entry_details_json, format_entry_details_table};

/// Options for the show command.
#[derive(Debug)]
pub struct ShowOptions {
    /// Entry date (YYYY-MM-DD) or entry id.
    pub entry: String,
}

/// Executes the show command.
///
/// # Errors
///
/// Returns [`CommandError::EntryNotFound`] if nothing matches the date or id.
pub fn execute(ctx: &CommandContext, opts: &ShowOptions, logs_path: &Path) -> Result<()> {
    let book = load_log_book(logs_path)?;

    let entry = find_entry(&book, &opts.entry)
        .ok_or_else(|| CommandError::EntryNotFound(opts.entry.clone()))?;

    if ctx.json_output {
        let output = format_entry_details_json(entry, &book)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_entry_details_table(entry, &book, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Looks an entry up by date first, then by id.
fn find_entry<'a>(book: &'a LogBook, key: &str) -> Option<&'a LogEntry> {
    if let Ok(date) = key.parse::<NaiveDate>() {
        return book.entry_for_date(date);
    }
    book.entry(&key.into())
}
