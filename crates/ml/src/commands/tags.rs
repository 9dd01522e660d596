//! Tags command implementation.
//!
//! Lists the tags from the export's settings with per-tag usage counts.

use std::path::Path;

use moodlog_core_rs::import::load_log_book;

use super::{CommandContext, Result};
use crate::output::{format_tags_json, format_tags_table};

/// Executes the tags command.
///
/// # Errors
///
/// Returns an error if the export cannot be loaded.
pub fn execute(ctx: &CommandContext, logs_path: &Path) -> Result<()> {
    let book = load_log_book(logs_path)?;

    if ctx.json_output {
        let output = format_tags_json(&book)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_tags_table(&book, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
