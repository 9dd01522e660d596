//! Output formatting utilities for the ml CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`calendar`] - Month grid output (calendar command)
//! - [`entries`] - Entry output formatting (list, show)
//! - [`tags`] - Tag output formatting (tags command)
//! - [`helpers`] - Common formatting utilities (truncation, ratings, dates)

mod calendar;
mod entries;
pub mod helpers;
mod tags;

// Re-export all public functions from submodules

// Calendar
pub use calendar::{format_month_json, format_month_table};

// Entries
pub use entries::{
    format_entries_json, format_entries_table, format_entry_details_json,
    format_entry_details_table,
};

// Tags
pub use tags::{format_tags_json, format_tags_table};
