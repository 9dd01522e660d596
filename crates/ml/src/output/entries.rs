//! Entry output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use moodlog_core_rs::models::LogEntry;
use moodlog_core_rs::LogBook;

use super::helpers::{format_date, format_rating, format_tag_labels, truncate_str};

/// Column width for the message in list output.
const MESSAGE_WIDTH: usize = 48;

/// Column width for tags in list output.
const TAGS_WIDTH: usize = 24;

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub entries: Vec<EntryOutput<'a>>,
    pub total: usize,
}

/// JSON output structure for a single entry.
#[derive(Serialize)]
pub struct EntryOutput<'a> {
    pub id: &'a str,
    pub date: String,
    pub rating: Option<&'a str>,
    pub message: &'a str,
    pub tags: Vec<&'a str>,
}

fn entry_output<'a>(entry: &'a LogEntry, book: &'a LogBook) -> EntryOutput<'a> {
    EntryOutput {
        id: entry.id.as_str(),
        date: entry.date.to_string(),
        rating: entry.rating.map(|r| r.as_str()),
        message: &entry.message,
        tags: entry
            .tag_ids()
            .map(|id| book.tag(id).map_or(id.as_str(), |t| t.label.as_str()))
            .collect(),
    }
}

/// Formats entries as JSON.
pub fn format_entries_json(
    entries: &[&LogEntry],
    book: &LogBook,
    total: usize,
) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        entries: entries.iter().map(|e| entry_output(e, book)).collect(),
        total,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats entries as a table.
pub fn format_entries_table(entries: &[&LogEntry], book: &LogBook, use_colors: bool) -> String {
    let mut out = String::new();

    if entries.is_empty() {
        out.push_str("No entries.\n");
        return out;
    }

    let header = format!(
        "{:<12} {:<10} {:<TAGS_WIDTH$} MESSAGE\n",
        "DATE", "RATING", "TAGS"
    );
    if use_colors {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }

    for entry in entries {
        let labels: Vec<String> = entry
            .tag_ids()
            .map(|id| {
                book.tag(id)
                    .map_or_else(|| id.to_string(), |t| t.label.clone())
            })
            .collect();

        out.push_str(&format!(
            "{:<12} {:<10} {:<TAGS_WIDTH$} {}\n",
            entry.date,
            format_rating(entry.rating, use_colors),
            format_tag_labels(&labels, TAGS_WIDTH),
            truncate_str(&entry.message, MESSAGE_WIDTH),
        ));
    }

    out
}

/// Formats a single entry as JSON (show command).
pub fn format_entry_details_json(
    entry: &LogEntry,
    book: &LogBook,
) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct EntryDetailsOutput<'a> {
        id: &'a str,
        date: String,
        rating: Option<&'a str>,
        message: &'a str,
        tags: Vec<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        created_at: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date_time: Option<String>,
    }

    let output = EntryDetailsOutput {
        id: entry.id.as_str(),
        date: entry.date.to_string(),
        rating: entry.rating.map(|r| r.as_str()),
        message: &entry.message,
        tags: entry
            .tag_ids()
            .map(|id| book.tag(id).map_or(id.as_str(), |t| t.label.as_str()))
            .collect(),
        created_at: entry.created_at.map(|dt| dt.to_rfc3339()),
        date_time: entry.date_time.map(|dt| dt.to_rfc3339()),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a single entry as a detail view (show command).
pub fn format_entry_details_table(entry: &LogEntry, book: &LogBook, use_colors: bool) -> String {
    let mut out = String::new();

    let date_line = format_date(entry.date, use_colors);
    if use_colors {
        out.push_str(&format!("{}\n", date_line.bold()));
    } else {
        out.push_str(&format!("{date_line}\n"));
    }

    out.push_str(&format!("Id: {}\n", entry.id));
    out.push_str(&format!(
        "Rating: {}\n",
        format_rating(entry.rating, use_colors)
    ));

    let labels: Vec<String> = entry
        .tag_ids()
        .map(|id| {
            book.tag(id)
                .map_or_else(|| id.to_string(), |t| t.label.clone())
        })
        .collect();
    if !labels.is_empty() {
        out.push_str(&format!("Tags: {}\n", format_tag_labels(&labels, usize::MAX)));
    }

    if let Some(created_at) = entry.created_at {
        out.push_str(&format!("Created: {}\n", created_at.format("%Y-%m-%d %H:%M")));
    }

    if entry.has_text() {
        out.push('\n');
        out.push_str(&entry.message);
        out.push('\n');
    }

    out
}
