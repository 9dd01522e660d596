//! Tag output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use moodlog_core_rs::LogBook;

/// JSON output structure for the tags command.
#[derive(Serialize)]
pub struct TagsOutput<'a> {
    pub tags: Vec<TagOutput<'a>>,
}

/// JSON output structure for a single tag.
#[derive(Serialize)]
pub struct TagOutput<'a> {
    pub id: &'a str,
    pub label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
    pub entries: usize,
}

/// Counts how many entries carry the given tag.
fn usage_count(book: &LogBook, tag_id: &moodlog_core_rs::models::TagId) -> usize {
    book.iter()
        .filter(|e| e.tag_ids().any(|id| id == tag_id))
        .count()
}

/// Formats tags with usage counts as JSON.
pub fn format_tags_json(book: &LogBook) -> Result<String, serde_json::Error> {
    let tags = book
        .tags
        .iter()
        .map(|tag| TagOutput {
            id: tag.id.as_str(),
            label: &tag.label,
            color: tag.color.as_deref(),
            entries: usage_count(book, &tag.id),
        })
        .collect();

    serde_json::to_string_pretty(&TagsOutput { tags })
}

/// Formats tags with usage counts as a table.
pub fn format_tags_table(book: &LogBook, use_colors: bool) -> String {
    let mut out = String::new();

    if book.tags.is_empty() {
        out.push_str("No tags.\n");
        return out;
    }

    let header = format!("{:<20} {:<10} ENTRIES\n", "LABEL", "COLOR");
    if use_colors {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }

    for tag in &book.tags {
        out.push_str(&format!(
            "{:<20} {:<10} {}\n",
            tag.label,
            tag.color.as_deref().unwrap_or("-"),
            usage_count(book, &tag.id),
        ));
    }

    out
}
