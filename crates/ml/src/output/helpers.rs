//! Common helper functions for output formatting.

use chrono::{Local, NaiveDate};
use moodlog_core_rs::models::Rating;
use owo_colors::OwoColorize;

/// Truncates a string to a maximum length.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}

/// Formats a rating for display.
pub fn format_rating(rating: Option<Rating>, use_colors: bool) -> String {
    let Some(rating) = rating else {
        return "-".to_string();
    };

    let label = rating.as_str();
    if use_colors {
        match rating {
            Rating::Positive => label.green().to_string(),
            Rating::Neutral => label.yellow().to_string(),
            Rating::Negative => label.red().to_string(),
        }
    } else {
        label.to_string()
    }
}

/// Formats an entry date for display, relative to today where it reads
/// better than the raw date.
pub fn format_date(date: NaiveDate, use_colors: bool) -> String {
    let today = Local::now().date_naive();
    let yesterday = today - chrono::Duration::days(1);

    let display = if date == today {
        "Today".to_string()
    } else if date == yesterday {
        "Yesterday".to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    };

    if use_colors && date == today {
        display.yellow().to_string()
    } else {
        display
    }
}

/// Formats tag labels for display.
pub fn format_tag_labels(labels: &[String], max_len: usize) -> String {
    if labels.is_empty() {
        return String::new();
    }

    let formatted: Vec<String> = labels.iter().map(|l| format!("#{l}")).collect();
    let joined = formatted.join(" ");

    truncate_str(&joined, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("this is long", 10), "this is...");
    }

    #[test]
    fn test_format_rating_no_colors() {
        assert_eq!(format_rating(Some(Rating::Positive), false), "positive");
        assert_eq!(format_rating(Some(Rating::Negative), false), "negative");
        assert_eq!(format_rating(None, false), "-");
    }

    #[test]
    fn test_format_tag_labels() {
        assert_eq!(format_tag_labels(&[], 15), "");
        assert_eq!(format_tag_labels(&["work".to_string()], 15), "#work");
        assert_eq!(
            format_tag_labels(&["a".to_string(), "b".to_string()], 15),
            "#a #b"
        );
    }

    #[test]
    fn test_format_date_past() {
        let date = "2001-02-03".parse().unwrap();
        assert_eq!(format_date(date, false), "2001-02-03");
    }
}
