//! Calendar output formatting.

use chrono::Weekday;
use owo_colors::OwoColorize;
use serde::Serialize;

use moodlog_core_rs::calendar::{CalendarDay, MonthView};
use moodlog_core_rs::models::Rating;

/// Width of one day cell in the grid.
const CELL_WIDTH: usize = 4;

/// Month names for the header line.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// JSON output structure for a month.
#[derive(Serialize)]
pub struct MonthOutput {
    pub year: i32,
    pub month: u32,
    #[serde(rename = "isFiltering")]
    pub is_filtering: bool,
    #[serde(rename = "filterCount")]
    pub filter_count: usize,
    pub weeks: Vec<Vec<Option<DayOutput>>>,
}

/// JSON output structure for a single day cell.
#[derive(Serialize)]
pub struct DayOutput {
    pub date: String,
    pub day: u32,
    pub rating: Option<&'static str>,
    #[serde(rename = "hasText")]
    pub has_text: bool,
    #[serde(rename = "hasContent")]
    pub has_content: bool,
    #[serde(rename = "isToday")]
    pub is_today: bool,
    #[serde(rename = "isFuture")]
    pub is_future: bool,
    #[serde(rename = "isFiltered")]
    pub is_filtered: bool,
}

/// Formats a month view as JSON.
pub fn format_month_json(
    view: &MonthView,
    is_filtering: bool,
    filter_count: usize,
) -> Result<String, serde_json::Error> {
    let weeks = view
        .weeks
        .iter()
        .map(|week| {
            week.days
                .iter()
                .map(|slot| {
                    slot.as_ref().map(|day| DayOutput {
                        date: day.date.to_string(),
                        day: day.day_of_month,
                        rating: day.rating.map(|r| r.as_str()),
                        has_text: day.has_text,
                        has_content: day.has_content,
                        is_today: day.is_today,
                        is_future: day.is_future,
                        is_filtered: day.is_filtered,
                    })
                })
                .collect()
        })
        .collect();

    let output = MonthOutput {
        year: view.year,
        month: view.month,
        is_filtering,
        filter_count,
        weeks,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a month view as a grid.
///
/// Days with a rated entry carry the rating's color; filtered-out and
/// future days are dimmed; today is highlighted. A trailing `*` marks days
/// with a journal message.
pub fn format_month_table(
    view: &MonthView,
    week_start: Weekday,
    filter_count: usize,
    use_colors: bool,
) -> String {
    let mut out = String::new();

    let month_name = MONTH_NAMES[(view.month - 1) as usize];
    let mut header = format!("{} {}", month_name, view.year);
    if filter_count > 0 {
        header.push_str(&format!(
            " ({filter_count} filter{})",
            if filter_count == 1 { "" } else { "s" }
        ));
    }
    if use_colors {
        out.push_str(&format!("{}\n", header.bold()));
    } else {
        out.push_str(&format!("{header}\n"));
    }

    out.push_str(&weekday_header(week_start));
    out.push('\n');

    for week in &view.weeks {
        for slot in &week.days {
            match slot {
                Some(day) => out.push_str(&format_cell(day, use_colors)),
                None => out.push_str(&" ".repeat(CELL_WIDTH)),
            }
        }
        out.push('\n');
    }

    out
}

/// The weekday column headers, starting at `week_start`.
fn weekday_header(week_start: Weekday) -> String {
    let mut out = String::new();
    let mut day = week_start;
    for _ in 0..7 {
        let label = match day {
            Weekday::Mon => "Mo",
            Weekday::Tue => "Tu",
            Weekday::Wed => "We",
            Weekday::Thu => "Th",
            Weekday::Fri => "Fr",
            Weekday::Sat => "Sa",
            Weekday::Sun => "Su",
        };
        out.push_str(&format!("{label:>width$}", width = CELL_WIDTH - 1));
        out.push(' ');
        day = day.succ();
    }
    out
}

/// Formats one day cell, padded to [`CELL_WIDTH`].
fn format_cell(day: &CalendarDay, use_colors: bool) -> String {
    let marker = if day.has_text { "*" } else { " " };
    let cell = format!("{:>width$}{marker}", day.day_of_month, width = CELL_WIDTH - 1);

    if !use_colors {
        return cell;
    }

    // Dimming wins over the rating color so active filters read at a glance.
    if day.is_filtered || day.is_future || (day.is_filtering && !day.has_content) {
        return cell.dimmed().to_string();
    }

    let colored = match day.rating {
        Some(Rating::Positive) => cell.green().to_string(),
        Some(Rating::Neutral) => cell.yellow().to_string(),
        Some(Rating::Negative) => cell.red().to_string(),
        None => cell,
    };

    if day.is_today {
        colored.bold().to_string()
    } else {
        colored
    }
}
