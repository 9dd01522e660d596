//! Month view model for the calendar.
//!
//! Pure data derivation: a [`MonthView`] is computed from a [`LogBook`] and
//! a [`FilterOutcome`], and carries everything a renderer needs per day —
//! whether the day is today or in the future, whether its entry has
//! content, and whether the active filters exclude it. No rendering
//! happens here.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::filter::FilterOutcome;
use crate::models::Rating;
use crate::LogBook;

/// One renderable day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    /// The calendar date of this cell.
    pub date: NaiveDate,

    /// Day of month, 1-based; the number shown in the cell.
    pub day_of_month: u32,

    /// True if this is the current day.
    pub is_today: bool,

    /// True if the day lies after today. Future days are shown but not
    /// interactive.
    pub is_future: bool,

    /// True if the day's entry has a non-empty message.
    pub has_text: bool,

    /// True if the day's entry has a message or a rating.
    pub has_content: bool,

    /// The entry's rating, if the day has a rated entry.
    pub rating: Option<Rating>,

    /// True if the active filters exclude this day's entry. Always false
    /// for days without an entry.
    pub is_filtered: bool,

    /// True if any filter is active. Carried per day so a cell renderer
    /// needs no extra context to decide between dimmed/highlighted/plain.
    pub is_filtering: bool,
}

/// One calendar row. Rows at the start and end of a month are padded with
/// `None` so day cells stay aligned to their weekday column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWeek {
    /// Seven slots, one per weekday column starting at the configured
    /// first day of the week.
    pub days: Vec<Option<CalendarDay>>,
}

/// A whole month of weeks, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,

    /// Month number, 1-based.
    pub month: u32,

    /// The month's rows, first to last.
    pub weeks: Vec<CalendarWeek>,
}

impl MonthView {
    /// Iterates the real (non-padding) days of the month in order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter().filter_map(Option::as_ref))
    }
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_first.signed_duration_since(first).num_days() as u32)
}

/// Column index of `weekday` in a week starting at `week_start`.
fn column_of(weekday: Weekday, week_start: Weekday) -> usize {
    (weekday.num_days_from_monday() + 7 - week_start.num_days_from_monday()) as usize % 7
}

/// Builds one day cell from the book and the current filter outcome.
fn build_day(
    book: &LogBook,
    outcome: &FilterOutcome,
    date: NaiveDate,
    today: NaiveDate,
) -> CalendarDay {
    let entry = book.entry_for_date(date);
    CalendarDay {
        date,
        day_of_month: date.day(),
        is_today: date == today,
        is_future: date > today,
        has_text: entry.is_some_and(|e| e.has_text()),
        has_content: entry.is_some_and(|e| e.has_content()),
        rating: entry.and_then(|e| e.rating),
        is_filtered: entry.is_some_and(|e| outcome.is_excluded(&e.id)),
        is_filtering: outcome.is_filtering,
    }
}

/// Computes the month view for `year`/`month`.
///
/// The first and last weeks are padded with `None` cells so every week has
/// exactly seven slots aligned to `week_start`. Returns `None` for an
/// out-of-range year/month.
pub fn month_view(
    book: &LogBook,
    outcome: &FilterOutcome,
    year: i32,
    month: u32,
    week_start: Weekday,
    today: NaiveDate,
) -> Option<MonthView> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day_count = days_in_month(year, month)?;

    let mut weeks = Vec::new();
    let mut current: Vec<Option<CalendarDay>> = vec![None; column_of(first.weekday(), week_start)];

    let mut date = first;
    for _ in 0..day_count {
        current.push(Some(build_day(book, outcome, date, today)));
        if current.len() == 7 {
            weeks.push(CalendarWeek {
                days: std::mem::take(&mut current),
            });
        }
        date = date.checked_add_days(Days::new(1))?;
    }

    if !current.is_empty() {
        current.resize(7, None);
        weeks.push(CalendarWeek { days: current });
    }

    Some(MonthView { year, month, weeks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterEvaluator, FilterSpec};
    use crate::models::LogEntry;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn march_2024() -> LogBook {
        let mut book = LogBook::new();

        let mut first = LogEntry::new("e1", date("2024-03-01"));
        first.message = "spring".to_string();
        first.rating = Some(Rating::Positive);
        book.insert(first).unwrap();

        let mut mid = LogEntry::new("e2", date("2024-03-15"));
        mid.rating = Some(Rating::Negative);
        book.insert(mid).unwrap();

        book
    }

    #[test]
    fn test_month_shape_and_padding() {
        let book = march_2024();
        let outcome = FilterOutcome::default();

        // March 2024 starts on a Friday and ends on a Sunday.
        let view = month_view(
            &book,
            &outcome,
            2024,
            3,
            Weekday::Mon,
            date("2024-03-10"),
        )
        .unwrap();

        assert_eq!(view.weeks.len(), 5);
        assert!(view.weeks.iter().all(|w| w.days.len() == 7));
        assert_eq!(view.days().count(), 31);

        let first_week = &view.weeks[0];
        assert!(first_week.days[..4].iter().all(Option::is_none));
        assert_eq!(first_week.days[4].as_ref().unwrap().day_of_month, 1);

        let last_week = view.weeks.last().unwrap();
        assert_eq!(last_week.days[6].as_ref().unwrap().day_of_month, 31);
    }

    #[test]
    fn test_week_start_shifts_columns() {
        let book = LogBook::new();
        let outcome = FilterOutcome::default();

        let view = month_view(
            &book,
            &outcome,
            2024,
            3,
            Weekday::Sun,
            date("2024-03-10"),
        )
        .unwrap();

        // With Sunday-first weeks, Friday March 1st sits in column 5.
        let first_week = &view.weeks[0];
        assert!(first_week.days[..5].iter().all(Option::is_none));
        assert_eq!(first_week.days[5].as_ref().unwrap().day_of_month, 1);
        assert_eq!(view.weeks.len(), 6);
    }

    #[test]
    fn test_today_and_future_flags() {
        let book = LogBook::new();
        let outcome = FilterOutcome::default();
        let today = date("2024-03-10");

        let view = month_view(&book, &outcome, 2024, 3, Weekday::Mon, today).unwrap();

        for day in view.days() {
            assert_eq!(day.is_today, day.date == today);
            assert_eq!(day.is_future, day.date > today);
        }
        assert_eq!(view.days().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_entry_content_reaches_cells() {
        let book = march_2024();
        let outcome = FilterOutcome::default();

        let view = month_view(
            &book,
            &outcome,
            2024,
            3,
            Weekday::Mon,
            date("2024-03-31"),
        )
        .unwrap();

        let first = view.days().find(|d| d.day_of_month == 1).unwrap();
        assert!(first.has_text);
        assert!(first.has_content);
        assert_eq!(first.rating, Some(Rating::Positive));

        let mid = view.days().find(|d| d.day_of_month == 15).unwrap();
        assert!(!mid.has_text);
        assert!(mid.has_content);

        let blank = view.days().find(|d| d.day_of_month == 2).unwrap();
        assert!(!blank.has_content);
        assert!(blank.rating.is_none());
    }

    #[test]
    fn test_filter_outcome_dims_excluded_days() {
        let book = march_2024();
        let mut spec = FilterSpec::default();
        spec.ratings.push(Rating::Positive);
        let outcome = FilterEvaluator::new(&spec).evaluate(&book);

        let view = month_view(
            &book,
            &outcome,
            2024,
            3,
            Weekday::Mon,
            date("2024-03-31"),
        )
        .unwrap();

        let first = view.days().find(|d| d.day_of_month == 1).unwrap();
        assert!(!first.is_filtered);
        assert!(first.is_filtering);

        let mid = view.days().find(|d| d.day_of_month == 15).unwrap();
        assert!(mid.is_filtered);

        // Days without an entry are never marked filtered.
        let blank = view.days().find(|d| d.day_of_month == 2).unwrap();
        assert!(!blank.is_filtered);
        assert!(blank.is_filtering);
    }

    #[test]
    fn test_invalid_month_is_none() {
        let book = LogBook::new();
        let outcome = FilterOutcome::default();
        assert!(month_view(&book, &outcome, 2024, 13, Weekday::Mon, date("2024-03-10")).is_none());
    }
}
