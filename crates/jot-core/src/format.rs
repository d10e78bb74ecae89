//! Presentation helpers for the notes sidebar.

use chrono::{DateTime, TimeZone};
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;

/// Build a one-line preview of note content.
///
/// Whitespace runs collapse to single spaces. Content longer than
/// `max_chars` characters is cut there, trailing whitespace dropped, and
/// `...` appended. Empty content gets a fixed placeholder.
#[must_use]
pub fn note_preview(content: &str, max_chars: usize) -> String {
    if content.is_empty() {
        return "No content".to_string();
    }
    let clean = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if clean.chars().count() <= max_chars {
        return clean;
    }
    let cut: String = clean.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Format a note timestamp relative to `now`, the way the sidebar shows it.
///
/// Under a day old renders as a clock time, one day as "Yesterday", under a
/// week as the weekday name, under a year as month and day, and anything
/// older with the year appended.
#[must_use]
pub fn date_label<Tz: TimeZone>(timestamp: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let elapsed = now.clone() - timestamp.clone();
    let days = elapsed.num_seconds().div_euclid(SECONDS_PER_DAY);

    if days == 0 {
        timestamp.format("%I:%M %p").to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        timestamp.format("%A").to_string()
    } else if days < 365 {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
    }

    #[test]
    fn preview_placeholder_for_empty_content() {
        assert_eq!(note_preview("", 80), "No content");
    }

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(
            note_preview("Hello\n\nworld   again\t!", 80),
            "Hello world again !"
        );
    }

    #[test]
    fn preview_truncates_long_content() {
        let content = "word ".repeat(40);
        let preview = note_preview(&content, 80);
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 83);
        assert!(!preview.contains(" ..."));
    }

    #[test]
    fn preview_keeps_content_at_the_limit() {
        let content = "a".repeat(80);
        assert_eq!(note_preview(&content, 80), content);
    }

    // 2024-03-15 was a Friday.
    #[test]
    fn same_day_renders_as_clock_time() {
        let now = at(2024, 3, 15, 18, 30);
        assert_eq!(date_label(&at(2024, 3, 15, 15, 42), &now), "03:42 PM");
        assert_eq!(date_label(&at(2024, 3, 15, 0, 7), &now), "12:07 AM");
    }

    #[test]
    fn one_day_ago_renders_as_yesterday() {
        let now = at(2024, 3, 15, 18, 30);
        assert_eq!(date_label(&at(2024, 3, 14, 10, 0), &now), "Yesterday");
    }

    #[test]
    fn under_a_week_renders_as_weekday() {
        let now = at(2024, 3, 15, 18, 30);
        assert_eq!(date_label(&at(2024, 3, 12, 12, 0), &now), "Tuesday");
        // six full days ago still names the weekday
        assert_eq!(date_label(&at(2024, 3, 9, 16, 30), &now), "Saturday");
    }

    #[test]
    fn a_week_or_more_renders_month_and_day() {
        let now = at(2024, 3, 15, 18, 30);
        assert_eq!(date_label(&at(2024, 3, 8, 17, 30), &now), "Mar 8");
        assert_eq!(date_label(&at(2024, 2, 14, 9, 0), &now), "Feb 14");
    }

    #[test]
    fn a_year_or_more_appends_the_year() {
        let now = at(2024, 3, 15, 18, 30);
        assert_eq!(date_label(&at(2023, 2, 8, 9, 0), &now), "Feb 8, 2023");
    }
}
