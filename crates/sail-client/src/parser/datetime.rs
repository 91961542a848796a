//! Session date and time range, plus the Hebrew day of week.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use scraper::ElementRef;

use super::fields::first_text;
use super::selectors::DATE_LABEL;

/// Day abbreviations indexed from Sunday.
pub const HEBREW_DAYS: [&str; 7] = ["א׳", "ב׳", "ג׳", "ד׳", "ה׳", "ו׳", "ש׳"];

static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only.
    Regex::new(
        r"([0-9]{2}/[0-9]{2}/[0-9]{4})\s+([0-9]{2}:[0-9]{2})\s*-\s*([0-9]{2}:[0-9]{2})",
    )
    .unwrap_or_else(|e| panic!("invalid built-in date pattern: {e}"))
});

/// Date and time range of one session, all empty when unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTime {
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
}

/// Read the date label of a box and split it into date, start and end.
pub fn parse_date_time(element: ElementRef<'_>) -> DateTime {
    parse_date_range(&first_text(element, &DATE_LABEL))
}

/// Match `DD/MM/YYYY HH:MM - HH:MM` anywhere in `label`.
///
/// Captures are returned verbatim.
pub fn parse_date_range(label: &str) -> DateTime {
    let label = super::fields::collapse_whitespace(label);
    match DATE_RANGE.captures(&label) {
        Some(caps) => DateTime {
            date: caps[1].to_string(),
            start_time: caps[2].to_string(),
            end_time: caps[3].to_string(),
        },
        None => {
            if !label.is_empty() {
                tracing::debug!(label = %label, "Date label does not match the expected range format");
            }
            DateTime::default()
        }
    }
}

/// Hebrew day abbreviation for a `DD/MM/YYYY` date, or empty.
///
/// Anything that is not a real calendar date yields empty.
pub fn day_of_week(date: &str) -> &'static str {
    let parts: Vec<&str> = date.trim().split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return "";
    };

    let parsed = match (day.parse::<u32>(), month.parse::<u32>(), year.parse::<i32>()) {
        (Ok(d), Ok(m), Ok(y)) => NaiveDate::from_ymd_opt(y, m, d),
        _ => None,
    };

    match parsed {
        Some(date) => HEBREW_DAYS[date.weekday().num_days_from_sunday() as usize],
        None => "",
    }
}
