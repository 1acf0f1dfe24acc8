//! Lenient parsing of date inputs.
//!
//! Leave dates arrive as ISO-8601 strings that may or may not carry a time
//! of day. Only the calendar date matters, so any time portion is dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses an ISO-8601 date or date-time into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times (the date is taken as written,
/// in the value's own offset) and date-times without an offset. Returns
/// `None` for anything else.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::parse_date_input;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 3, 2);
/// assert_eq!(parse_date_input("2026-03-02"), expected);
/// assert_eq!(parse_date_input("2026-03-02T23:30:00+08:00"), expected);
/// assert_eq!(parse_date_input("2026-03-02T09:00:00"), expected);
/// assert_eq!(parse_date_input("next tuesday"), None);
/// ```
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|datetime| datetime.date())
}
