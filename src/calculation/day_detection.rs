//! Day detection and date range iteration.
//!
//! This module provides utilities for determining the day type (weekday, Saturday, Sunday)
//! of a calendar date, counting the weekdays in a range and walking an inclusive date
//! range one day at a time.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for leave charging.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    get_day_type(date).is_weekend()
}

/// Counts the Monday-to-Friday days from `start` to `end`, both inclusive.
///
/// Whole weeks are counted arithmetically and only the last partial week is
/// walked, so the cost does not grow with the length of the range.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::count_weekdays;
/// use chrono::NaiveDate;
///
/// // Monday 2026-01-12 to Monday 2026-01-19
/// let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 19).unwrap();
/// assert_eq!(count_weekdays(start, end), 6);
/// assert_eq!(count_weekdays(end, start), 0);
/// ```
pub fn count_weekdays(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    let total = (end - start).num_days() + 1;
    let full_weeks = total / 7;
    let tail_start = start + TimeDelta::weeks(full_weeks);
    let tail = days_in_range(tail_start, end)
        .filter(|day| !is_weekend(*day))
        .count();
    let weekdays = full_weeks * 5 + i64::try_from(tail).unwrap_or(0);
    u32::try_from(weekdays).unwrap_or(u32::MAX)
}

/// Iterates every calendar day from `start` to `end`, both inclusive.
///
/// Yields nothing when `end` is before `start`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::days_in_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// assert_eq!(days_in_range(start, end).count(), 4);
/// assert_eq!(days_in_range(end, start).count(), 0);
/// ```
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}
