//! Leave duration calculation.
//!
//! Converts a date range, a leave type and a holiday calendar into the number
//! of chargeable leave days. This is the single implementation used by every
//! caller that needs a duration estimate.
//!
//! # Rules
//!
//! 1. A server-computed duration greater than zero is returned unchanged.
//! 2. A range whose end is before its start is worth 0 days.
//! 3. Continuous leave types (maternity, paternity) charge every calendar day.
//!    All other types charge only weekdays that are not holidays.
//! 4. A valid range is always worth at least 1 day, even when every day in
//!    it is a weekend or holiday.
//!
//! Nothing here returns an error: unparseable dates resolve to 0 so callers
//! can always render a number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DurationRule, HolidaySet, LeaveRequestRecord, LeaveType};

use super::date_input::parse_date_input;
use super::day_detection::{count_weekdays, is_weekend};

/// Where a duration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationSource {
    /// A server-computed value was supplied and used as-is.
    Precomputed,
    /// The value was counted from the date range.
    Calculated,
    /// The end date is before the start date.
    InvalidRange,
    /// A date could not be parsed.
    InvalidDate,
}

/// A duration together with how it was counted.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{calculate_duration, DurationSource};
/// use leave_engine::models::{DurationRule, HolidaySet};
/// use chrono::NaiveDate;
///
/// // Monday 2026-01-12 to Monday 2026-01-19
/// let result = calculate_duration(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
///     DurationRule::WorkingDays,
///     &HolidaySet::empty(),
///     None,
/// );
/// assert_eq!(result.days, 6);
/// assert_eq!(result.weekend_days, 2);
/// assert_eq!(result.source, DurationSource::Calculated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// Chargeable days.
    pub days: u32,
    /// Where `days` came from.
    pub source: DurationSource,
    /// The counting rule for the leave type.
    pub rule: DurationRule,
    /// Calendar days in the inclusive range (0 unless calculated).
    pub calendar_days: u32,
    /// Weekend days excluded from the count.
    pub weekend_days: u32,
    /// Weekday holidays excluded from the count.
    pub holiday_days: u32,
    /// Whether the one-day minimum raised the count.
    pub floor_applied: bool,
}

impl DurationBreakdown {
    fn uncounted(days: u32, source: DurationSource, rule: DurationRule) -> Self {
        Self {
            days,
            source,
            rule,
            calendar_days: 0,
            weekend_days: 0,
            holiday_days: 0,
            floor_applied: false,
        }
    }
}

/// Calculates the chargeable days for a date range under a counting rule.
///
/// # Arguments
///
/// * `start` - First day of leave
/// * `end` - Last day of leave (inclusive)
/// * `rule` - How days are charged for the leave type
/// * `holidays` - Non-working days; only consulted for [`DurationRule::WorkingDays`]
/// * `precomputed_days` - A server-computed duration, authoritative when greater than zero
pub fn calculate_duration(
    start: NaiveDate,
    end: NaiveDate,
    rule: DurationRule,
    holidays: &HolidaySet,
    precomputed_days: Option<u32>,
) -> DurationBreakdown {
    if let Some(days) = precomputed_days.filter(|days| *days > 0) {
        return DurationBreakdown::uncounted(days, DurationSource::Precomputed, rule);
    }

    if end < start {
        return DurationBreakdown::uncounted(0, DurationSource::InvalidRange, rule);
    }

    let calendar_days = u32::try_from((end - start).num_days() + 1).unwrap_or(u32::MAX);

    let (counted, weekend_days, holiday_days) = match rule {
        DurationRule::Continuous => (calendar_days, 0, 0),
        DurationRule::WorkingDays => {
            let weekdays = count_weekdays(start, end);
            // Holidays on a weekend are already excluded as weekend days.
            let holiday_days = holidays.count_between(start, end, |day| !is_weekend(day));
            (
                weekdays.saturating_sub(holiday_days),
                calendar_days.saturating_sub(weekdays),
                holiday_days,
            )
        }
    };

    DurationBreakdown {
        days: counted.max(1),
        source: DurationSource::Calculated,
        rule,
        calendar_days,
        weekend_days,
        holiday_days,
        floor_applied: counted == 0,
    }
}

/// Computes the chargeable days for a leave type over a date range.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::compute_duration;
/// use leave_engine::models::{HolidaySet, LeaveType};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
/// let holidays = HolidaySet::empty();
///
/// assert_eq!(compute_duration(start, end, LeaveType::Maternity, &holidays, None), 14);
/// assert_eq!(compute_duration(start, end, LeaveType::Annual, &holidays, None), 10);
/// assert_eq!(compute_duration(start, end, LeaveType::Annual, &holidays, Some(7)), 7);
/// assert_eq!(compute_duration(end, start, LeaveType::Annual, &holidays, None), 0);
/// ```
pub fn compute_duration(
    start: NaiveDate,
    end: NaiveDate,
    leave_type: LeaveType,
    holidays: &HolidaySet,
    precomputed_days: Option<u32>,
) -> u32 {
    calculate_duration(
        start,
        end,
        leave_type.duration_rule(),
        holidays,
        precomputed_days,
    )
    .days
}

/// Calculates a duration from raw wire values.
///
/// Unknown leave type tags are charged as working days. A missing holiday
/// calendar is treated as empty.
pub fn calculate_duration_from_strings(
    start: &str,
    end: &str,
    leave_type: &str,
    holidays: Option<&HolidaySet>,
    precomputed_days: Option<u32>,
) -> DurationBreakdown {
    let rule = DurationRule::for_tag(leave_type);

    if let Some(days) = precomputed_days.filter(|days| *days > 0) {
        return DurationBreakdown::uncounted(days, DurationSource::Precomputed, rule);
    }

    let (Some(start), Some(end)) = (parse_date_input(start), parse_date_input(end)) else {
        return DurationBreakdown::uncounted(0, DurationSource::InvalidDate, rule);
    };

    let empty = HolidaySet::empty();
    calculate_duration(start, end, rule, holidays.unwrap_or(&empty), None)
}

/// Computes a duration from raw wire values; see [`calculate_duration_from_strings`].
///
/// # Example
///
/// ```
/// use leave_engine::calculation::compute_duration_from_strings;
///
/// assert_eq!(compute_duration_from_strings("2026-01-17", "2026-01-17", "annual", None, None), 1);
/// assert_eq!(compute_duration_from_strings("garbage", "2026-01-17", "annual", None, None), 0);
/// ```
pub fn compute_duration_from_strings(
    start: &str,
    end: &str,
    leave_type: &str,
    holidays: Option<&HolidaySet>,
    precomputed_days: Option<u32>,
) -> u32 {
    calculate_duration_from_strings(start, end, leave_type, holidays, precomputed_days).days
}

/// Calculates the duration of a leave request record.
pub fn calculate_record_duration(
    record: &LeaveRequestRecord,
    holidays: Option<&HolidaySet>,
) -> DurationBreakdown {
    calculate_duration_from_strings(
        &record.start_date,
        &record.end_date,
        &record.leave_type,
        holidays,
        record.duration_days,
    )
}

/// Computes the display duration of a leave request record.
pub fn compute_duration_for_record(
    record: &LeaveRequestRecord,
    holidays: Option<&HolidaySet>,
) -> u32 {
    calculate_record_duration(record, holidays).days
}
