//! Property-based tests for leave duration counting.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use leave_engine::calculation::{compute_duration, days_in_range, is_weekend};
use leave_engine::models::{Holiday, HolidaySet, LeaveType};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn date_at(offset: u64) -> NaiveDate {
    base_date() + Days::new(offset)
}

fn any_leave_type() -> impl Strategy<Value = LeaveType> {
    prop::sample::select(LeaveType::ALL.to_vec())
}

fn working_day_type() -> impl Strategy<Value = LeaveType> {
    any_leave_type().prop_filter("working-day types only", |t| {
        !matches!(t, LeaveType::Maternity | LeaveType::Paternity)
    })
}

/// A start offset and a non-negative span, both in days.
fn valid_range() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0u64..1500, 0u64..120).prop_map(|(start, span)| (date_at(start), date_at(start + span)))
}

fn holiday_set(offsets: &[u64]) -> HolidaySet {
    let holidays: Vec<Holiday> = offsets
        .iter()
        .map(|offset| Holiday::on(date_at(*offset), "Generated"))
        .collect();
    HolidaySet::from_holidays(&holidays)
}

/// Picks a day in the range whose weekend status matches `weekend`.
fn pick_day(
    start: NaiveDate,
    end: NaiveDate,
    weekend: bool,
    pick: prop::sample::Index,
) -> Option<NaiveDate> {
    let candidates: Vec<NaiveDate> = days_in_range(start, end)
        .filter(|day| is_weekend(*day) == weekend)
        .collect();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[pick.index(candidates.len())])
    }
}

proptest! {
    #[test]
    fn prop_duration_is_deterministic(
        (start, end) in valid_range(),
        leave_type in any_leave_type(),
        offsets in prop::collection::vec(0u64..1620, 0..20),
    ) {
        let holidays = holiday_set(&offsets);
        let first = compute_duration(start, end, leave_type, &holidays, None);
        let second = compute_duration(start, end, leave_type, &holidays, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_positive_precomputed_always_wins(
        start in 0u64..1500,
        end in 0u64..1500,
        leave_type in any_leave_type(),
        precomputed in 1u32..400,
    ) {
        let days = compute_duration(
            date_at(start),
            date_at(end),
            leave_type,
            &HolidaySet::empty(),
            Some(precomputed),
        );
        prop_assert_eq!(days, precomputed);
    }

    #[test]
    fn prop_reversed_range_is_zero(
        end in 0u64..1500,
        gap in 1u64..120,
        leave_type in any_leave_type(),
    ) {
        let days = compute_duration(
            date_at(end + gap),
            date_at(end),
            leave_type,
            &HolidaySet::empty(),
            None,
        );
        prop_assert_eq!(days, 0);
    }

    #[test]
    fn prop_continuous_counts_every_calendar_day(
        (start, end) in valid_range(),
        offsets in prop::collection::vec(0u64..1620, 0..20),
    ) {
        let holidays = holiday_set(&offsets);
        let calendar = (end - start).num_days() as u32 + 1;
        prop_assert_eq!(
            compute_duration(start, end, LeaveType::Maternity, &holidays, None),
            calendar
        );
        prop_assert_eq!(
            compute_duration(start, end, LeaveType::Paternity, &holidays, None),
            calendar
        );
    }

    #[test]
    fn prop_working_days_bounded_by_calendar_days(
        (start, end) in valid_range(),
        leave_type in working_day_type(),
        offsets in prop::collection::vec(0u64..1620, 0..20),
    ) {
        let holidays = holiday_set(&offsets);
        let calendar = (end - start).num_days() as u32 + 1;
        let days = compute_duration(start, end, leave_type, &holidays, None);
        prop_assert!(days >= 1);
        prop_assert!(days <= calendar);
    }

    #[test]
    fn prop_working_days_match_day_by_day_count(
        start in 0u64..1500,
        span in 0u64..1200,
        leave_type in working_day_type(),
        offsets in prop::collection::vec(0u64..2700, 0..20),
        recurring in prop::collection::vec(0u64..366, 0..4),
    ) {
        let (start, end) = (date_at(start), date_at(start + span));
        let mut holidays: Vec<Holiday> = offsets
            .iter()
            .map(|offset| Holiday::on(date_at(*offset), "Generated"))
            .collect();
        holidays.extend(
            recurring
                .iter()
                .map(|offset| Holiday::recurring(date_at(*offset), "Recurring")),
        );
        let set = HolidaySet::from_holidays(&holidays);

        let walked = days_in_range(start, end)
            .filter(|day| !is_weekend(*day) && !set.contains(*day))
            .count() as u32;
        prop_assert_eq!(
            compute_duration(start, end, leave_type, &set, None),
            walked.max(1)
        );
    }

    #[test]
    fn prop_weekday_holiday_removes_exactly_one_day(
        (start, end) in valid_range(),
        leave_type in working_day_type(),
        pick in any::<prop::sample::Index>(),
    ) {
        let Some(holiday) = pick_day(start, end, false, pick) else {
            return Ok(());
        };

        let without = compute_duration(start, end, leave_type, &HolidaySet::empty(), None);
        if without <= 1 {
            return Ok(());
        }

        let with = compute_duration(
            start,
            end,
            leave_type,
            &HolidaySet::from_holidays(&[Holiday::on(holiday, "Generated")]),
            None,
        );
        prop_assert_eq!(with, without - 1);
    }

    #[test]
    fn prop_weekend_holiday_changes_nothing(
        (start, end) in valid_range(),
        leave_type in working_day_type(),
        pick in any::<prop::sample::Index>(),
    ) {
        let Some(holiday) = pick_day(start, end, true, pick) else {
            return Ok(());
        };

        let without = compute_duration(start, end, leave_type, &HolidaySet::empty(), None);
        let with = compute_duration(
            start,
            end,
            leave_type,
            &HolidaySet::from_holidays(&[Holiday::on(holiday, "Generated")]),
            None,
        );
        prop_assert_eq!(with, without);
    }
}
