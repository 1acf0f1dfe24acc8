//! Public holiday and holiday set models.
//!
//! This module contains the [`Holiday`] record supplied by the holiday
//! calendar and the [`HolidaySet`] lookup built from it for duration
//! calculations.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A configured non-working day.
///
/// A recurring holiday applies every year on the same month and day,
/// regardless of the year stored in `date`.
///
/// # Example
///
/// ```
/// use leave_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let christmas = Holiday::recurring(NaiveDate::from_ymd_opt(2020, 12, 25).unwrap(), "Christmas Day");
/// assert!(christmas.matches(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Labour Day").
    #[serde(default)]
    pub name: String,
    /// Whether the holiday repeats every year on the same month/day.
    #[serde(default)]
    pub recurring: bool,
    /// The state the holiday applies to; `None` for nationwide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Inactive holidays are kept for reference but never excluded.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Holiday {
    /// Creates an active, nationwide, one-off holiday.
    pub fn on(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            recurring: false,
            state: None,
            active: true,
        }
    }

    /// Creates an active, nationwide holiday that repeats every year.
    pub fn recurring(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            recurring: true,
            ..Self::on(date, name)
        }
    }

    /// Returns true if this holiday falls on `date`.
    pub fn matches(&self, date: NaiveDate) -> bool {
        if !self.active {
            return false;
        }
        if self.recurring {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }

    /// Returns the date this holiday falls on in `year`, if any.
    ///
    /// A recurring 29 February has no occurrence in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        if self.recurring {
            NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
        } else if self.date.year() == year {
            Some(self.date)
        } else {
            None
        }
    }
}

/// A read-only lookup of non-working days.
///
/// Built once from a list of [`Holiday`]s and then queried per calendar
/// day. Inactive holidays are dropped on construction.
///
/// # Example
///
/// ```
/// use leave_engine::models::{Holiday, HolidaySet};
/// use chrono::NaiveDate;
///
/// let set = HolidaySet::from_holidays(&[
///     Holiday::on(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(), "Labour Day"),
/// ]);
/// assert!(set.contains(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
/// assert!(!set.contains(NaiveDate::from_ymd_opt(2027, 5, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    exact: HashSet<NaiveDate>,
    recurring: HashSet<(u32, u32)>,
}

impl HolidaySet {
    /// Returns a set with no holidays.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from holiday records.
    pub fn from_holidays(holidays: &[Holiday]) -> Self {
        holidays.iter().collect()
    }

    /// Adds a single holiday to the set.
    pub fn insert(&mut self, holiday: &Holiday) {
        if !holiday.active {
            return;
        }
        if holiday.recurring {
            self.recurring
                .insert((holiday.date.month(), holiday.date.day()));
        } else {
            self.exact.insert(holiday.date);
        }
    }

    /// Returns true if `date` is an exact or recurring holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.exact.contains(&date) || self.recurring.contains(&(date.month(), date.day()))
    }

    /// Counts the distinct holiday dates from `start` to `end` (inclusive)
    /// that satisfy `keep`.
    ///
    /// Only the configured entries are visited, once per year of the range
    /// for recurring ones, so a long range costs no more than its years.
    /// A date that is both an exact and a recurring holiday counts once.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::{Holiday, HolidaySet};
    /// use chrono::{Datelike, NaiveDate, Weekday};
    ///
    /// let set = HolidaySet::from_holidays(&[
    ///     Holiday::recurring(NaiveDate::from_ymd_opt(2000, 12, 25).unwrap(), "Christmas Day"),
    /// ]);
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
    /// assert_eq!(set.count_between(start, end, |_| true), 2);
    /// // 2025-12-25 is a Thursday, 2026-12-25 a Friday
    /// assert_eq!(set.count_between(start, end, |d| d.weekday() == Weekday::Fri), 1);
    /// ```
    pub fn count_between<F>(&self, start: NaiveDate, end: NaiveDate, keep: F) -> u32
    where
        F: Fn(NaiveDate) -> bool,
    {
        if end < start {
            return 0;
        }
        let in_range = |date: &NaiveDate| *date >= start && *date <= end;

        let exact = self
            .exact
            .iter()
            .filter(|date| in_range(*date) && keep(**date))
            .count();

        let mut recurring = 0usize;
        if !self.recurring.is_empty() {
            for year in start.year()..=end.year() {
                for (month, day) in &self.recurring {
                    let Some(date) = NaiveDate::from_ymd_opt(year, *month, *day) else {
                        continue;
                    };
                    if in_range(&date) && !self.exact.contains(&date) && keep(date) {
                        recurring += 1;
                    }
                }
            }
        }

        u32::try_from(exact + recurring).unwrap_or(u32::MAX)
    }

    /// Returns true if no holidays are configured.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.recurring.is_empty()
    }

    /// Returns the number of distinct holiday entries.
    pub fn len(&self) -> usize {
        self.exact.len() + self.recurring.len()
    }
}

impl<'a> FromIterator<&'a Holiday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = &'a Holiday>>(iter: I) -> Self {
        let mut set = HolidaySet::empty();
        for holiday in iter {
            set.insert(holiday);
        }
        set
    }
}
