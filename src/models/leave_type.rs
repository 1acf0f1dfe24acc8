//! Leave type model.
//!
//! Defines the [`LeaveType`] tag carried on every leave request and the
//! [`DurationRule`] that decides how its days are charged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LeaveError;

/// The category of a leave request.
///
/// Serialized as the lowercase tag used on the wire (e.g. `"annual"`).
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveType;
///
/// let leave_type: LeaveType = "maternity".parse().unwrap();
/// assert_eq!(leave_type, LeaveType::Maternity);
/// assert_eq!(leave_type.to_string(), "maternity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Annual (vacation) leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Maternity leave, charged in calendar days.
    Maternity,
    /// Paternity leave, charged in calendar days.
    Paternity,
    /// Emergency leave; may be applied for retrospectively.
    Emergency,
    /// Unpaid leave.
    Unpaid,
    /// Hospitalization leave.
    Hospitalization,
    /// Special leave (marriage, compassionate, pilgrimage).
    Special,
    /// Absence recorded by HR without an application.
    Unrecorded,
}

/// How the days of a leave request are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationRule {
    /// Every calendar day in the range is charged, weekends and holidays included.
    Continuous,
    /// Only weekdays that are not public holidays are charged.
    WorkingDays,
}

impl LeaveType {
    /// All leave types, in display order.
    pub const ALL: [LeaveType; 9] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Maternity,
        LeaveType::Paternity,
        LeaveType::Emergency,
        LeaveType::Unpaid,
        LeaveType::Hospitalization,
        LeaveType::Special,
        LeaveType::Unrecorded,
    ];

    /// Returns the wire tag for this leave type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
            LeaveType::Emergency => "emergency",
            LeaveType::Unpaid => "unpaid",
            LeaveType::Hospitalization => "hospitalization",
            LeaveType::Special => "special",
            LeaveType::Unrecorded => "unrecorded",
        }
    }

    /// Returns the counting rule for this leave type.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::{DurationRule, LeaveType};
    ///
    /// assert_eq!(LeaveType::Paternity.duration_rule(), DurationRule::Continuous);
    /// assert_eq!(LeaveType::Sick.duration_rule(), DurationRule::WorkingDays);
    /// ```
    pub fn duration_rule(&self) -> DurationRule {
        match self {
            LeaveType::Maternity | LeaveType::Paternity => DurationRule::Continuous,
            _ => DurationRule::WorkingDays,
        }
    }
}

impl DurationRule {
    /// Returns the rule for a raw leave type tag.
    ///
    /// Tags that are not known leave types are charged as working days.
    pub fn for_tag(tag: &str) -> Self {
        tag.parse::<LeaveType>()
            .map(|leave_type| leave_type.duration_rule())
            .unwrap_or(DurationRule::WorkingDays)
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = LeaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        LeaveType::ALL
            .into_iter()
            .find(|leave_type| leave_type.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| LeaveError::UnknownLeaveType {
                tag: s.to_string(),
            })
    }
}
