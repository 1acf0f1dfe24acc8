//! Request types for the Leave Engine API.
//!
//! This module defines the JSON request structures for the API endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, HolidaySet, LeaveApplication, LeaveRequestRecord, LeaveType};

/// Request body for the `/duration` endpoint.
///
/// Dates and leave type are taken as raw strings so that an unparseable
/// date yields a zero duration rather than a rejected request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    /// The leave request to measure.
    #[serde(flatten)]
    pub request: LeaveRequestRecord,
    /// Holidays to exclude; the configured calendar is used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<Holiday>>,
}

impl DurationRequest {
    /// Builds the holiday lookup supplied with the request, if any.
    pub fn holiday_set(&self) -> Option<HolidaySet> {
        self.holidays
            .as_deref()
            .map(HolidaySet::from_holidays)
    }
}

/// Request body for the `/entitlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// The leave type to calculate the entitlement for.
    pub leave_type: LeaveType,
    /// The employee's start date.
    pub joined_date: NaiveDate,
    /// The entitlement year.
    pub year: i32,
    /// Date months worked are measured to; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for the `/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The application to validate.
    #[serde(flatten)]
    pub application: LeaveApplication,
    /// The date the application is made; defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}
