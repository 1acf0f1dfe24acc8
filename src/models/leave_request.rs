//! Leave request models.
//!
//! [`LeaveRequestRecord`] is the shape of a leave request as it arrives from
//! the leave-management API: dates are raw ISO-8601 strings and the leave type
//! is a plain tag, so nothing here can fail to deserialize on a bad date.

use serde::{Deserialize, Serialize};

/// A leave request as received on the wire.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveRequestRecord;
///
/// let json = r#"{
///     "start_date": "2026-03-02T00:00:00Z",
///     "end_date": "2026-03-06",
///     "leave_type": "annual",
///     "duration_days": 5
/// }"#;
/// let record: LeaveRequestRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.duration_days, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestRecord {
    /// First day of leave (ISO-8601 date or date-time).
    pub start_date: String,
    /// Last day of leave, inclusive (ISO-8601 date or date-time).
    pub end_date: String,
    /// The leave type tag (e.g., "annual").
    pub leave_type: String,
    /// Server-computed duration; authoritative when greater than zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
}

/// A leave request submitted for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// The requested dates and leave type.
    #[serde(flatten)]
    pub request: LeaveRequestRecord,
    /// Whether the employee has completed probation.
    #[serde(default = "default_confirmed")]
    pub employee_confirmed: bool,
    /// Whether a supporting document was attached.
    #[serde(default)]
    pub has_attachment: bool,
}

fn default_confirmed() -> bool {
    true
}
