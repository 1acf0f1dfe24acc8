//! Leave application validation.
//!
//! Checks a leave application against probation, date and leave type rules
//! before it is submitted, and returns the chargeable days when it passes.

use chrono::NaiveDate;

use crate::config::LeaveTypeConfig;
use crate::error::{LeaveError, LeaveResult};
use crate::models::{HolidaySet, LeaveApplication, LeaveType};

use super::date_input::parse_date_input;
use super::duration::calculate_duration;

fn parse_field(field: &str, value: &str) -> LeaveResult<NaiveDate> {
    parse_date_input(value).ok_or_else(|| LeaveError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Validates a leave application.
///
/// Rules are checked in order and the first failure is returned:
///
/// 1. The leave type and both dates must parse
/// 2. Employees on probation may only take sick leave
/// 3. The start date may not be after the end date
/// 4. Leave may not start before yesterday unless it is emergency leave
/// 5. The leave type must be active
/// 6. The configured notice period must be met (sick and emergency leave exempt)
/// 7. A required attachment must be present
/// 8. The chargeable days may not exceed the per-application maximum
///
/// Rules 5-8 only apply when `config` is supplied.
///
/// # Returns
///
/// The chargeable days for the application, always counted from the date
/// range. Any `duration_days` on the request is ignored.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::validate_leave_request;
/// use leave_engine::models::{HolidaySet, LeaveApplication, LeaveRequestRecord};
/// use chrono::NaiveDate;
///
/// let application = LeaveApplication {
///     request: LeaveRequestRecord {
///         start_date: "2026-03-02".to_string(),
///         end_date: "2026-03-06".to_string(),
///         leave_type: "annual".to_string(),
///         duration_days: None,
///     },
///     employee_confirmed: true,
///     has_attachment: false,
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// let days = validate_leave_request(&application, None, &HolidaySet::empty(), today).unwrap();
/// assert_eq!(days, 5);
/// ```
pub fn validate_leave_request(
    application: &LeaveApplication,
    config: Option<&LeaveTypeConfig>,
    holidays: &HolidaySet,
    today: NaiveDate,
) -> LeaveResult<u32> {
    let request = &application.request;
    let leave_type: LeaveType = request.leave_type.parse()?;
    let start = parse_field("start_date", &request.start_date)?;
    let end = parse_field("end_date", &request.end_date)?;

    if !application.employee_confirmed && leave_type != LeaveType::Sick {
        return Err(LeaveError::ProbationRestricted { leave_type });
    }

    if start > end {
        return Err(LeaveError::InvalidDateRange { start, end });
    }

    let yesterday = today.pred_opt().unwrap_or(today);
    if start < yesterday && leave_type != LeaveType::Emergency {
        return Err(LeaveError::PastDate { leave_type, start });
    }

    // Counted from the range; a client-supplied day count is never trusted here.
    let days = calculate_duration(start, end, leave_type.duration_rule(), holidays, None).days;

    let Some(config) = config else {
        return Ok(days);
    };

    if !config.active {
        return Err(LeaveError::LeaveTypeInactive { leave_type });
    }

    let notice_exempt = matches!(leave_type, LeaveType::Sick | LeaveType::Emergency);
    let given = (start - today).num_days();
    if !notice_exempt && given < i64::from(config.min_advance_days) {
        return Err(LeaveError::InsufficientNotice {
            leave_type,
            required: config.min_advance_days,
            given,
        });
    }

    if config.requires_attachment && !application.has_attachment {
        return Err(LeaveError::AttachmentRequired { leave_type });
    }

    if let Some(max) = config.max_days_per_application {
        if days > max {
            return Err(LeaveError::ExceedsMaxDays {
                leave_type,
                max,
                requested: days,
            });
        }
    }

    Ok(days)
}
