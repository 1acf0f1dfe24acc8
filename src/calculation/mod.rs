//! Calculation logic for the Leave Engine.
//!
//! This module contains the leave duration calculation (working days or
//! calendar days depending on leave type, with holiday exclusion and a
//! one-day minimum), date input parsing, day detection, duration display
//! formatting, entitlement calculation and leave application validation.

mod date_input;
mod day_detection;
mod duration;
mod entitlement;
mod format;
mod validation;

pub use date_input::parse_date_input;
pub use day_detection::{DayType, count_weekdays, days_in_range, get_day_type, is_weekend};
pub use duration::{
    DurationBreakdown, DurationSource, calculate_duration, calculate_duration_from_strings,
    calculate_record_duration, compute_duration, compute_duration_for_record,
    compute_duration_from_strings,
};
pub use entitlement::{
    EntitlementResult, EntitlementSource, calculate_default_entitlement, calculate_entitlement,
    default_entitlement, months_worked, years_of_service,
};
pub use format::format_duration;
pub use validation::validate_leave_request;
