//! Error types for the Leave Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every fallible operation in the engine. Duration calculation itself
//! never fails; invalid input there resolves to a zero duration instead.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::LeaveType;

/// The main error type for the Leave Engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::LeaveError;
///
/// let error = LeaveError::ConfigNotFound {
///     path: "/missing/leave_types.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/leave_types.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum LeaveError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A leave type tag was not one of the known leave types.
    #[error("Unknown leave type: {tag}")]
    UnknownLeaveType {
        /// The tag that could not be recognised.
        tag: String,
    },

    /// A date field could not be parsed as an ISO-8601 date or date-time.
    #[error("Invalid date for '{field}': {value}")]
    InvalidDate {
        /// The request field holding the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The end date of a leave request is before its start date.
    #[error("Start date {start} must not be after end date {end}")]
    InvalidDateRange {
        /// The requested first day of leave.
        start: NaiveDate,
        /// The requested last day of leave.
        end: NaiveDate,
    },

    /// Employees on probation may only apply for sick leave.
    #[error("Employee is on probation and can only apply for sick leave, not {leave_type}")]
    ProbationRestricted {
        /// The leave type that was requested.
        leave_type: LeaveType,
    },

    /// Leave may not start in the past (emergency leave excepted).
    #[error("Cannot apply for {leave_type} leave starting in the past ({start})")]
    PastDate {
        /// The leave type that was requested.
        leave_type: LeaveType,
        /// The requested first day of leave.
        start: NaiveDate,
    },

    /// The leave type is configured but switched off.
    #[error("Leave type {leave_type} is not currently available")]
    LeaveTypeInactive {
        /// The inactive leave type.
        leave_type: LeaveType,
    },

    /// The request was made with less notice than the leave type requires.
    #[error("{leave_type} leave requires {required} days notice, got {given}")]
    InsufficientNotice {
        /// The leave type that was requested.
        leave_type: LeaveType,
        /// Minimum days of notice for this leave type.
        required: u32,
        /// Days of notice actually given.
        given: i64,
    },

    /// The leave type requires a supporting document.
    #[error("{leave_type} leave requires a supporting attachment")]
    AttachmentRequired {
        /// The leave type that was requested.
        leave_type: LeaveType,
    },

    /// The request is longer than a single application may be.
    #[error("{leave_type} leave is limited to {max} days per application, requested {requested}")]
    ExceedsMaxDays {
        /// The leave type that was requested.
        leave_type: LeaveType,
        /// The configured maximum per application.
        max: u32,
        /// The chargeable days requested.
        requested: u32,
    },
}

/// A type alias for Results that return LeaveError.
pub type LeaveResult<T> = Result<T, LeaveError>;
