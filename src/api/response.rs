//! Response types for the Leave Engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from [`LeaveError`] to HTTP responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DurationBreakdown;
use crate::error::LeaveError;
use crate::models::LeaveType;

/// Response body for the `/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationResponse {
    /// Chargeable days.
    pub duration_days: u32,
    /// The duration formatted for display (e.g., "3 days").
    pub display: String,
    /// How the duration was counted.
    pub breakdown: DurationBreakdown,
}

/// Response body for a successful `/validate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Always true; failures are reported as [`ApiError`]s.
    pub valid: bool,
    /// Chargeable days for the application.
    pub duration_days: u32,
    /// The duration formatted for display.
    pub display: String,
}

/// Response body for the `/carry-forward` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarryForwardResponse {
    /// The leave type of the balance.
    pub leave_type: LeaveType,
    /// The year being closed.
    pub from_year: i32,
    /// The year receiving the carried days.
    pub to_year: i32,
    /// Unused days of the closing year's entitlement.
    pub unused: Decimal,
    /// Days carried into `to_year`.
    pub carried_forward: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid path parameter error response.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::new("INVALID_PATH", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<LeaveError> for ApiErrorResponse {
    fn from(error: LeaveError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            LeaveError::ConfigNotFound { path } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            LeaveError::ConfigParseError { path, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            LeaveError::UnknownLeaveType { tag } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "UNKNOWN_LEAVE_TYPE",
                    message,
                    format!("The leave type '{}' is not supported by this engine", tag),
                ),
            ),
            LeaveError::InvalidDate { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_DATE", message),
            ),
            LeaveError::InvalidDateRange { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INVALID_DATE_RANGE", message),
            ),
            LeaveError::ProbationRestricted { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("PROBATION_RESTRICTED", message),
            ),
            LeaveError::PastDate { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("PAST_DATE", message),
            ),
            LeaveError::LeaveTypeInactive { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("LEAVE_TYPE_INACTIVE", message),
            ),
            LeaveError::InsufficientNotice { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INSUFFICIENT_NOTICE", message),
            ),
            LeaveError::AttachmentRequired { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("ATTACHMENT_REQUIRED", message),
            ),
            LeaveError::ExceedsMaxDays { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("EXCEEDS_MAX_DAYS", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
