//! HTTP request handlers for the Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_record_duration, format_duration, validate_leave_request, DurationSource,
};
use crate::models::{LeaveBalance, LeaveType};

use super::request::{DurationRequest, EntitlementRequest, ValidationRequest};
use super::response::{
    ApiError, ApiErrorResponse, CarryForwardResponse, DurationResponse, ValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/duration", post(duration_handler))
        .route("/holidays/:year", get(holidays_handler))
        .route("/entitlement", post(entitlement_handler))
        .route("/validate", post(validate_handler))
        .route("/carry-forward", post(carry_forward_handler))
        .with_state(state)
}

/// Serializes `body` as a JSON response with an explicit content type.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /duration.
///
/// Returns the chargeable days for a leave request. Invalid dates or ranges
/// are not errors: they produce a zero duration so the caller can still
/// render an estimate.
async fn duration_handler(
    State(state): State<AppState>,
    payload: Result<Json<DurationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing duration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let supplied_holidays = request.holiday_set();
    let holidays = supplied_holidays
        .as_ref()
        .unwrap_or_else(|| state.config().holiday_set());

    let breakdown = calculate_record_duration(&request.request, Some(holidays));

    if matches!(
        breakdown.source,
        DurationSource::InvalidDate | DurationSource::InvalidRange
    ) {
        warn!(
            correlation_id = %correlation_id,
            start_date = %request.request.start_date,
            end_date = %request.request.end_date,
            source = ?breakdown.source,
            "Duration request has no valid date range"
        );
    }

    info!(
        correlation_id = %correlation_id,
        leave_type = %request.request.leave_type,
        duration_days = breakdown.days,
        source = ?breakdown.source,
        custom_holidays = supplied_holidays.is_some(),
        duration_us = start_time.elapsed().as_micros(),
        "Duration calculated"
    );

    json_response(
        StatusCode::OK,
        DurationResponse {
            duration_days: breakdown.days,
            display: format_duration(breakdown.days),
            breakdown,
        },
    )
}

/// Handler for GET /holidays/{year}.
async fn holidays_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match year {
        Ok(Path(year)) => year,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Invalid holiday year"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_path(rejection.body_text()),
            );
        }
    };

    let holidays = state.config().holidays_for_year(year);
    info!(
        correlation_id = %correlation_id,
        year,
        count = holidays.len(),
        "Listed holidays"
    );

    json_response(StatusCode::OK, holidays)
}

/// Handler for POST /entitlement.
async fn entitlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let as_of = request.as_of.unwrap_or_else(|| state.today());
    let result = state.config().entitlement_for(
        request.leave_type,
        request.joined_date,
        request.year,
        as_of,
    );

    info!(
        correlation_id = %correlation_id,
        leave_type = %result.leave_type,
        years_of_service = result.years_of_service,
        entitlement = %result.entitlement,
        source = ?result.source,
        "Entitlement calculated"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for POST /validate.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let today = request.today.unwrap_or_else(|| state.today());
    let leave_type_config = request
        .application
        .request
        .leave_type
        .parse::<LeaveType>()
        .ok()
        .and_then(|leave_type| config.get_leave_type_config(leave_type));

    match validate_leave_request(
        &request.application,
        leave_type_config,
        config.holiday_set(),
        today,
    ) {
        Ok(days) => {
            info!(
                correlation_id = %correlation_id,
                leave_type = %request.application.request.leave_type,
                duration_days = days,
                "Leave application is valid"
            );
            json_response(
                StatusCode::OK,
                ValidationResponse {
                    valid: true,
                    duration_days: days,
                    display: format_duration(days),
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave application rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /carry-forward.
///
/// Takes a closing-year balance and returns the days it carries into the
/// following year.
async fn carry_forward_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveBalance>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing carry-forward request");

    let balance = match payload {
        Ok(Json(balance)) => balance,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let carried_forward = state.config().carry_forward_for(&balance);
    info!(
        correlation_id = %correlation_id,
        leave_type = %balance.leave_type,
        year = balance.year,
        carried_forward = %carried_forward,
        "Carry-forward calculated"
    );

    json_response(
        StatusCode::OK,
        CarryForwardResponse {
            leave_type: balance.leave_type,
            from_year: balance.year,
            to_year: balance.year + 1,
            unused: balance.unused(),
            carried_forward,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::DurationBreakdown;
    use crate::config::ConfigLoader;
    use crate::models::{Holiday, LeaveRequestRecord};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn create_duration_request(start: &str, end: &str, leave_type: &str) -> DurationRequest {
        DurationRequest {
            request: LeaveRequestRecord {
                start_date: start.to_string(),
                end_date: end.to_string(),
                leave_type: leave_type.to_string(),
                duration_days: None,
            },
            holidays: None,
        }
    }

    async fn post_json(router: Router, uri: &str, body: String) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_duration_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let request = create_duration_request("2026-01-12", "2026-01-19", "annual");
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/duration", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: DurationResponse = body_json(response).await;
        assert_eq!(result.duration_days, 6);
        assert_eq!(result.display, "6 days");
        assert_eq!(result.breakdown.source, DurationSource::Calculated);
    }

    #[tokio::test]
    async fn test_duration_uses_configured_holidays() {
        // 2026-05-01 (Labour Day, recurring) is a Friday
        let router = create_router(create_test_state());
        let request = create_duration_request("2026-04-27", "2026-05-01", "annual");
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/duration", body).await;
        let result: DurationResponse = body_json(response).await;
        assert_eq!(result.duration_days, 4);
        assert_eq!(result.breakdown.holiday_days, 1);
    }

    #[tokio::test]
    async fn test_duration_supplied_holidays_replace_configured() {
        let router = create_router(create_test_state());
        let mut request = create_duration_request("2026-04-27", "2026-05-01", "annual");
        request.holidays = Some(vec![Holiday::on(
            NaiveDate::from_ymd_opt(2026, 4, 28).unwrap(),
            "Company Day",
        )]);
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/duration", body).await;
        let result: DurationResponse = body_json(response).await;
        let breakdown: DurationBreakdown = result.breakdown;
        assert_eq!(result.duration_days, 4);
        assert_eq!(breakdown.holiday_days, 1);
    }

    #[tokio::test]
    async fn test_duration_invalid_date_returns_zero() {
        let router = create_router(create_test_state());
        let request = create_duration_request("2026-01-12", "not-a-date", "annual");
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/duration", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        let result: DurationResponse = body_json(response).await;
        assert_eq!(result.duration_days, 0);
        assert_eq!(result.display, "0 days");
        assert_eq!(result.breakdown.source, DurationSource::InvalidDate);
    }

    #[tokio::test]
    async fn test_duration_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = post_json(router, "/duration", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_holidays_for_year() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/holidays/2026")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let holidays: Vec<Holiday> = body_json(response).await;
        assert!(holidays.iter().all(|h| h.date.format("%Y").to_string() == "2026"));
        assert!(holidays.iter().any(|h| h.name == "Christmas Day"));
    }

    #[tokio::test]
    async fn test_holidays_invalid_year_returns_400() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/holidays/next")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_PATH");
    }

    #[tokio::test]
    async fn test_validate_defaults_today_from_state() {
        let state = create_test_state().with_today(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        let router = create_router(state);
        let body = serde_json::json!({
            "start_date": "2026-03-16",
            "end_date": "2026-03-17",
            "leave_type": "annual"
        })
        .to_string();

        let response = post_json(router, "/validate", body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "PAST_DATE");
    }

    #[tokio::test]
    async fn test_carry_forward_capped_by_config() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "leave_type": "annual",
            "year": 2026,
            "total_entitlement": "16",
            "used": "3.5",
            "carried_forward": "5"
        })
        .to_string();

        let response = post_json(router, "/carry-forward", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        let result: CarryForwardResponse = body_json(response).await;
        assert_eq!(result.to_year, 2027);
        assert_eq!(result.unused, rust_decimal::Decimal::new(125, 1));
        assert_eq!(result.carried_forward, rust_decimal::Decimal::new(5, 0));
    }

    #[tokio::test]
    async fn test_validate_ignores_supplied_duration() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "start_date": "2026-03-09",
            "end_date": "2026-04-30",
            "leave_type": "emergency",
            "duration_days": 1,
            "today": "2026-03-02"
        })
        .to_string();

        let response = post_json(router, "/validate", body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "EXCEEDS_MAX_DAYS");
    }

    #[tokio::test]
    async fn test_validate_probation_returns_422() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "start_date": "2026-03-16",
            "end_date": "2026-03-17",
            "leave_type": "annual",
            "employee_confirmed": false,
            "today": "2026-03-02"
        })
        .to_string();

        let response = post_json(router, "/validate", body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "PROBATION_RESTRICTED");
    }
}
