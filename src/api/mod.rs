//! HTTP API module for the Leave Engine.
//!
//! This module provides the REST API endpoints for calculating leave
//! durations, entitlements and year-end carry-forward, listing holidays
//! and validating leave applications.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DurationRequest, EntitlementRequest, ValidationRequest};
pub use response::{ApiError, CarryForwardResponse, DurationResponse, ValidationResponse};
pub use state::AppState;
