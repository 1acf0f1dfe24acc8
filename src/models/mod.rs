//! Core data models for the Leave Engine.
//!
//! This module contains the domain models used throughout the engine.

mod balance;
mod holiday;
mod leave_request;
mod leave_type;

pub use balance::LeaveBalance;
pub use holiday::{Holiday, HolidaySet};
pub use leave_request::{LeaveApplication, LeaveRequestRecord};
pub use leave_type::{DurationRule, LeaveType};
