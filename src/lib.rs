//! Leave Engine for HR leave management
//!
//! This crate calculates chargeable leave durations (working days or calendar
//! days depending on leave type, excluding weekends and configured public
//! holidays), leave entitlements and leave application validity, and exposes
//! them over a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
