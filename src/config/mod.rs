//! Configuration loading and management for the Leave Engine.
//!
//! This module provides functionality to load leave configurations from YAML files,
//! including organisation metadata, leave type settings and holiday calendars.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded leave rules for: {}", config.organisation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HolidayCalendar, LeaveConfig, LeaveTypeConfig, LeaveTypesConfig, Organisation,
};
