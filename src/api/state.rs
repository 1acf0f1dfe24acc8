//! Shared state for the Leave Engine API handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::ConfigLoader;

/// State cloned into every handler.
///
/// The configuration is loaded once and shared read-only. Requests that
/// omit `today` or `as_of` fall back to [`AppState::today`], which is the
/// current UTC date unless the state was built with a fixed date.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    /// Wraps a loaded configuration using the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            fixed_today: None,
        }
    }

    /// Pins the date used when a request does not supply one.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    /// Returns the leave configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the date requests are evaluated against by default.
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}
