//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculation::{
    EntitlementResult, calculate_default_entitlement, calculate_entitlement,
};
use crate::error::{LeaveError, LeaveResult};
use crate::models::{Holiday, HolidaySet, LeaveBalance, LeaveType};

use super::types::{HolidayCalendar, LeaveConfig, LeaveTypeConfig, LeaveTypesConfig, Organisation};

/// Loads and provides access to leave configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── organisation.yaml   # Organisation metadata
/// ├── leave_types.yaml    # Leave type settings
/// └── holidays/
///     └── 2026.yaml       # Holidays declared for 2026
/// ```
///
/// The `holidays/` directory is optional. Without it only weekends are
/// excluded from working-day durations.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded leave rules for: {}", loader.organisation().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeaveConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `organisation.yaml` or `leave_types.yaml` is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> LeaveResult<Self> {
        let path = path.as_ref();

        let organisation = Self::load_yaml::<Organisation>(&path.join("organisation.yaml"))?;
        let leave_types = Self::load_yaml::<LeaveTypesConfig>(&path.join("leave_types.yaml"))?;
        let holidays = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            path = %path.display(),
            leave_types = leave_types.leave_types.len(),
            holidays = holidays.len(),
            "Loaded leave configuration"
        );

        let config = LeaveConfig::new(organisation, leave_types.leave_types, holidays);
        Ok(Self { config })
    }

    /// Creates a loader from an already-built configuration.
    pub fn from_config(config: LeaveConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> LeaveResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LeaveError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LeaveError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday calendar file from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> LeaveResult<Vec<Holiday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            warn!(
                path = %holidays_dir_str,
                "Holiday directory not found, only weekends will be excluded"
            );
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| LeaveError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| LeaveError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let calendar = Self::load_yaml::<HolidayCalendar>(&path)?;
                holidays.extend(calendar.holidays);
            }
        }

        Ok(holidays)
    }

    /// Returns the underlying leave configuration.
    pub fn config(&self) -> &LeaveConfig {
        &self.config
    }

    /// Returns the organisation metadata.
    pub fn organisation(&self) -> &Organisation {
        self.config.organisation()
    }

    /// Gets the settings for a leave type, if configured.
    pub fn get_leave_type_config(&self, leave_type: LeaveType) -> Option<&LeaveTypeConfig> {
        self.config
            .leave_types()
            .iter()
            .find(|c| c.leave_type == leave_type)
    }

    /// Returns the holiday lookup covering every configured year.
    pub fn holiday_set(&self) -> &HolidaySet {
        self.config.holiday_set()
    }

    /// Returns the active holidays falling in `year`, sorted by date.
    ///
    /// Recurring holidays are listed with their date moved into `year`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// for holiday in loader.holidays_for_year(2026) {
    ///     println!("{} {}", holiday.date, holiday.name);
    /// }
    /// # Ok::<(), leave_engine::error::LeaveError>(())
    /// ```
    pub fn holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        let mut holidays: Vec<Holiday> = self
            .config
            .holidays()
            .iter()
            .filter(|h| h.active)
            .filter_map(|h| {
                h.occurrence_in(year).map(|date| Holiday {
                    date,
                    ..h.clone()
                })
            })
            .collect();
        holidays.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        holidays
    }

    /// Calculates a leave entitlement, falling back to the built-in table
    /// when the leave type is not configured.
    pub fn entitlement_for(
        &self,
        leave_type: LeaveType,
        joined_date: NaiveDate,
        year: i32,
        as_of: NaiveDate,
    ) -> EntitlementResult {
        match self.get_leave_type_config(leave_type) {
            Some(config) => calculate_entitlement(config, joined_date, year, as_of),
            None => calculate_default_entitlement(leave_type, joined_date, year, as_of),
        }
    }

    /// Returns the days a balance carries into the next year.
    ///
    /// Leave types without configuration never carry forward.
    pub fn carry_forward_for(&self, balance: &LeaveBalance) -> Decimal {
        self.get_leave_type_config(balance.leave_type)
            .map_or(Decimal::ZERO, |config| balance.carry_forward(config))
    }
}
