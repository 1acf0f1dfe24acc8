//! Configuration types for leave management.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, HolidaySet, LeaveType};

/// Metadata about the organisation whose leave rules are configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organisation {
    /// The organisation name.
    pub name: String,
    /// The country the holiday calendar belongs to.
    pub country: String,
    /// Label of the time zone leave dates are expressed in.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Settings for a single leave type.
///
/// # Example
///
/// ```
/// use leave_engine::config::LeaveTypeConfig;
/// use leave_engine::models::LeaveType;
///
/// let yaml = r#"
/// leave_type: annual
/// base_entitlement: "12"
/// years_of_service_tiers:
///   2: "4"
///   5: "8"
/// prorate_first_year: true
/// "#;
/// let config: LeaveTypeConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.leave_type, LeaveType::Annual);
/// assert_eq!(config.years_of_service_tiers.len(), 2);
/// assert!(config.active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeConfig {
    /// The leave type these settings apply to.
    pub leave_type: LeaveType,
    /// Days granted per year before service bonuses.
    pub base_entitlement: Decimal,
    /// Bonus days keyed by the years of service at which they start.
    #[serde(default)]
    pub years_of_service_tiers: BTreeMap<u32, Decimal>,
    /// Whether the first year's entitlement is prorated by months worked.
    #[serde(default)]
    pub prorate_first_year: bool,
    /// Whether unused days carry into the next year.
    #[serde(default)]
    pub allow_carry_forward: bool,
    /// Upper bound on carried days.
    #[serde(default)]
    pub max_carry_forward_days: u32,
    /// Longest single application allowed, in chargeable days.
    #[serde(default)]
    pub max_days_per_application: Option<u32>,
    /// Whether a supporting document must be attached.
    #[serde(default)]
    pub requires_attachment: bool,
    /// Minimum days between applying and the first day of leave.
    #[serde(default)]
    pub min_advance_days: u32,
    /// Whether employees may currently apply for this type.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Sort position in leave type listings.
    #[serde(default)]
    pub display_order: u32,
}

fn default_active() -> bool {
    true
}

/// Leave types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// Settings for every configured leave type.
    pub leave_types: Vec<LeaveTypeConfig>,
}

/// A holiday calendar file for one year.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendar {
    /// The holidays declared in this file.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete leave configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct LeaveConfig {
    /// Organisation metadata.
    organisation: Organisation,
    /// Leave type settings (sorted by display order).
    leave_types: Vec<LeaveTypeConfig>,
    /// Every configured holiday (sorted by date).
    holidays: Vec<Holiday>,
    /// Lookup built from `holidays`.
    holiday_set: HolidaySet,
}

impl LeaveConfig {
    /// Creates a new LeaveConfig from its component parts.
    pub fn new(
        organisation: Organisation,
        leave_types: Vec<LeaveTypeConfig>,
        holidays: Vec<Holiday>,
    ) -> Self {
        let mut sorted_types = leave_types;
        sorted_types.sort_by_key(|t| (t.display_order, t.leave_type));
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        let holiday_set = HolidaySet::from_holidays(&sorted_holidays);
        Self {
            organisation,
            leave_types: sorted_types,
            holidays: sorted_holidays,
            holiday_set,
        }
    }

    /// Returns the organisation metadata.
    pub fn organisation(&self) -> &Organisation {
        &self.organisation
    }

    /// Returns all leave type settings.
    pub fn leave_types(&self) -> &[LeaveTypeConfig] {
        &self.leave_types
    }

    /// Returns all configured holidays.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the holiday lookup.
    pub fn holiday_set(&self) -> &HolidaySet {
        &self.holiday_set
    }
}
