//! Annual leave entitlement calculation.
//!
//! Entitlements grow with completed years of service through additive tiers
//! and may be prorated by months worked in an employee's first year.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LeaveTypeConfig;
use crate::models::LeaveType;

const MONTHS_PER_YEAR: u32 = 12;
const DAYS_PER_MONTH_WORKED: i64 = 30;

/// Where an entitlement figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementSource {
    /// Computed from a configured leave type.
    Config,
    /// Computed from the built-in fallback table.
    Default,
}

/// The result of an entitlement calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementResult {
    /// The leave type the entitlement is for.
    pub leave_type: LeaveType,
    /// The entitlement year.
    pub year: i32,
    /// Completed years of service at 1 January of `year`.
    pub years_of_service: u32,
    /// Days granted before service bonuses.
    pub base_entitlement: Decimal,
    /// Sum of the service tier bonuses that apply.
    pub tier_bonus: Decimal,
    /// Months counted for first-year proration, when it applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_worked: Option<u32>,
    /// Days granted for the year.
    pub entitlement: Decimal,
    /// Whether configuration or the fallback table was used.
    pub source: EntitlementSource,
}

/// Returns the completed years of service at 1 January of `year`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::years_of_service;
/// use chrono::NaiveDate;
///
/// let joined = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
/// assert_eq!(years_of_service(joined, 2026), 4);
///
/// let joined_new_year = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// assert_eq!(years_of_service(joined_new_year, 2026), 5);
/// ```
pub fn years_of_service(joined_date: NaiveDate, year: i32) -> u32 {
    let mut years = year - joined_date.year();
    // The anniversary in `year` falls after 1 January unless the employee joined on it.
    if (joined_date.month(), joined_date.day()) != (1, 1) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Returns the months counted towards a first-year proration.
///
/// Every started 30-day block counts as a month, up to 12. An `as_of` date
/// before the joining date counts as zero months.
pub fn months_worked(joined_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let days = (as_of - joined_date).num_days();
    if days < 0 {
        return 0;
    }
    let months = days / DAYS_PER_MONTH_WORKED + 1;
    u32::try_from(months)
        .unwrap_or(MONTHS_PER_YEAR)
        .min(MONTHS_PER_YEAR)
}

/// Returns the built-in entitlement for a leave type.
///
/// Used when no configuration is loaded for the type.
pub fn default_entitlement(leave_type: LeaveType, years_of_service: u32) -> Decimal {
    let days: i64 = match leave_type {
        LeaveType::Annual if years_of_service < 5 => 12,
        LeaveType::Annual => 16,
        LeaveType::Sick if years_of_service < 2 => 14,
        LeaveType::Sick if years_of_service < 5 => 18,
        LeaveType::Sick => 22,
        LeaveType::Maternity => 98,
        LeaveType::Paternity => 7,
        LeaveType::Hospitalization => 60,
        _ => 0,
    };
    Decimal::new(days, 0)
}

fn prorate(entitlement: Decimal, months: u32) -> Decimal {
    (entitlement / Decimal::from(MONTHS_PER_YEAR) * Decimal::from(months)).round_dp(2)
}

/// Calculates the entitlement for a configured leave type.
///
/// # Arguments
///
/// * `config` - The leave type settings
/// * `joined_date` - The employee's start date
/// * `year` - The entitlement year
/// * `as_of` - The date months worked are measured to for first-year proration
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_entitlement;
/// use leave_engine::config::LeaveTypeConfig;
/// use chrono::NaiveDate;
///
/// let config: LeaveTypeConfig = serde_yaml::from_str(r#"
/// leave_type: annual
/// base_entitlement: "12"
/// years_of_service_tiers: { 2: "4", 5: "8" }
/// "#).unwrap();
///
/// let joined = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let result = calculate_entitlement(&config, joined, 2026, as_of);
/// assert_eq!(result.years_of_service, 5);
/// assert_eq!(result.entitlement.to_string(), "24");
/// ```
pub fn calculate_entitlement(
    config: &LeaveTypeConfig,
    joined_date: NaiveDate,
    year: i32,
    as_of: NaiveDate,
) -> EntitlementResult {
    let years = years_of_service(joined_date, year);
    let tier_bonus: Decimal = config
        .years_of_service_tiers
        .iter()
        .filter(|(threshold, _)| years >= **threshold)
        .map(|(_, bonus)| *bonus)
        .sum();
    let full = config.base_entitlement + tier_bonus;

    let months = (years == 0 && config.prorate_first_year).then(|| months_worked(joined_date, as_of));
    let entitlement = months.map_or(full, |m| prorate(full, m));

    EntitlementResult {
        leave_type: config.leave_type,
        year,
        years_of_service: years,
        base_entitlement: config.base_entitlement,
        tier_bonus,
        months_worked: months,
        entitlement,
        source: EntitlementSource::Config,
    }
}

/// Calculates the entitlement from the built-in fallback table.
///
/// First-year annual leave is always prorated.
pub fn calculate_default_entitlement(
    leave_type: LeaveType,
    joined_date: NaiveDate,
    year: i32,
    as_of: NaiveDate,
) -> EntitlementResult {
    let years = years_of_service(joined_date, year);
    let full = default_entitlement(leave_type, years);
    let months = (years == 0 && leave_type == LeaveType::Annual)
        .then(|| months_worked(joined_date, as_of));
    let entitlement = months.map_or(full, |m| prorate(full, m));

    EntitlementResult {
        leave_type,
        year,
        years_of_service: years,
        base_entitlement: full,
        tier_bonus: Decimal::ZERO,
        months_worked: months,
        entitlement,
        source: EntitlementSource::Default,
    }
}
