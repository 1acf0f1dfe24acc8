//! Leave balance model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LeaveTypeConfig;

use super::LeaveType;

/// An employee's balance for one leave type in one entitlement year.
///
/// Day quantities are decimals because half-day leave is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The leave type this balance tracks.
    pub leave_type: LeaveType,
    /// The entitlement year.
    pub year: i32,
    /// Days granted for the year.
    pub total_entitlement: Decimal,
    /// Days already taken.
    #[serde(default)]
    pub used: Decimal,
    /// Days brought forward from the previous year.
    #[serde(default)]
    pub carried_forward: Decimal,
    /// Manual HR adjustments (may be negative).
    #[serde(default)]
    pub adjusted: Decimal,
    /// Server-computed remaining days, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<Decimal>,
}

impl LeaveBalance {
    /// Days granted for the year including carry-forward and adjustments.
    pub fn total_available(&self) -> Decimal {
        self.total_entitlement + self.carried_forward + self.adjusted
    }

    /// Returns the days still available.
    ///
    /// A server-supplied `available` value is returned as-is; otherwise the
    /// remaining days are derived from the entitlement components.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::{LeaveBalance, LeaveType};
    /// use rust_decimal::Decimal;
    ///
    /// let balance = LeaveBalance {
    ///     leave_type: LeaveType::Annual,
    ///     year: 2026,
    ///     total_entitlement: Decimal::new(16, 0),
    ///     used: Decimal::new(35, 1),
    ///     carried_forward: Decimal::new(2, 0),
    ///     adjusted: Decimal::ZERO,
    ///     available: None,
    /// };
    /// assert_eq!(balance.remaining(), Decimal::new(145, 1));
    /// ```
    pub fn remaining(&self) -> Decimal {
        self.available
            .unwrap_or_else(|| self.total_available() - self.used)
    }

    /// Days of this year's entitlement left unused.
    ///
    /// Days carried in from the previous year are excluded, so they cannot
    /// roll forward a second time.
    pub fn unused(&self) -> Decimal {
        self.total_entitlement + self.adjusted - self.used
    }

    /// Returns the days to carry into the next year at year end.
    ///
    /// Zero when the leave type does not allow carry-forward or nothing is
    /// unused; otherwise the unused days capped at `max_carry_forward_days`.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::config::LeaveTypeConfig;
    /// use leave_engine::models::{LeaveBalance, LeaveType};
    /// use rust_decimal::Decimal;
    ///
    /// let config: LeaveTypeConfig = serde_yaml::from_str(r#"
    /// leave_type: annual
    /// base_entitlement: "12"
    /// allow_carry_forward: true
    /// max_carry_forward_days: 5
    /// "#).unwrap();
    ///
    /// let balance = LeaveBalance {
    ///     leave_type: LeaveType::Annual,
    ///     year: 2026,
    ///     total_entitlement: Decimal::new(12, 0),
    ///     used: Decimal::new(9, 0),
    ///     carried_forward: Decimal::ZERO,
    ///     adjusted: Decimal::ZERO,
    ///     available: None,
    /// };
    /// assert_eq!(balance.carry_forward(&config), Decimal::new(3, 0));
    /// ```
    pub fn carry_forward(&self, config: &LeaveTypeConfig) -> Decimal {
        if !config.allow_carry_forward {
            return Decimal::ZERO;
        }
        let unused = self.unused();
        if unused <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        unused.min(Decimal::from(config.max_carry_forward_days))
    }

    /// Percentage of the available days already used, capped at 100.
    pub fn usage_percent(&self) -> Decimal {
        let total = self.total_available();
        if total <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let percent = (self.used / total * Decimal::ONE_HUNDRED).round_dp(2);
        percent.min(Decimal::ONE_HUNDRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn balance(total: &str, used: &str, carried: &str, adjusted: &str) -> LeaveBalance {
        LeaveBalance {
            leave_type: LeaveType::Annual,
            year: 2026,
            total_entitlement: dec(total),
            used: dec(used),
            carried_forward: dec(carried),
            adjusted: dec(adjusted),
            available: None,
        }
    }

    #[test]
    fn test_remaining_derived_from_components() {
        let b = balance("12", "4", "3", "1");
        assert_eq!(b.remaining(), dec("12"));
    }

    #[test]
    fn test_remaining_prefers_server_available() {
        let b = LeaveBalance {
            available: Some(dec("2.5")),
            ..balance("12", "4", "3", "1")
        };
        assert_eq!(b.remaining(), dec("2.5"));
    }

    #[test]
    fn test_server_available_of_zero_is_still_authoritative() {
        let b = LeaveBalance {
            available: Some(Decimal::ZERO),
            ..balance("12", "0", "0", "0")
        };
        assert_eq!(b.remaining(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_adjustment_reduces_remaining() {
        let b = balance("14", "2", "0", "-3");
        assert_eq!(b.remaining(), dec("9"));
    }

    fn carry_config(allow: bool, max: u32) -> LeaveTypeConfig {
        LeaveTypeConfig {
            leave_type: LeaveType::Annual,
            base_entitlement: dec("12"),
            years_of_service_tiers: Default::default(),
            prorate_first_year: false,
            allow_carry_forward: allow,
            max_carry_forward_days: max,
            max_days_per_application: None,
            requires_attachment: false,
            min_advance_days: 0,
            active: true,
            display_order: 1,
        }
    }

    #[test]
    fn test_carry_forward_below_cap() {
        let b = balance("12", "9.5", "0", "0");
        assert_eq!(b.carry_forward(&carry_config(true, 5)), dec("2.5"));
    }

    #[test]
    fn test_carry_forward_capped_at_max() {
        let b = balance("16", "2", "0", "1");
        assert_eq!(b.unused(), dec("15"));
        assert_eq!(b.carry_forward(&carry_config(true, 5)), dec("5"));
    }

    #[test]
    fn test_carry_forward_excludes_days_already_carried() {
        let b = balance("12", "12", "5", "0");
        assert_eq!(b.remaining(), dec("5"));
        assert_eq!(b.carry_forward(&carry_config(true, 5)), Decimal::ZERO);
    }

    #[test]
    fn test_carry_forward_zero_when_fully_used() {
        let b = balance("12", "12", "0", "0");
        assert_eq!(b.carry_forward(&carry_config(true, 5)), Decimal::ZERO);
    }

    #[test]
    fn test_carry_forward_zero_when_overdrawn() {
        let b = balance("12", "10", "0", "-4");
        assert_eq!(b.unused(), dec("-2"));
        assert_eq!(b.carry_forward(&carry_config(true, 5)), Decimal::ZERO);
    }

    #[test]
    fn test_carry_forward_zero_when_not_allowed() {
        let b = balance("12", "2", "0", "0");
        assert_eq!(b.carry_forward(&carry_config(false, 5)), Decimal::ZERO);
    }

    #[test]
    fn test_usage_percent() {
        let b = balance("16", "4", "0", "0");
        assert_eq!(b.usage_percent(), dec("25"));
    }

    #[test]
    fn test_usage_percent_caps_at_hundred() {
        let b = balance("5", "7", "0", "0");
        assert_eq!(b.usage_percent(), Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_usage_percent_zero_entitlement() {
        let b = balance("0", "0", "0", "0");
        assert_eq!(b.usage_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_balance_with_string_decimals() {
        let json = r#"{
            "leave_type": "sick",
            "year": 2026,
            "total_entitlement": "14",
            "used": "1.5"
        }"#;
        let b: LeaveBalance = serde_json::from_str(json).unwrap();
        assert_eq!(b.leave_type, LeaveType::Sick);
        assert_eq!(b.remaining(), dec("12.5"));
    }
}
