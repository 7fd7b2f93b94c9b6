//! Pay policy model and rule selectors.
//!
//! This module defines the [`PayPolicy`] struct and the [`BreakRule`] and
//! [`NightOvertimeRule`] enums that select between the historical rules and
//! their corrected counterparts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How unpaid break time is deducted from a day's elapsed minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakRule {
    /// 30 minutes for every 3.5 elapsed *minutes*.
    ///
    /// Reproduces the historical behaviour, which usually deducts more than
    /// was worked.
    #[default]
    Legacy,
    /// 30 minutes for every full 3.5 hours (210 minutes) elapsed.
    PerShiftInterval,
}

/// How night overtime is derived for a shift near the 2 AM - 5 AM window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightOvertimeRule {
    /// If time-in hour >= 2 and time-out hour <= 5, the whole shift duration
    /// is added on top of the regular/overtime split.
    #[default]
    WholeShift,
    /// Only the minutes falling inside the night window are added.
    WindowOverlap,
}

/// The rate and threshold parameters governing how worked time becomes pay.
///
/// `overtime_rate_2`, `overnight_overtime_rate` and `holiday_overtime_rate`
/// are carried for configuration compatibility but are not read by any rule;
/// every overtime minute is paid at `overtime_rate_1`.
///
/// # Examples
///
/// ```
/// use paycheck_engine::models::{BreakRule, NightOvertimeRule, PayPolicy};
///
/// let yaml = r#"
/// hourly_rate: "1"
/// regular_hours_per_day: 9
/// weekly_overtime_threshold: 50
/// overtime_rate_1: "1.2"
/// overtime_rate_2: "1.35"
/// overnight_overtime_rate: "1.25"
/// holiday_overtime_rate: "1.30"
/// "#;
///
/// let policy: PayPolicy = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(policy.regular_hours_per_day, 9);
/// assert_eq!(policy.break_rule, BreakRule::Legacy);
/// assert_eq!(policy.night_overtime_rule, NightOvertimeRule::WholeShift);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPolicy {
    /// Base pay per unit of regular time.
    pub hourly_rate: Decimal,
    /// Daily cap on regular time, in hours.
    pub regular_hours_per_day: u32,
    /// Cap on overtime, in hours. Applied to each day on its own.
    pub weekly_overtime_threshold: u32,
    /// Multiplier applied to all overtime.
    pub overtime_rate_1: Decimal,
    /// Second overtime tier. Not applied.
    pub overtime_rate_2: Decimal,
    /// Overnight overtime rate. Not applied.
    pub overnight_overtime_rate: Decimal,
    /// Holiday overtime rate. Not applied.
    pub holiday_overtime_rate: Decimal,
    /// Break deduction rule.
    #[serde(default)]
    pub break_rule: BreakRule,
    /// Night overtime rule.
    #[serde(default)]
    pub night_overtime_rule: NightOvertimeRule,
}

impl PayPolicy {
    /// Daily regular-time cap expressed in minutes.
    pub fn regular_minutes_per_day(&self) -> i64 {
        i64::from(self.regular_hours_per_day) * 60
    }

    /// Overtime cap expressed in minutes.
    pub fn overtime_threshold_minutes(&self) -> i64 {
        i64::from(self.weekly_overtime_threshold) * 60
    }
}
