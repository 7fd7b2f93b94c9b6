//! Overtime detection functionality.
//!
//! This module splits off the worked minutes beyond the daily regular cap,
//! caps them at the overtime threshold, and adds any night overtime.

use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, PayPolicy};

/// The result of detecting overtime for a day.
///
/// # Example
///
/// ```
/// use paycheck_engine::calculation::calculate_overtime_minutes;
/// use paycheck_engine::models::{BreakRule, NightOvertimeRule, PayPolicy};
/// use rust_decimal::Decimal;
///
/// let policy = PayPolicy {
///     hourly_rate: Decimal::ONE,
///     regular_hours_per_day: 8,
///     weekly_overtime_threshold: 1,
///     overtime_rate_1: Decimal::new(15, 1),
///     overtime_rate_2: Decimal::TWO,
///     overnight_overtime_rate: Decimal::ONE,
///     holiday_overtime_rate: Decimal::ONE,
///     break_rule: BreakRule::PerShiftInterval,
///     night_overtime_rule: NightOvertimeRule::WholeShift,
/// };
///
/// let result = calculate_overtime_minutes(600, 0, &policy, 1);
/// assert_eq!(result.uncapped_overtime_minutes, 120);
/// assert_eq!(result.capped_overtime_minutes, 60);
/// assert_eq!(result.total_overtime_minutes, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeHoursResult {
    /// `max(0, worked - regular cap)`.
    pub uncapped_overtime_minutes: i64,
    /// Uncapped overtime limited by the overtime threshold.
    pub capped_overtime_minutes: i64,
    /// Capped overtime plus night overtime.
    pub total_overtime_minutes: i64,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Calculates a day's overtime minutes.
///
/// The threshold named `weekly_overtime_threshold` is applied to each day on
/// its own; nothing is carried between days. Night overtime is added after the
/// cap and is not itself capped.
///
/// # Arguments
///
/// * `worked_minutes` - Break-adjusted minutes worked
/// * `night_overtime_minutes` - Minutes from the night overtime rule
/// * `policy` - The pay policy supplying the caps
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_overtime_minutes(
    worked_minutes: i64,
    night_overtime_minutes: i64,
    policy: &PayPolicy,
    step_number: u32,
) -> OvertimeHoursResult {
    let regular_cap = policy.regular_minutes_per_day();
    let threshold = policy.overtime_threshold_minutes();

    let uncapped_overtime_minutes = (worked_minutes - regular_cap).max(0);
    let capped_overtime_minutes = uncapped_overtime_minutes.min(threshold);
    let total_overtime_minutes = capped_overtime_minutes + night_overtime_minutes;

    let reasoning = if uncapped_overtime_minutes > threshold {
        format!(
            "{} worked minutes exceed {} regular minutes by {}, capped at {} threshold minutes; plus {} night minutes = {}",
            worked_minutes,
            regular_cap,
            uncapped_overtime_minutes,
            threshold,
            night_overtime_minutes,
            total_overtime_minutes
        )
    } else if uncapped_overtime_minutes > 0 {
        format!(
            "{} worked minutes exceed {} regular minutes by {}; plus {} night minutes = {}",
            worked_minutes,
            regular_cap,
            uncapped_overtime_minutes,
            night_overtime_minutes,
            total_overtime_minutes
        )
    } else {
        format!(
            "{} worked minutes within {} regular minutes, no overtime; plus {} night minutes = {}",
            worked_minutes, regular_cap, night_overtime_minutes, total_overtime_minutes
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_hours".to_string(),
        rule_name: "Overtime Hours".to_string(),
        input: serde_json::json!({
            "worked_minutes": worked_minutes,
            "regular_minutes_cap": regular_cap,
            "overtime_threshold_minutes": threshold,
            "night_overtime_minutes": night_overtime_minutes,
        }),
        output: serde_json::json!({
            "uncapped_overtime_minutes": uncapped_overtime_minutes,
            "capped_overtime_minutes": capped_overtime_minutes,
            "total_overtime_minutes": total_overtime_minutes,
        }),
        reasoning,
    };

    OvertimeHoursResult {
        uncapped_overtime_minutes,
        capped_overtime_minutes,
        total_overtime_minutes,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakRule, NightOvertimeRule};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_policy(regular_hours_per_day: u32, weekly_overtime_threshold: u32) -> PayPolicy {
        PayPolicy {
            hourly_rate: dec("1"),
            regular_hours_per_day,
            weekly_overtime_threshold,
            overtime_rate_1: dec("1.2"),
            overtime_rate_2: dec("1.35"),
            overnight_overtime_rate: dec("1.25"),
            holiday_overtime_rate: dec("1.30"),
            break_rule: BreakRule::Legacy,
            night_overtime_rule: NightOvertimeRule::WholeShift,
        }
    }

    #[test]
    fn test_no_overtime_at_cap() {
        let result = calculate_overtime_minutes(540, 0, &create_policy(9, 50), 1);
        assert_eq!(result.uncapped_overtime_minutes, 0);
        assert_eq!(result.total_overtime_minutes, 0);
        assert!(result.audit_step.reasoning.contains("no overtime"));
    }

    #[test]
    fn test_negative_worked_minutes_give_no_overtime() {
        let result = calculate_overtime_minutes(-714, 0, &create_policy(9, 50), 1);
        assert_eq!(result.uncapped_overtime_minutes, 0);
        assert_eq!(result.total_overtime_minutes, 0);
    }

    #[test]
    fn test_overtime_beyond_cap() {
        let result = calculate_overtime_minutes(600, 0, &create_policy(9, 50), 1);
        assert_eq!(result.uncapped_overtime_minutes, 60);
        assert_eq!(result.capped_overtime_minutes, 60);
        assert_eq!(result.total_overtime_minutes, 60);
    }

    #[test]
    fn test_threshold_caps_each_day() {
        let result = calculate_overtime_minutes(900, 0, &create_policy(8, 2), 1);
        assert_eq!(result.uncapped_overtime_minutes, 420);
        assert_eq!(result.capped_overtime_minutes, 120);
        assert!(result.audit_step.reasoning.contains("capped at 120"));
    }

    #[test]
    fn test_night_minutes_added_after_cap() {
        let result = calculate_overtime_minutes(900, 180, &create_policy(8, 2), 1);
        assert_eq!(result.capped_overtime_minutes, 120);
        assert_eq!(result.total_overtime_minutes, 300);
    }

    #[test]
    fn test_night_minutes_added_without_overtime() {
        let result = calculate_overtime_minutes(-450, 60, &create_policy(9, 50), 1);
        assert_eq!(result.capped_overtime_minutes, 0);
        assert_eq!(result.total_overtime_minutes, 60);
    }

    #[test]
    fn test_audit_step_content() {
        let result = calculate_overtime_minutes(600, 30, &create_policy(9, 50), 7);
        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, "overtime_hours");
        assert_eq!(result.audit_step.input["regular_minutes_cap"], 540);
        assert_eq!(result.audit_step.input["overtime_threshold_minutes"], 3000);
        assert_eq!(result.audit_step.output["total_overtime_minutes"], 90);
    }
}
