//! Daily pay calculation functionality.
//!
//! This module runs the per-day pipeline: worked minutes, regular minutes,
//! night overtime, overtime, and finally the day's amount.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DailyPayLine, Day, PayPolicy};

use super::night_overtime::calculate_night_overtime;
use super::overtime_hours::calculate_overtime_minutes;
use super::regular_hours::calculate_regular_minutes;
use super::worked_minutes::calculate_minutes_worked;

/// The result of pricing a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPayResult {
    /// The day's breakdown and amount.
    pub line: DailyPayLine,
    /// The audit steps recording each rule applied to the day.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the pay for a single day.
///
/// `amount = regular_minutes * hourly_rate + total_overtime_minutes * overtime_rate_1`.
/// Minute counts are multiplied by the rates as they are; no conversion to
/// hours takes place. The remaining policy rates are not consulted.
///
/// # Arguments
///
/// * `day` - The day to price
/// * `policy` - The pay policy
/// * `start_step_number` - The first step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MalformedTimeRecord`] if either punch
/// does not parse, and [`crate::error::EngineError::AmountOverflow`] if the
/// policy's rates push the day's pay outside the range of `Decimal`.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::calculate_daily_pay;
/// use paycheck_engine::models::{BreakRule, Day, NightOvertimeRule, PayPolicy};
/// use rust_decimal::Decimal;
///
/// let policy = PayPolicy {
///     hourly_rate: Decimal::ONE,
///     regular_hours_per_day: 9,
///     weekly_overtime_threshold: 50,
///     overtime_rate_1: Decimal::new(12, 1),
///     overtime_rate_2: Decimal::new(135, 2),
///     overnight_overtime_rate: Decimal::new(125, 2),
///     holiday_overtime_rate: Decimal::new(130, 2),
///     break_rule: BreakRule::Legacy,
///     night_overtime_rule: NightOvertimeRule::WholeShift,
/// };
///
/// let day = Day::new("1-Aug-21", "2:48 pm", "4:24 pm");
/// let result = calculate_daily_pay(&day, &policy, 1).unwrap();
/// assert_eq!(result.line.amount, Decimal::new(-714, 0));
/// ```
pub fn calculate_daily_pay(
    day: &Day,
    policy: &PayPolicy,
    start_step_number: u32,
) -> EngineResult<DailyPayResult> {
    let mut audit_steps = Vec::new();
    let mut step_number = start_step_number;

    // Steps 1-2: Break deduction and worked minutes
    let worked = calculate_minutes_worked(day, policy.break_rule, step_number)?;
    step_number += worked.audit_steps.len() as u32;
    audit_steps.extend(worked.audit_steps);

    // Step 3: Regular minutes
    let regular = calculate_regular_minutes(
        worked.worked_minutes,
        policy.regular_hours_per_day,
        step_number,
    );
    audit_steps.push(regular.audit_step);
    step_number += 1;

    // Step 4: Night overtime
    let night = calculate_night_overtime(
        worked.time_in,
        worked.time_out,
        policy.night_overtime_rule,
        step_number,
    );
    audit_steps.push(night.audit_step);
    step_number += 1;

    // Step 5: Overtime
    let overtime = calculate_overtime_minutes(
        worked.worked_minutes,
        night.night_overtime_minutes,
        policy,
        step_number,
    );
    audit_steps.push(overtime.audit_step);
    step_number += 1;

    // Step 6: Price the day
    let regular_pay = Decimal::from(regular.regular_minutes)
        .checked_mul(policy.hourly_rate)
        .ok_or_else(|| amount_overflow("regular pay", day))?;
    let overtime_pay = Decimal::from(overtime.total_overtime_minutes)
        .checked_mul(policy.overtime_rate_1)
        .ok_or_else(|| amount_overflow("overtime pay", day))?;
    let amount = regular_pay
        .checked_add(overtime_pay)
        .ok_or_else(|| amount_overflow("daily pay", day))?;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "daily_pay".to_string(),
        rule_name: "Daily Pay".to_string(),
        input: serde_json::json!({
            "regular_minutes": regular.regular_minutes,
            "hourly_rate": policy.hourly_rate.normalize().to_string(),
            "total_overtime_minutes": overtime.total_overtime_minutes,
            "overtime_rate_1": policy.overtime_rate_1.normalize().to_string(),
        }),
        output: serde_json::json!({
            "regular_pay": regular_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "{} x ${} + {} x ${} = ${}",
            regular.regular_minutes,
            policy.hourly_rate.normalize(),
            overtime.total_overtime_minutes,
            policy.overtime_rate_1.normalize(),
            amount.normalize()
        ),
    });

    let line = DailyPayLine {
        date: day.date().to_string(),
        time_in: day.time_in().to_string(),
        time_out: day.time_out().to_string(),
        elapsed_minutes: worked.elapsed_minutes,
        break_minutes: worked.break_minutes,
        worked_minutes: worked.worked_minutes,
        regular_minutes: regular.regular_minutes,
        overtime_minutes: overtime.capped_overtime_minutes,
        night_overtime_minutes: night.night_overtime_minutes,
        regular_pay,
        overtime_pay,
        amount,
    };

    Ok(DailyPayResult { line, audit_steps })
}

fn amount_overflow(stage: &str, day: &Day) -> EngineError {
    EngineError::AmountOverflow {
        stage: format!("{} for {}", stage, day.date()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{BreakRule, NightOvertimeRule};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_policy() -> PayPolicy {
        PayPolicy {
            hourly_rate: dec("1"),
            regular_hours_per_day: 9,
            weekly_overtime_threshold: 50,
            overtime_rate_1: dec("1.2"),
            overtime_rate_2: dec("1.35"),
            overnight_overtime_rate: dec("1.25"),
            holiday_overtime_rate: dec("1.30"),
            break_rule: BreakRule::Legacy,
            night_overtime_rule: NightOvertimeRule::WholeShift,
        }
    }

    #[test]
    fn test_zero_elapsed_day_pays_nothing() {
        let day = Day::new("1-Aug-21", "9:00 am", "9:00 am");
        let result = calculate_daily_pay(&day, &create_test_policy(), 1).unwrap();

        assert_eq!(result.line.regular_minutes, 0);
        assert_eq!(result.line.total_overtime_minutes(), 0);
        assert_eq!(result.line.amount, Decimal::ZERO);
    }

    #[test]
    fn test_regression_afternoon_shift() {
        let day = Day::new("1-Aug-21", "2:48 pm", "4:24 pm");
        let result = calculate_daily_pay(&day, &create_test_policy(), 1).unwrap();

        assert_eq!(result.line.elapsed_minutes, 96);
        assert_eq!(result.line.break_minutes, 810);
        assert_eq!(result.line.worked_minutes, -714);
        assert_eq!(result.line.regular_minutes, -714);
        assert_eq!(result.line.overtime_minutes, 0);
        assert_eq!(result.line.night_overtime_minutes, 0);
        assert_eq!(result.line.amount, dec("-714"));
    }

    #[test]
    fn test_short_day_pays_regular_only() {
        // 3 elapsed minutes owe no legacy break.
        let mut policy = create_test_policy();
        policy.hourly_rate = dec("2.5");
        let day = Day::new("1-Aug-21", "1:00 pm", "1:03 pm");
        let result = calculate_daily_pay(&day, &policy, 1).unwrap();

        assert_eq!(result.line.regular_minutes, 3);
        assert_eq!(result.line.total_overtime_minutes(), 0);
        assert_eq!(result.line.amount, dec("7.5"));
    }

    #[test]
    fn test_night_shift_double_counts_whole_duration() {
        let day = Day::new("2-Aug-21", "3:00 am", "4:00 am");
        let result = calculate_daily_pay(&day, &create_test_policy(), 1).unwrap();

        // 60 elapsed -> 17 breaks -> 510 deducted -> -450 worked
        assert_eq!(result.line.worked_minutes, -450);
        assert_eq!(result.line.regular_minutes, -450);
        assert_eq!(result.line.night_overtime_minutes, 60);
        assert_eq!(result.line.overtime_pay, dec("72.0"));
        assert_eq!(result.line.amount, dec("-378.0"));
    }

    #[test]
    fn test_corrected_rules_long_day() {
        let mut policy = create_test_policy();
        policy.break_rule = BreakRule::PerShiftInterval;
        policy.regular_hours_per_day = 8;
        policy.hourly_rate = dec("20");
        policy.overtime_rate_1 = dec("30");

        // 11 elapsed hours = 660 minutes -> 3 breaks -> 570 worked
        let day = Day::new("3-Aug-21", "7:00 am", "6:00 pm");
        let result = calculate_daily_pay(&day, &policy, 1).unwrap();

        assert_eq!(result.line.worked_minutes, 570);
        assert_eq!(result.line.regular_minutes, 480);
        assert_eq!(result.line.overtime_minutes, 90);
        assert_eq!(result.line.regular_pay, dec("9600"));
        assert_eq!(result.line.overtime_pay, dec("2700"));
        assert_eq!(result.line.amount, dec("12300"));
    }

    #[test]
    fn test_unused_rates_do_not_affect_pay() {
        let day = Day::new("2-Aug-21", "3:00 am", "4:00 am");
        let baseline = calculate_daily_pay(&day, &create_test_policy(), 1).unwrap();

        let mut policy = create_test_policy();
        policy.overtime_rate_2 = dec("99");
        policy.overnight_overtime_rate = dec("99");
        policy.holiday_overtime_rate = dec("99");
        let altered = calculate_daily_pay(&day, &policy, 1).unwrap();

        assert_eq!(baseline.line, altered.line);
    }

    #[test]
    fn test_audit_steps_in_order() {
        let day = Day::new("1-Aug-21", "2:48 pm", "4:24 pm");
        let result = calculate_daily_pay(&day, &create_test_policy(), 10).unwrap();

        let rule_ids: Vec<&str> = result
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "break_deduction",
                "minutes_worked",
                "regular_hours",
                "night_overtime",
                "overtime_hours",
                "daily_pay"
            ]
        );

        let step_numbers: Vec<u32> = result.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_malformed_day_fails() {
        let day = Day::new("1-Aug-21", "2:48 pm", "16:24 pm");
        let result = calculate_daily_pay(&day, &create_test_policy(), 1);

        assert!(matches!(
            result,
            Err(EngineError::MalformedTimeRecord { .. })
        ));
    }

    #[test]
    fn test_oversized_hourly_rate_is_an_error() {
        let policy = PayPolicy {
            hourly_rate: Decimal::MAX,
            ..create_test_policy()
        };
        let day = Day::new("1-Aug-21", "9:00 am", "10:00 am");

        match calculate_daily_pay(&day, &policy, 1) {
            Err(EngineError::AmountOverflow { stage }) => {
                assert_eq!(stage, "regular pay for 1-Aug-21");
            }
            other => panic!("Expected AmountOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_overtime_rate_is_an_error() {
        let policy = PayPolicy {
            overtime_rate_1: Decimal::MAX,
            ..create_test_policy()
        };
        let day = Day::new("2-Aug-21", "3:00 am", "4:00 am");

        assert!(matches!(
            calculate_daily_pay(&day, &policy, 1),
            Err(EngineError::AmountOverflow { .. })
        ));
    }
}
