//! Paycheck calculation.
//!
//! [`PaycheckCalculator`] holds a [`PayPolicy`] and folds a [`Schedule`] into
//! a single total: the sum of each day's pay divided by
//! [`LEGACY_RESCALE_DIVISOR`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, DailyPayLine, PayPolicy, PayTotals, PaycheckResult, Schedule,
};

use super::daily_pay::calculate_daily_pay;

/// Fixed divisor applied once to the summed daily pay (3.6).
pub const LEGACY_RESCALE_DIVISOR: Decimal = Decimal::from_parts(36, 0, 0, false, 1);

/// The engine version reported in every result.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Computes paychecks for schedules under a fixed pay policy.
///
/// The calculator holds no state besides its policy, so one instance can
/// price any number of schedules, including from several threads.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::PaycheckCalculator;
/// use paycheck_engine::models::{BreakRule, Day, NightOvertimeRule, PayPolicy, Schedule};
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
/// let calculator = PaycheckCalculator::new(policy);
/// let schedule = Schedule::new(vec![Day::new("1-Aug-21", "2:48 pm", "4:24 pm")]);
///
/// let total = calculator.calculate_paycheck(&schedule).unwrap();
/// assert_eq!(total.round_dp(2), Decimal::new(-19833, 2));
/// ```
#[derive(Debug, Clone)]
pub struct PaycheckCalculator {
    policy: PayPolicy,
}

impl PaycheckCalculator {
    /// Creates a calculator for the given policy.
    pub fn new(policy: PayPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy this calculator applies.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Computes the total pay for a schedule.
    ///
    /// The total is an exact `Decimal` quotient (`-714 / 3.6` is
    /// `-198.333...` to 28 significant digits), not a binary floating-point
    /// value, so it can differ from an `f64` total in the last digits.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedTimeRecord`] if any day fails to parse
    /// and [`EngineError::AmountOverflow`] if a day's pay or the running sum
    /// leaves the range of `Decimal`; no partial total is returned.
    pub fn calculate_paycheck(&self, schedule: &Schedule) -> EngineResult<Decimal> {
        let mut gross = Decimal::ZERO;
        for day in schedule {
            let amount = calculate_daily_pay(day, &self.policy, 1)?.line.amount;
            gross = gross
                .checked_add(amount)
                .ok_or_else(|| total_overflow("gross pay"))?;
        }
        rescale(gross)
    }

    /// Computes the total pay for a schedule with a per-day breakdown and
    /// audit trace.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedTimeRecord`] if any day fails to parse
    /// and [`EngineError::AmountOverflow`] if an amount leaves the range of
    /// `Decimal`; no partial result is returned.
    pub fn calculate(&self, schedule: &Schedule) -> EngineResult<PaycheckResult> {
        let start_time = Instant::now();
        let mut days: Vec<DailyPayLine> = Vec::with_capacity(schedule.len());
        let mut audit_steps: Vec<AuditStep> = Vec::new();
        let mut step_number: u32 = 1;

        for (index, day) in schedule.iter().enumerate() {
            let result = calculate_daily_pay(day, &self.policy, step_number)?;
            step_number += result.audit_steps.len() as u32;
            audit_steps.extend(result.audit_steps);

            let line = result.line;
            debug!(
                day_index = index,
                date = %line.date,
                elapsed_minutes = line.elapsed_minutes,
                break_minutes = line.break_minutes,
                regular_minutes = line.regular_minutes,
                overtime_minutes = line.total_overtime_minutes(),
                amount = %line.amount,
                "Computed daily pay"
            );
            if line.break_minutes > line.elapsed_minutes && line.elapsed_minutes > 0 {
                warn!(
                    day_index = index,
                    date = %line.date,
                    elapsed_minutes = line.elapsed_minutes,
                    break_minutes = line.break_minutes,
                    "Break deduction exceeds elapsed time"
                );
            }
            days.push(line);
        }

        let gross_before_rescale = days.iter().try_fold(Decimal::ZERO, |sum, d| {
            sum.checked_add(d.amount)
                .ok_or_else(|| total_overflow("gross pay"))
        })?;
        let total_pay = rescale(gross_before_rescale)?;
        let regular_minutes: i64 = days.iter().map(|d| d.regular_minutes).sum();
        let overtime_minutes: i64 = days.iter().map(DailyPayLine::total_overtime_minutes).sum();

        audit_steps.push(AuditStep {
            step_number,
            rule_id: "total_pay".to_string(),
            rule_name: "Total Pay".to_string(),
            input: serde_json::json!({
                "day_count": days.len(),
                "daily_amounts": days.iter().map(|d| d.amount.normalize().to_string()).collect::<Vec<_>>(),
                "rescale_divisor": LEGACY_RESCALE_DIVISOR.to_string(),
            }),
            output: serde_json::json!({
                "gross_before_rescale": gross_before_rescale.normalize().to_string(),
                "total_pay": total_pay.normalize().to_string(),
            }),
            reasoning: format!(
                "{} day(s) sum to ${} / {} = ${}",
                days.len(),
                gross_before_rescale.normalize(),
                LEGACY_RESCALE_DIVISOR,
                total_pay.normalize()
            ),
        });

        let duration_us = start_time.elapsed().as_micros() as u64;

        Ok(PaycheckResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            policy: self.policy.clone(),
            days,
            totals: PayTotals {
                gross_before_rescale,
                rescale_divisor: LEGACY_RESCALE_DIVISOR,
                total_pay,
                regular_minutes,
                overtime_minutes,
            },
            audit_trace: AuditTrace {
                steps: audit_steps,
                duration_us,
            },
        })
    }
}

fn rescale(gross: Decimal) -> EngineResult<Decimal> {
    gross
        .checked_div(LEGACY_RESCALE_DIVISOR)
        .ok_or_else(|| total_overflow("total pay"))
}

fn total_overflow(stage: &str) -> EngineError {
    EngineError::AmountOverflow {
        stage: stage.to_string(),
    }
}
