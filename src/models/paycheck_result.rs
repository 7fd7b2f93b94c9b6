//! Paycheck result models for the Paycheck Engine.
//!
//! This module contains the [`PaycheckResult`] type and its associated
//! structures that capture all outputs from a paycheck calculation, including
//! the per-day breakdown, totals, and audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPolicy;

/// The computed pay for a single day of the schedule.
///
/// Minute quantities keep their sign: a break deduction larger than the
/// elapsed time yields negative worked and regular minutes.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::DailyPayLine;
/// use rust_decimal::Decimal;
///
/// let line = DailyPayLine {
///     date: "1-Aug-21".to_string(),
///     time_in: "2:48 pm".to_string(),
///     time_out: "4:24 pm".to_string(),
///     elapsed_minutes: 96,
///     break_minutes: 810,
///     worked_minutes: -714,
///     regular_minutes: -714,
///     overtime_minutes: 0,
///     night_overtime_minutes: 0,
///     regular_pay: Decimal::new(-714, 0),
///     overtime_pay: Decimal::ZERO,
///     amount: Decimal::new(-714, 0),
/// };
/// assert_eq!(line.total_overtime_minutes(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPayLine {
    /// The raw date token of the day.
    pub date: String,
    /// The raw time-in token.
    pub time_in: String,
    /// The raw time-out token.
    pub time_out: String,
    /// Whole minutes between time-in and time-out.
    pub elapsed_minutes: i64,
    /// Minutes deducted for breaks.
    pub break_minutes: i64,
    /// Elapsed minutes less the break deduction.
    pub worked_minutes: i64,
    /// Worked minutes up to the daily regular cap.
    pub regular_minutes: i64,
    /// Minutes beyond the regular cap, after the overtime threshold cap.
    pub overtime_minutes: i64,
    /// Minutes added by the night overtime rule.
    pub night_overtime_minutes: i64,
    /// `regular_minutes * hourly_rate`.
    pub regular_pay: Decimal,
    /// `(overtime_minutes + night_overtime_minutes) * overtime_rate_1`.
    pub overtime_pay: Decimal,
    /// The day's pay before the global rescale.
    pub amount: Decimal,
}

impl DailyPayLine {
    /// Capped overtime plus night overtime.
    pub fn total_overtime_minutes(&self) -> i64 {
        self.overtime_minutes + self.night_overtime_minutes
    }
}

/// Aggregated totals for a paycheck calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Sum of all daily amounts.
    pub gross_before_rescale: Decimal,
    /// The fixed divisor applied to the gross sum.
    pub rescale_divisor: Decimal,
    /// The final paycheck amount.
    pub total_pay: Decimal,
    /// Sum of regular minutes across all days.
    pub regular_minutes: i64,
    /// Sum of capped overtime and night overtime minutes across all days.
    pub overtime_minutes: i64,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a paycheck calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The policy the schedule was priced under.
    pub policy: PayPolicy,
    /// Per-day breakdown, in schedule order.
    pub days: Vec<DailyPayLine>,
    /// Aggregated totals.
    pub totals: PayTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
