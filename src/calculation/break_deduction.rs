//! Break deduction functionality.
//!
//! This module computes how many minutes are subtracted from a day's elapsed
//! time to account for rest breaks, under either [`BreakRule`].

use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, BreakRule};

/// Minutes deducted per break.
pub const BREAK_DURATION_MINUTES: i64 = 30;

/// Elapsed minutes per break under [`BreakRule::PerShiftInterval`] (3.5 hours).
pub const PER_SHIFT_BREAK_INTERVAL_MINUTES: i64 = 210;

/// The result of applying a break rule to a day's elapsed minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakDeductionResult {
    /// Number of breaks counted.
    pub breaks: i64,
    /// Total minutes deducted.
    pub deducted_minutes: i64,
    /// The audit step recording this deduction.
    pub audit_step: AuditStep,
}

/// Returns the number of breaks owed for `elapsed_minutes` under `rule`.
///
/// The legacy rule walks a counter from 3.5 in steps of 3.5 while it stays at
/// or below the elapsed minutes. For whole minutes that is `floor(m / 3.5)`,
/// computed here as `floor(2m / 7)` to stay in integers.
///
/// Non-positive elapsed time owes no breaks under either rule.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::break_count;
/// use paycheck_engine::models::BreakRule;
///
/// assert_eq!(break_count(96, BreakRule::Legacy), 27);
/// assert_eq!(break_count(480, BreakRule::PerShiftInterval), 2);
/// assert_eq!(break_count(-30, BreakRule::Legacy), 0);
/// ```
pub fn break_count(elapsed_minutes: i64, rule: BreakRule) -> i64 {
    if elapsed_minutes <= 0 {
        return 0;
    }

    match rule {
        BreakRule::Legacy => elapsed_minutes * 2 / 7,
        BreakRule::PerShiftInterval => elapsed_minutes / PER_SHIFT_BREAK_INTERVAL_MINUTES,
    }
}

/// Calculates the break deduction for a day.
///
/// # Arguments
///
/// * `elapsed_minutes` - Whole minutes between time-in and time-out
/// * `rule` - The break rule from the pay policy
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::calculate_break_deduction;
/// use paycheck_engine::models::BreakRule;
///
/// let result = calculate_break_deduction(96, BreakRule::Legacy, 1);
/// assert_eq!(result.deducted_minutes, 810);
///
/// let result = calculate_break_deduction(96, BreakRule::PerShiftInterval, 1);
/// assert_eq!(result.deducted_minutes, 0);
/// ```
pub fn calculate_break_deduction(
    elapsed_minutes: i64,
    rule: BreakRule,
    step_number: u32,
) -> BreakDeductionResult {
    let breaks = break_count(elapsed_minutes, rule);
    let deducted_minutes = breaks * BREAK_DURATION_MINUTES;

    let reasoning = match rule {
        BreakRule::Legacy => format!(
            "{} elapsed minutes / 3.5 = {} breaks x {} min = {} minutes deducted",
            elapsed_minutes, breaks, BREAK_DURATION_MINUTES, deducted_minutes
        ),
        BreakRule::PerShiftInterval => format!(
            "{} elapsed minutes / {} = {} breaks x {} min = {} minutes deducted",
            elapsed_minutes,
            PER_SHIFT_BREAK_INTERVAL_MINUTES,
            breaks,
            BREAK_DURATION_MINUTES,
            deducted_minutes
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "break_deduction".to_string(),
        rule_name: "Break Deduction".to_string(),
        input: serde_json::json!({
            "elapsed_minutes": elapsed_minutes,
            "rule": rule,
        }),
        output: serde_json::json!({
            "breaks": breaks,
            "deducted_minutes": deducted_minutes,
        }),
        reasoning,
    };

    BreakDeductionResult {
        breaks,
        deducted_minutes,
        audit_step,
    }
}
