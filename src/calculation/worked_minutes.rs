//! Time and duration helpers.
//!
//! This module parses a [`Day`] into two chronological points and derives the
//! elapsed and break-adjusted worked minutes between them.

use chrono::NaiveDateTime;

use crate::error::EngineResult;
use crate::models::{AuditStep, BreakRule, Day};

use super::break_deduction::calculate_break_deduction;

/// The parsed punches of a day and the minutes derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkedMinutesResult {
    /// Parsed time-in.
    pub time_in: NaiveDateTime,
    /// Parsed time-out.
    pub time_out: NaiveDateTime,
    /// Whole minutes from time-in to time-out. Negative if time-out is earlier.
    pub elapsed_minutes: i64,
    /// Minutes deducted for breaks.
    pub break_minutes: i64,
    /// `elapsed_minutes - break_minutes`.
    pub worked_minutes: i64,
    /// Audit steps: break deduction, then worked minutes.
    pub audit_steps: Vec<AuditStep>,
}

/// Returns the whole minutes between two punches, truncated toward zero.
pub fn minutes_between(time_in: NaiveDateTime, time_out: NaiveDateTime) -> i64 {
    (time_out - time_in).num_minutes()
}

/// Parses `day` and returns the whole minutes between its punches.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MalformedTimeRecord`] if either punch
/// does not parse.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::elapsed_minutes;
/// use paycheck_engine::models::Day;
///
/// let day = Day::new("1-Aug-21", "2:48 pm", "4:24 pm");
/// assert_eq!(elapsed_minutes(&day).unwrap(), 96);
/// ```
pub fn elapsed_minutes(day: &Day) -> EngineResult<i64> {
    Ok(minutes_between(
        day.formatted_time_in()?,
        day.formatted_time_out()?,
    ))
}

/// Calculates the minutes worked on a day after the break deduction.
///
/// # Arguments
///
/// * `day` - The day to evaluate
/// * `break_rule` - The break rule from the pay policy
/// * `step_number` - The first step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MalformedTimeRecord`] if either punch
/// does not parse.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::calculate_minutes_worked;
/// use paycheck_engine::models::{BreakRule, Day};
///
/// let day = Day::new("1-Aug-21", "2:48 pm", "4:24 pm");
/// let result = calculate_minutes_worked(&day, BreakRule::Legacy, 1).unwrap();
///
/// assert_eq!(result.elapsed_minutes, 96);
/// assert_eq!(result.break_minutes, 810);
/// assert_eq!(result.worked_minutes, -714);
/// ```
pub fn calculate_minutes_worked(
    day: &Day,
    break_rule: BreakRule,
    step_number: u32,
) -> EngineResult<WorkedMinutesResult> {
    let time_in = day.formatted_time_in()?;
    let time_out = day.formatted_time_out()?;
    let elapsed_minutes = minutes_between(time_in, time_out);

    let deduction = calculate_break_deduction(elapsed_minutes, break_rule, step_number);
    let break_minutes = deduction.deducted_minutes;
    let worked_minutes = elapsed_minutes - break_minutes;

    let worked_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "minutes_worked".to_string(),
        rule_name: "Minutes Worked".to_string(),
        input: serde_json::json!({
            "date": day.date(),
            "time_in": time_in.to_string(),
            "time_out": time_out.to_string(),
            "break_minutes": break_minutes,
        }),
        output: serde_json::json!({
            "elapsed_minutes": elapsed_minutes,
            "worked_minutes": worked_minutes,
        }),
        reasoning: format!(
            "{} elapsed minutes - {} break minutes = {} worked minutes",
            elapsed_minutes, break_minutes, worked_minutes
        ),
    };

    Ok(WorkedMinutesResult {
        time_in,
        time_out,
        elapsed_minutes,
        break_minutes,
        worked_minutes,
        audit_steps: vec![deduction.audit_step, worked_step],
    })
}
