//! Night overtime calculation functionality.
//!
//! Shifts worked in the early hours earn extra overtime minutes. Under
//! [`NightOvertimeRule::WholeShift`] a shift starting at or after 2 AM and
//! ending in the 5 AM hour or earlier has its whole duration added. Under
//! [`NightOvertimeRule::WindowOverlap`] only the minutes inside
//! `[02:00, 06:00)` of the shift date are added.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, NightOvertimeRule};

use super::worked_minutes::minutes_between;

/// Earliest time-in hour (24-hour clock) that can trigger night overtime.
pub const NIGHT_WINDOW_START_HOUR: u32 = 2;

/// Latest time-out hour (24-hour clock) that can trigger night overtime.
pub const NIGHT_WINDOW_END_HOUR: u32 = 5;

/// The result of applying the night overtime rule to a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightOvertimeResult {
    /// Whether the rule added anything to the day.
    pub applied: bool,
    /// Minutes added as night overtime.
    pub night_overtime_minutes: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns true if the shift falls inside the night window by its hours.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::is_night_shift;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// assert!(is_night_shift(at("2021-08-02 02:00"), at("2021-08-02 05:59")));
/// assert!(!is_night_shift(at("2021-08-02 01:59"), at("2021-08-02 04:00")));
/// assert!(!is_night_shift(at("2021-08-02 03:00"), at("2021-08-02 06:00")));
/// ```
pub fn is_night_shift(time_in: NaiveDateTime, time_out: NaiveDateTime) -> bool {
    time_in.hour() >= NIGHT_WINDOW_START_HOUR && time_out.hour() <= NIGHT_WINDOW_END_HOUR
}

/// Minutes of `[time_in, time_out]` that fall inside the night window of the
/// time-in date.
pub fn night_window_overlap_minutes(time_in: NaiveDateTime, time_out: NaiveDateTime) -> i64 {
    let midnight = time_in.date().and_time(NaiveTime::MIN);
    let window_start = midnight + TimeDelta::hours(i64::from(NIGHT_WINDOW_START_HOUR));
    let window_end = midnight + TimeDelta::hours(i64::from(NIGHT_WINDOW_END_HOUR + 1));

    let start = time_in.max(window_start);
    let end = time_out.min(window_end);

    minutes_between(start, end).max(0)
}

/// Calculates night overtime for a shift.
///
/// # Arguments
///
/// * `time_in` - Parsed time-in
/// * `time_out` - Parsed time-out
/// * `rule` - The night overtime rule from the pay policy
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::calculate_night_overtime;
/// use paycheck_engine::models::NightOvertimeRule;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// let result = calculate_night_overtime(
///     at("2021-08-02 03:00"),
///     at("2021-08-02 04:30"),
///     NightOvertimeRule::WholeShift,
///     1,
/// );
/// assert!(result.applied);
/// assert_eq!(result.night_overtime_minutes, 90);
/// ```
pub fn calculate_night_overtime(
    time_in: NaiveDateTime,
    time_out: NaiveDateTime,
    rule: NightOvertimeRule,
    step_number: u32,
) -> NightOvertimeResult {
    let (night_overtime_minutes, reasoning) = match rule {
        NightOvertimeRule::WholeShift => {
            if is_night_shift(time_in, time_out) {
                let minutes = minutes_between(time_in, time_out);
                (
                    minutes,
                    format!(
                        "Time-in hour {} >= {} and time-out hour {} <= {}: whole shift of {} minutes added",
                        time_in.hour(),
                        NIGHT_WINDOW_START_HOUR,
                        time_out.hour(),
                        NIGHT_WINDOW_END_HOUR,
                        minutes
                    ),
                )
            } else {
                (
                    0,
                    format!(
                        "Time-in hour {} / time-out hour {} outside night window, no night overtime",
                        time_in.hour(),
                        time_out.hour()
                    ),
                )
            }
        }
        NightOvertimeRule::WindowOverlap => {
            let minutes = night_window_overlap_minutes(time_in, time_out);
            (
                minutes,
                format!(
                    "{} minutes of the shift fall between {:02}:00 and {:02}:00",
                    minutes,
                    NIGHT_WINDOW_START_HOUR,
                    NIGHT_WINDOW_END_HOUR + 1
                ),
            )
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_overtime".to_string(),
        rule_name: "Night Overtime".to_string(),
        input: serde_json::json!({
            "time_in": time_in.to_string(),
            "time_out": time_out.to_string(),
            "rule": rule,
        }),
        output: serde_json::json!({
            "night_overtime_minutes": night_overtime_minutes,
        }),
        reasoning,
    };

    NightOvertimeResult {
        applied: night_overtime_minutes != 0,
        night_overtime_minutes,
        audit_step,
    }
}
