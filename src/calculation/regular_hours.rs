//! Regular-hours calculation functionality.
//!
//! Regular time is the worked minutes up to the daily cap. The count stays in
//! minutes and is priced directly against the hourly rate.

use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The result of capping a day's worked minutes at the regular-time limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularHoursResult {
    /// `min(worked_minutes, regular_minutes_cap)`.
    pub regular_minutes: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the regular minutes for a day.
///
/// # Arguments
///
/// * `worked_minutes` - Break-adjusted minutes worked (may be negative)
/// * `regular_hours_per_day` - The daily regular-time cap in hours
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::calculate_regular_minutes;
///
/// assert_eq!(calculate_regular_minutes(600, 9, 1).regular_minutes, 540);
/// assert_eq!(calculate_regular_minutes(300, 9, 1).regular_minutes, 300);
/// assert_eq!(calculate_regular_minutes(-714, 9, 1).regular_minutes, -714);
/// ```
pub fn calculate_regular_minutes(
    worked_minutes: i64,
    regular_hours_per_day: u32,
    step_number: u32,
) -> RegularHoursResult {
    let cap = i64::from(regular_hours_per_day) * 60;
    let regular_minutes = worked_minutes.min(cap);

    let reasoning = if worked_minutes > cap {
        format!(
            "{} worked minutes capped at {} regular minutes ({} hours)",
            worked_minutes, cap, regular_hours_per_day
        )
    } else {
        format!(
            "{} worked minutes within {} minute regular cap",
            worked_minutes, cap
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "regular_hours".to_string(),
        rule_name: "Regular Hours".to_string(),
        input: serde_json::json!({
            "worked_minutes": worked_minutes,
            "regular_hours_per_day": regular_hours_per_day,
        }),
        output: serde_json::json!({
            "regular_minutes": regular_minutes,
        }),
        reasoning,
    };

    RegularHoursResult {
        regular_minutes,
        audit_step,
    }
}
