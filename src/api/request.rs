//! Request types for the Paycheck Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Day, PayPolicy, Schedule};

/// Request body for the `/calculate` endpoint.
///
/// Days can be given as structured records, as raw punch lines, or both. The
/// schedule is built from `days` first, then `punch_lines`, each in the order
/// given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Overrides the server's configured policy for this request.
    #[serde(default)]
    pub policy: Option<PayPolicy>,
    /// Structured day records.
    #[serde(default)]
    pub days: Vec<DayRequest>,
    /// Raw lines such as `1-Aug-21 2:48 pm 4:24 pm`.
    #[serde(default)]
    pub punch_lines: Vec<String>,
}

/// A structured day record in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRequest {
    /// Date token, e.g. `1-Aug-21`.
    pub date: String,
    /// Time-in token, e.g. `2:48 pm`.
    pub time_in: String,
    /// Time-out token, e.g. `4:24 pm`.
    pub time_out: String,
}

impl From<DayRequest> for Day {
    fn from(req: DayRequest) -> Self {
        Day::new(req.date, req.time_in, req.time_out)
    }
}

impl CalculationRequest {
    /// Builds the schedule: structured days, then parsed punch lines.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidPunchLine`] for the first
    /// punch line with too few tokens.
    pub fn to_schedule(&self) -> EngineResult<Schedule> {
        let mut days: Vec<Day> = self.days.iter().cloned().map(Into::into).collect();
        for line in &self.punch_lines {
            days.push(Day::from_punch_line(line)?);
        }
        Ok(Schedule::new(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_minimal_request_deserializes() {
        let request: CalculationRequest = serde_json::from_str("{}").unwrap();
        assert!(request.policy.is_none());
        assert!(request.to_schedule().unwrap().is_empty());
    }

    #[test]
    fn test_schedule_orders_days_before_punch_lines() {
        let json = r#"{
            "days": [
                { "date": "2-Aug-21", "time_in": "9:00 am", "time_out": "5:00 pm" }
            ],
            "punch_lines": ["1-Aug-21 2:48 pm 4:24 pm"]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let schedule = request.to_schedule().unwrap();

        let dates: Vec<&str> = schedule.iter().map(Day::date).collect();
        assert_eq!(dates, vec!["2-Aug-21", "1-Aug-21"]);
    }

    #[test]
    fn test_short_punch_line_is_rejected() {
        let request = CalculationRequest {
            punch_lines: vec!["1-Aug-21".to_string()],
            ..Default::default()
        };

        assert!(matches!(
            request.to_schedule(),
            Err(EngineError::InvalidPunchLine { .. })
        ));
    }

    #[test]
    fn test_day_missing_field_is_rejected() {
        let json = r#"{ "days": [ { "date": "1-Aug-21", "time_in": "2:48 pm" } ] }"#;
        let result: Result<CalculationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
