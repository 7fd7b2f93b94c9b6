//! Day model.
//!
//! A [`Day`] is a single date with a time-in and time-out punch, kept as the
//! raw text the operator entered. Parsing into chronological points happens
//! on demand through [`Day::formatted_time_in`] and [`Day::formatted_time_out`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// chrono pattern for a combined punch, e.g. `1-Aug-21 2:48 pm`.
pub const PUNCH_FORMAT: &str = "%d-%b-%y %I:%M %p";

/// Represents one worked day: a calendar date and two 12-hour clock times.
///
/// Fields are fixed at construction.
///
/// # Examples
///
/// ```
/// use paycheck_engine::models::Day;
/// use chrono::Timelike;
///
/// let day = Day::new("1-Aug-21", "2:48 pm", "4:24 pm");
/// let time_in = day.formatted_time_in().unwrap();
/// assert_eq!(time_in.hour(), 14);
/// assert_eq!(time_in.minute(), 48);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    date: String,
    time_in: String,
    time_out: String,
}

impl Day {
    /// Creates a day from its date token and two clock-time tokens.
    pub fn new(
        date: impl Into<String>,
        time_in: impl Into<String>,
        time_out: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time_in: time_in.into(),
            time_out: time_out.into(),
        }
    }

    /// Builds a day from a raw punch line such as `1-Aug-21 2:48 pm 4:24 pm`.
    ///
    /// The line is split on whitespace. The first token is the date, the next
    /// two form the time-in. The time-out is taken from tokens four and five
    /// when present, and left empty otherwise; an empty time-out is reported
    /// later as a [`EngineError::MalformedTimeRecord`] when the day is parsed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPunchLine`] if the line has fewer than
    /// three tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use paycheck_engine::models::Day;
    ///
    /// let day = Day::from_punch_line("1-Aug-21 2:48 pm 4:24 pm").unwrap();
    /// assert_eq!(day.date(), "1-Aug-21");
    /// assert_eq!(day.time_in(), "2:48 pm");
    /// assert_eq!(day.time_out(), "4:24 pm");
    /// ```
    pub fn from_punch_line(line: &str) -> EngineResult<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 3 {
            return Err(EngineError::InvalidPunchLine {
                line: line.to_string(),
                message: format!("expected at least 3 tokens, found {}", parts.len()),
            });
        }

        let time_in = format!("{} {}", parts[1], parts[2]);
        let time_out = if parts.len() >= 5 {
            format!("{} {}", parts[3], parts[4])
        } else {
            String::new()
        };

        Ok(Self::new(parts[0], time_in, time_out))
    }

    /// Returns the raw date token.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the raw time-in token.
    pub fn time_in(&self) -> &str {
        &self.time_in
    }

    /// Returns the raw time-out token.
    pub fn time_out(&self) -> &str {
        &self.time_out
    }

    /// Parses the date combined with the time-in.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedTimeRecord`] if the combined text does
    /// not match [`PUNCH_FORMAT`].
    pub fn formatted_time_in(&self) -> EngineResult<NaiveDateTime> {
        parse_punch(&self.date, &self.time_in)
    }

    /// Parses the date combined with the time-out.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedTimeRecord`] if the combined text does
    /// not match [`PUNCH_FORMAT`].
    pub fn formatted_time_out(&self) -> EngineResult<NaiveDateTime> {
        parse_punch(&self.date, &self.time_out)
    }
}

fn parse_punch(date: &str, time: &str) -> EngineResult<NaiveDateTime> {
    let record = format!("{} {}", date, time);
    // chrono's %M also takes a single digit; punches must carry two.
    if !has_two_digit_minute(time) {
        return Err(EngineError::MalformedTimeRecord {
            record,
            message: "minute must have exactly two digits".to_string(),
        });
    }
    NaiveDateTime::parse_from_str(&record, PUNCH_FORMAT).map_err(|e| {
        EngineError::MalformedTimeRecord {
            message: e.to_string(),
            record,
        }
    })
}

fn has_two_digit_minute(time: &str) -> bool {
    match time.split_once(':') {
        Some((_, rest)) => rest.chars().take_while(char::is_ascii_digit).count() == 2,
        // Left to chrono, which rejects a time without a colon.
        None => true,
    }
}
