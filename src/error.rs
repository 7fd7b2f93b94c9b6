//! Error types for the Paycheck Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a paycheck.

use thiserror::Error;

/// The main error type for the Paycheck Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paycheck_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A day's combined date and clock time did not match the expected pattern.
    ///
    /// Aborts the whole paycheck computation; no partial total is produced.
    #[error("Malformed time record '{record}': {message}")]
    MalformedTimeRecord {
        /// The combined date and time text that failed to parse.
        record: String,
        /// A description of the parse error.
        message: String,
    },

    /// A raw punch line did not contain enough tokens to build a day.
    #[error("Invalid punch line '{line}': {message}")]
    InvalidPunchLine {
        /// The raw line as entered.
        line: String,
        /// A description of what was missing.
        message: String,
    },

    /// A pay amount exceeded the range of `Decimal`.
    ///
    /// Raised instead of panicking when a policy's rates are too large for
    /// the schedule being priced.
    #[error("Pay amount overflowed while computing {stage}")]
    AmountOverflow {
        /// The computation that overflowed, e.g. `regular pay for 1-Aug-21`.
        stage: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_time_record_displays_record_and_message() {
        let error = EngineError::MalformedTimeRecord {
            record: "1-Aug-21 14:48 pm".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed time record '1-Aug-21 14:48 pm': input is out of range"
        );
    }

    #[test]
    fn test_invalid_punch_line_displays_line_and_message() {
        let error = EngineError::InvalidPunchLine {
            line: "1-Aug-21".to_string(),
            message: "expected at least 3 tokens, found 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid punch line '1-Aug-21': expected at least 3 tokens, found 1"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_amount_overflow_displays_stage() {
        let error = EngineError::AmountOverflow {
            stage: "regular pay for 1-Aug-21".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Pay amount overflowed while computing regular pay for 1-Aug-21"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_malformed() -> EngineResult<()> {
            Err(EngineError::MalformedTimeRecord {
                record: "bad".to_string(),
                message: "premature end of input".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_malformed()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
