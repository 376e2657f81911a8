// ============================================================================
// Configuration Errors
// Error types for salary configuration parsing and validation
// ============================================================================

use std::fmt;

/// Errors reported while parsing or validating a salary configuration.
///
/// These only surface from the validation entry points. Per-tick computations
/// never return them; they degrade to a neutral result instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// Time string is not a valid `HH:MM` wall-clock time
    InvalidTime(String),
    /// Salary input is not a number
    InvalidSalary(String),
    /// Salary is negative or above the accepted maximum
    SalaryOutOfRange,
    /// Work days per month outside 1..=31
    WorkDaysOutOfRange,
    /// Start and end time are identical
    ZeroLengthShift,
    /// Currency code missing from the currency table
    UnknownCurrency(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTime(raw) => {
                write!(f, "invalid time '{}': expected HH:MM", raw)
            },
            ConfigError::InvalidSalary(raw) => {
                write!(f, "invalid salary '{}': not a number", raw)
            },
            ConfigError::SalaryOutOfRange => {
                write!(f, "salary out of range: must be between 0 and 10000000")
            },
            ConfigError::WorkDaysOutOfRange => {
                write!(f, "work days out of range: must be between 1 and 31")
            },
            ConfigError::ZeroLengthShift => {
                write!(f, "zero-length shift: start and end time are equal")
            },
            ConfigError::UnknownCurrency(code) => write!(f, "unknown currency '{}'", code),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
