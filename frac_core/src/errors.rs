//! # Error Types
//!
//! Structured error types for frac_core. Every failure carries enough
//! context for a front end to show a localized validation message without
//! parsing the error text.
//!
//! ## Example
//!
//! ```rust
//! use frac_core::errors::{FracError, FracResult};
//!
//! fn checked_denominator(numerator: i64, denominator: i64) -> FracResult<i64> {
//!     if denominator == 0 {
//!         return Err(FracError::invalid_denominator(numerator, denominator));
//!     }
//!     Ok(denominator)
//! }
//!
//! assert_eq!(
//!     checked_denominator(3, 0).unwrap_err().error_code(),
//!     "INVALID_DENOMINATOR"
//! );
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for frac_core operations
pub type FracResult<T> = Result<T, FracError>;

/// Structured error type for fraction operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum FracError {
    /// A denominator argument is zero
    #[error("Invalid denominator: {fraction} has a zero denominator")]
    InvalidDenominator { fraction: String },

    /// The divisor of a division is zero
    #[error("Division by zero: cannot divide {dividend} by zero")]
    DivisionByZero { dividend: String },

    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A reduced result does not fit the 64-bit representation
    #[error("Overflow: result of {operation} does not fit in 64-bit terms")]
    Overflow { operation: String },

    /// Text could not be read as a fraction or decimal
    #[error("Cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// Settings are malformed
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl FracError {
    /// Create an InvalidDenominator error for `numerator/denominator`
    pub fn invalid_denominator(numerator: impl std::fmt::Display, denominator: impl std::fmt::Display) -> Self {
        FracError::InvalidDenominator {
            fraction: format!("{}/{}", numerator, denominator),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(dividend: impl std::fmt::Display) -> Self {
        FracError::DivisionByZero {
            dividend: dividend.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FracError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        FracError::Overflow {
            operation: operation.into(),
        }
    }

    /// Create a Parse error
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        FracError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(reason: impl Into<String>) -> Self {
        FracError::Config {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FracError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for the errors caused by the numbers a user typed, as opposed
    /// to malformed documents or settings.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FracError::InvalidDenominator { .. }
                | FracError::DivisionByZero { .. }
                | FracError::InvalidInput { .. }
                | FracError::Overflow { .. }
                | FracError::Parse { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FracError::InvalidDenominator { .. } => "INVALID_DENOMINATOR",
            FracError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            FracError::InvalidInput { .. } => "INVALID_INPUT",
            FracError::Overflow { .. } => "OVERFLOW",
            FracError::Parse { .. } => "PARSE_ERROR",
            FracError::Config { .. } => "CONFIG_ERROR",
            FracError::FileError { .. } => "FILE_ERROR",
            FracError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for FracError {
    fn from(err: serde_json::Error) -> Self {
        FracError::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FracError {
    fn from(err: toml::de::Error) -> Self {
        FracError::Config {
            reason: err.to_string(),
        }
    }
}
