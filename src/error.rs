//! Custom error types for fincalc
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Most calculator inputs degrade to zero or skip bad lines in lenient mode;
//! these variants only surface when the caller opts into strict parsing or
//! when a computation precondition is violated.

use thiserror::Error;

use crate::models::Money;

/// The main error type for fincalc operations
#[derive(Error, Debug)]
pub enum FincalcError {
    /// Decimal/input parse errors (strict mode only)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors for engine inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A transaction line that could not be parsed (strict mode only)
    #[error("Malformed transaction line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },

    /// Issue quantity exceeds what the ledger holds (strict mode only)
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: Money, available: Money },
}

impl FincalcError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error for a labelled input field
    pub fn unparseable(label: &str, text: &str) -> Self {
        Self::Parse(format!("'{}' is not a valid number for {}", text, label))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::MalformedLine { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FincalcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FincalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for FincalcError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for fincalc operations
pub type FincalcResult<T> = Result<T, FincalcError>;
