//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed date, non-numeric amount or unexpected table layout
    #[error("Format error: {0}")]
    Format(String),

    /// Input that parsed but violates a record invariant (e.g. amount <= 0)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Underlying read/write failure on the ledger table
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the ledger table
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Console input ended or could not be read
    #[error("Input error: {0}")]
    Input(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),
}

impl LedgerError {
    /// Create a format error for a date that does not match the expected format
    pub fn bad_date(value: &str, format: &str) -> Self {
        Self::Format(format!(
            "'{}' does not match the date format {}",
            value, format
        ))
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Storage(err.to_string())
        } else {
            Self::Format(err.to_string())
        }
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
