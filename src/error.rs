//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors for commands (bad amount, category, date or budget)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Stale or out-of-range ledger index
    #[error("Expense not found: index {index} (ledger has {len} records)")]
    NotFound { index: usize, len: usize },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A durable copy exists but could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "not found" error for a ledger index
    pub fn not_found(index: usize, len: usize) -> Self {
        Self::NotFound { index, len }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the persistence layer
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Parse(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
