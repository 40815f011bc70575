//! Expense record model
//!
//! A single spending event. Records have no ID of their own: their position
//! in the ledger is their identity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

/// Canonical on-disk date format (zero-padded ISO-8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
///
/// Decoding rejects a non-positive amount. Stored dates are not re-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredExpense")]
pub struct ExpenseRecord {
    /// Amount spent, in currency units
    pub amount: f64,

    /// Category the expense is filed under
    pub category: Category,

    /// Calendar date as a `YYYY-MM-DD` string
    pub date: String,

    /// Free-form note
    #[serde(default)]
    pub note: String,
}

impl ExpenseRecord {
    /// Create a new record without validating it
    pub fn new(
        amount: f64,
        category: Category,
        date: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category,
            date: date.into(),
            note: note.into(),
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_amount(self.amount)?;
        validate_date(&self.date)?;
        Ok(())
    }
}

/// On-disk shape of a record before its amount is checked
#[derive(Deserialize)]
struct StoredExpense {
    amount: f64,
    category: Category,
    date: String,
    #[serde(default)]
    note: String,
}

impl TryFrom<StoredExpense> for ExpenseRecord {
    type Error = ExpenseValidationError;

    fn try_from(stored: StoredExpense) -> Result<Self, Self::Error> {
        validate_amount(stored.amount)?;
        Ok(Self::new(stored.amount, stored.category, stored.date, stored.note))
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} {}", self.date, self.amount, self.category)?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        Ok(())
    }
}

/// Check that an amount is a positive, finite number
pub fn validate_amount(amount: f64) -> Result<(), ExpenseValidationError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ExpenseValidationError::InvalidAmount(amount));
    }
    Ok(())
}

/// Check that a date string is a zero-padded `YYYY-MM-DD` calendar date
///
/// The length check rejects forms chrono would otherwise accept (`2024-1-5`),
/// which keeps lexicographic order equal to chronological order.
pub fn validate_date(date: &str) -> Result<(), ExpenseValidationError> {
    if date.len() != 10 || NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
        return Err(ExpenseValidationError::InvalidDate(date.to_string()));
    }
    Ok(())
}

/// Format a date the way the ledger stores it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    InvalidAmount(f64),
    InvalidDate(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
            Self::InvalidDate(date) => {
                write!(f, "Date must be in YYYY-MM-DD format, got '{}'", date)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        let record = ExpenseRecord::new(12.5, Category::Food, "2024-03-09", "lunch");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_amount_validation() {
        assert!(validate_amount(0.01).is_ok());
        assert_eq!(
            validate_amount(0.0),
            Err(ExpenseValidationError::InvalidAmount(0.0))
        );
        assert!(validate_amount(-5.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_date_validation() {
        assert!(validate_date("2024-01-01").is_ok());
        assert!(validate_date("2024-02-29").is_ok());
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("2024-1-1").is_err());
        assert!(validate_date("01/02/2024").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024-01-05");
    }

    #[test]
    fn test_missing_note_defaults_to_empty() {
        let record: ExpenseRecord =
            serde_json::from_str(r#"{"amount": 3.0, "category": "Other", "date": "2024-01-01"}"#)
                .unwrap();
        assert_eq!(record.note, "");
    }

    #[test]
    fn test_decode_rejects_non_positive_amount() {
        for amount in ["0", "-40"] {
            let json = format!(
                r#"{{"amount": {}, "category": "Food", "date": "2024-01-01"}}"#,
                amount
            );
            let err = serde_json::from_str::<ExpenseRecord>(&json).unwrap_err();
            assert!(err.to_string().contains("positive"));
        }
    }

    #[test]
    fn test_decode_keeps_stored_date() {
        let record: ExpenseRecord =
            serde_json::from_str(r#"{"amount": 1.5, "category": "Other", "date": "2024-1-5"}"#)
                .unwrap();
        assert_eq!(record.date, "2024-1-5");
    }

    #[test]
    fn test_display() {
        let record = ExpenseRecord::new(20.0, Category::Transport, "2024-01-02", "");
        assert_eq!(record.to_string(), "2024-01-02 20.00 Transport");

        let record = ExpenseRecord::new(4.5, Category::Food, "2024-01-02", "coffee");
        assert_eq!(record.to_string(), "2024-01-02 4.50 Food (coffee)");
    }
}
