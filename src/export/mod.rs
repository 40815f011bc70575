//! Export module for the expense ledger
//!
//! Provides data export in two formats:
//! - CSV: expense records only (spreadsheet-compatible)
//! - JSON: the full ledger state, in the ledger file format

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::export_full_json;
