//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger, the budget overview and the
//! dashboard for terminal display.

pub mod budget;
pub mod dashboard;
pub mod expense;
pub mod report;

pub use budget::format_budget_overview;
pub use dashboard::{format_category_shares, format_daily_breakdown};
pub use expense::{format_expense_details, format_ledger};
