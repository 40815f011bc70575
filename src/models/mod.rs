//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: categories, expense records, budget ceilings and the aggregate
//! ledger state.

pub mod budget;
pub mod category;
pub mod expense;
pub mod state;

pub use budget::BudgetMap;
pub use category::Category;
pub use expense::ExpenseRecord;
pub use state::LedgerState;
