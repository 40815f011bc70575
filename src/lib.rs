//! Expense Ledger - personal expense tracking with category budgets
//!
//! This library provides the core of a single-user expense ledger: record
//! spending, file it under a fixed set of categories, persist it, and compare
//! spending with per-category budget ceilings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, expenses, budgets, ledger state)
//! - `services`: The ledger store and the budget alert evaluator
//! - `reports`: Aggregations over the ledger (totals, daily breakdowns)
//! - `storage`: JSON file storage with atomic writes
//! - `export`: CSV and JSON export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers used by the `expense` binary
//!
//! # Example
//!
//! ```
//! use expense_ledger::models::Category;
//! use expense_ledger::services::{alerts, BudgetState, LedgerStore};
//!
//! let mut store = LedgerStore::new();
//! store.add(50.0, Category::Food, "2024-01-01", "").unwrap();
//! store.add(30.0, Category::Food, "2024-01-01", "").unwrap();
//! store.set_budget(Category::Food, 70.0).unwrap();
//!
//! let status = alerts::evaluate(store.state(), Category::Food);
//! assert_eq!(status.state, BudgetState::Exceeded);
//! assert_eq!(status.remaining, Some(-10.0));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
