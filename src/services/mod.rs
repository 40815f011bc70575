//! Service layer for the expense ledger
//!
//! The service layer holds the business logic: the ledger store that
//! validates and applies commands, and the budget alert evaluator.

pub mod alerts;
pub mod ledger;

pub use alerts::{BudgetState, BudgetStatus, Notice, NoticeKind};
pub use ledger::{parse_category, LedgerStore};
