//! Ledger state
//!
//! The single source of truth: the ordered expense sequence plus the budget
//! map. Every derived view is a function of this value.

use serde::{Deserialize, Serialize};

use super::budget::BudgetMap;
use super::expense::ExpenseRecord;

/// All persisted ledger data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Expense records in insertion (ledger) order
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,

    /// Ceiling for every category
    #[serde(default)]
    pub budgets: BudgetMap,
}

impl LedgerState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
