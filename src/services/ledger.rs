//! Ledger service
//!
//! `LedgerStore` owns the ledger state and is the only way to change it.
//! Every command validates its input before touching the state, so a failed
//! command leaves the ledger exactly as it was. Persistence is the caller's
//! job: save after each successful command.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::budget::validate_ceiling;
use crate::models::{BudgetMap, Category, ExpenseRecord, LedgerState};

/// Owner of the authoritative ledger state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerStore {
    state: LedgerState,
}

impl LedgerStore {
    /// Create a store with no records and no budgets
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a previously loaded state
    pub fn from_state(state: LedgerState) -> Self {
        Self { state }
    }

    /// Read-only view of the whole state
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Give up ownership of the state (e.g. to replace it wholesale)
    pub fn into_state(self) -> LedgerState {
        self.state
    }

    /// Records in ledger order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.state.expenses
    }

    /// Current budget ceilings
    pub fn budgets(&self) -> &BudgetMap {
        &self.state.budgets
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.state.expenses.len()
    }

    /// Whether the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.state.expenses.is_empty()
    }

    /// Get the record at an index
    pub fn get(&self, index: usize) -> LedgerResult<&ExpenseRecord> {
        self.state
            .expenses
            .get(index)
            .ok_or_else(|| LedgerError::not_found(index, self.len()))
    }

    /// Append a new expense and return it
    pub fn add(
        &mut self,
        amount: f64,
        category: Category,
        date: impl Into<String>,
        note: impl Into<String>,
    ) -> LedgerResult<ExpenseRecord> {
        let record = build_record(amount, category, date.into(), note.into())?;

        self.state.expenses.push(record.clone());
        debug!(index = self.len() - 1, %category, amount, "expense added");

        Ok(record)
    }

    /// Replace every field of the record at `index`, keeping its position
    pub fn edit(
        &mut self,
        index: usize,
        amount: f64,
        category: Category,
        date: impl Into<String>,
        note: impl Into<String>,
    ) -> LedgerResult<ExpenseRecord> {
        let len = self.len();
        let slot = self
            .state
            .expenses
            .get_mut(index)
            .ok_or_else(|| LedgerError::not_found(index, len))?;

        let record = build_record(amount, category, date.into(), note.into())?;
        *slot = record.clone();
        debug!(index, %category, amount, "expense edited");

        Ok(record)
    }

    /// Remove and return the record at `index`
    ///
    /// All later records move down by one, so indices held by callers are
    /// stale after this returns.
    pub fn delete(&mut self, index: usize) -> LedgerResult<ExpenseRecord> {
        if index >= self.len() {
            return Err(LedgerError::not_found(index, self.len()));
        }

        let removed = self.state.expenses.remove(index);
        debug!(index, category = %removed.category, "expense deleted");

        Ok(removed)
    }

    /// Set the budget ceiling for a category (zero means no limit)
    pub fn set_budget(&mut self, category: Category, ceiling: f64) -> LedgerResult<()> {
        validate_ceiling(ceiling).map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.state.budgets.set(category, ceiling);
        debug!(%category, ceiling, "budget set");

        Ok(())
    }

    /// Set several ceilings at once
    ///
    /// Every value is checked first; if any is invalid nothing is changed.
    pub fn set_budgets(&mut self, ceilings: &[(Category, f64)]) -> LedgerResult<()> {
        for (category, ceiling) in ceilings {
            validate_ceiling(*ceiling).map_err(|e| {
                LedgerError::Validation(format!("{} for {}", e, category))
            })?;
        }

        for (category, ceiling) in ceilings {
            self.state.budgets.set(*category, *ceiling);
        }
        debug!(count = ceilings.len(), "budgets set");

        Ok(())
    }
}

/// Parse a user-supplied category label
pub fn parse_category(label: &str) -> LedgerResult<Category> {
    label
        .parse::<Category>()
        .map_err(|e| LedgerError::Validation(e.to_string()))
}

fn build_record(
    amount: f64,
    category: Category,
    date: String,
    note: String,
) -> LedgerResult<ExpenseRecord> {
    let record = ExpenseRecord::new(amount, category, date, note);
    record
        .validate()
        .map_err(|e| LedgerError::Validation(e.to_string()))?;

    Ok(record)
}
