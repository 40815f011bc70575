//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the ledger store, reports and storage.

pub mod budget;
pub mod config;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config, ConfigUpdates};
pub use expense::{handle_add, handle_delete, handle_edit, handle_list};
pub use export::{handle_export_command, ExportCommands};
pub use report::handle_dashboard;

use tracing::error;

use crate::error::{LedgerError, LedgerResult};
use crate::services::{LedgerStore, Notice};
use crate::storage::Storage;

/// Load the ledger before a mutation or export
///
/// Fails on an unreadable file instead of substituting an empty ledger.
pub(crate) fn load_strict(storage: &Storage) -> LedgerResult<LedgerStore> {
    Ok(LedgerStore::from_state(storage.load()?))
}

/// Load the ledger for a read-only view, falling back to an empty ledger
pub(crate) fn load_for_view(storage: &Storage) -> LedgerStore {
    let (state, err) = storage.load_or_default();
    if let Some(e) = err {
        eprintln!("Warning: could not load data: {}", e);
        eprintln!("Showing an empty ledger.");
    }
    LedgerStore::from_state(state)
}

/// Save after a successful mutation
///
/// The change has already been applied and printed; a failure here means it
/// did not reach disk, so say so explicitly.
pub(crate) fn save(storage: &Storage, store: &LedgerStore) -> LedgerResult<()> {
    storage.save(store.state()).map_err(|e| {
        error!(error = %e, "save failed after successful change");
        LedgerError::Io(format!(
            "change was applied but could not be saved to {}: {}",
            storage.path().display(),
            e
        ))
    })
}

/// Print a budget notice
pub(crate) fn print_notice(notice: &Notice) {
    println!();
    println!("⚠ {}: {}", notice.title(), notice);
}
