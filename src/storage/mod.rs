//! Storage layer for the expense ledger
//!
//! Persists the whole ledger state as a single JSON file. Every save rewrites
//! the file atomically; a missing file loads as an empty ledger.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::LedgerState;

/// Persistence gateway for the ledger file
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Storage backed by the default ledger file under `paths`
    pub fn new(paths: &LedgerPaths) -> Self {
        Self::at(paths.ledger_file())
    }

    /// Storage backed by an explicit file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a durable copy exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the ledger state
    ///
    /// Returns an empty state if the file does not exist.
    pub fn load(&self) -> Result<LedgerState, LedgerError> {
        let state: LedgerState = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            records = state.expenses.len(),
            "ledger loaded"
        );
        Ok(state)
    }

    /// Load the ledger state, falling back to an empty one on failure
    ///
    /// The error is handed back alongside the empty state so the caller can
    /// still report it.
    pub fn load_or_default(&self) -> (LedgerState, Option<LedgerError>) {
        match self.load() {
            Ok(state) => (state, None),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "falling back to empty ledger");
                (LedgerState::default(), Some(e))
            }
        }
    }

    /// Save the full ledger state, replacing any previous copy
    pub fn save(&self, state: &LedgerState) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, state)?;
        debug!(
            path = %self.path.display(),
            records = state.expenses.len(),
            "ledger saved"
        );
        Ok(())
    }
}
