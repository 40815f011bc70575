//! JSON Export functionality
//!
//! Exports the complete ledger state in the same shape as the ledger file, so
//! an export can be used directly as a data file.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::LedgerState;

/// Export the full ledger state to JSON
pub fn export_full_json<W: Write>(state: &LedgerState, writer: W, pretty: bool) -> LedgerResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(writer, state)
    } else {
        serde_json::to_writer(writer, state)
    };

    result.map_err(|e| LedgerError::Export(format!("Failed to write JSON: {}", e)))
}
