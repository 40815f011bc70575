//! CSV Export functionality
//!
//! Exports the ledger's expense records to CSV, one row per record in ledger
//! order.

use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Note")]
    note: &'a str,
}

/// Export expense records to CSV
pub fn export_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if records.is_empty() {
        csv_writer
            .write_record(["Date", "Amount", "Category", "Note"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    for record in records {
        csv_writer
            .serialize(CsvRow {
                date: &record.date,
                amount: format!("{:.2}", record.amount),
                category: record.category.name(),
                note: &record.note,
            })
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
