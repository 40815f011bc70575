//! Expense display formatting
//!
//! Formats ledger records as a numbered register for the terminal. Row
//! numbers are ledger positions starting at 0, the same numbers `edit` and
//! `delete` take.

use crate::config::Settings;
use crate::models::ExpenseRecord;

use super::report::{separator, truncate};

const NOTE_WIDTH: usize = 40;

/// Format a single record as a register row
pub fn format_expense_row(number: usize, record: &ExpenseRecord, settings: &Settings) -> String {
    format!(
        "{:>4}  {:10}  {:>12}  {:10}  {}",
        number,
        record.date,
        settings.format_amount(record.amount),
        record.category,
        truncate(&record.note, NOTE_WIDTH)
    )
}

/// Format the whole ledger as a register
pub fn format_ledger(records: &[ExpenseRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:>12}  {:10}  {}\n",
        "#", "Date", "Amount", "Category", "Note"
    ));
    output.push_str(&separator(46 + NOTE_WIDTH));
    output.push('\n');

    for (index, record) in records.iter().enumerate() {
        output.push_str(&format_expense_row(index, record, settings));
        output.push('\n');
    }

    output
}

/// Format a single record for confirmation messages
pub fn format_expense_details(number: usize, record: &ExpenseRecord, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense #{}\n", number));
    output.push_str(&format!("  Date:     {}\n", record.date));
    output.push_str(&format!("  Amount:   {}\n", settings.format_amount(record.amount)));
    output.push_str(&format!("  Category: {}\n", record.category));
    if !record.note.is_empty() {
        output.push_str(&format!("  Note:     {}\n", record.note));
    }
    output
}
