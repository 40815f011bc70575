//! Expense CLI commands
//!
//! Implements the add/edit/delete/list commands. Each mutating command loads
//! the ledger, applies one store command, saves, then prints any budget
//! notice for the category it touched.

use std::io::{self, BufRead, Write};

use chrono::Local;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_expense_details, format_ledger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::expense::format_date;
use crate::models::Category;
use crate::services::{alerts, parse_category, LedgerStore};
use crate::storage::Storage;

use super::{load_for_view, load_strict, print_notice, save};

/// Parse a user-supplied amount
pub fn parse_amount(input: &str) -> LedgerResult<f64> {
    input.trim().parse::<f64>().map_err(|_| {
        LedgerError::Validation(format!("Enter a valid positive number, got '{}'", input))
    })
}

/// Today's date in ledger format, used when `--date` is omitted
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// Handle `add`
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    amount: &str,
    category: &str,
    date: Option<String>,
    note: Option<String>,
) -> LedgerResult<()> {
    let amount = parse_amount(amount)?;
    let category = parse_category(category)?;
    let date = date.unwrap_or_else(today);

    let mut store = load_strict(storage)?;
    let record = store.add(amount, category, date, note.unwrap_or_default())?;
    let index = store.len() - 1;
    info!(index, "expense added");

    println!("Expense added!");
    print!("{}", format_expense_details(index, &record, settings));

    save(storage, &store)?;
    notify(&store, settings, category);
    Ok(())
}

/// Handle `edit`
///
/// Fields that are not supplied keep their current values.
pub fn handle_edit(
    storage: &Storage,
    settings: &Settings,
    index: usize,
    amount: Option<String>,
    category: Option<String>,
    date: Option<String>,
    note: Option<String>,
) -> LedgerResult<()> {
    let mut store = load_strict(storage)?;
    let current = store.get(index)?.clone();

    let amount = match amount {
        Some(a) => parse_amount(&a)?,
        None => current.amount,
    };
    let category = match category {
        Some(c) => parse_category(&c)?,
        None => current.category,
    };

    let record = store.edit(
        index,
        amount,
        category,
        date.unwrap_or(current.date),
        note.unwrap_or(current.note),
    )?;
    info!(index, "expense edited");

    println!("Expense updated!");
    print!("{}", format_expense_details(index, &record, settings));

    save(storage, &store)?;
    notify(&store, settings, category);
    Ok(())
}

/// Handle `delete`
///
/// Without `force`, asks for confirmation on stdin first.
pub fn handle_delete(
    storage: &Storage,
    settings: &Settings,
    index: usize,
    force: bool,
) -> LedgerResult<()> {
    let mut store = load_strict(storage)?;
    let record = store.get(index)?.clone();

    if !force {
        print!("{}", format_expense_details(index, &record, settings));
        if !confirm("Delete this expense?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.delete(index)?;
    info!(index, "expense deleted");
    println!("Deleted expense #{}.", index);

    save(storage, &store)
}

/// Handle `list`
pub fn handle_list(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let store = load_for_view(storage);
    print!("{}", format_ledger(store.records(), settings));
    Ok(())
}

fn notify(store: &LedgerStore, settings: &Settings, category: Category) {
    if !settings.notify {
        return;
    }
    if let Some(notice) = alerts::should_notify(store.state(), category) {
        print_notice(&notice);
    }
}

fn confirm(prompt: &str) -> LedgerResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
