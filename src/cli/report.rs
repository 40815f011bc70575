//! Dashboard CLI command
//!
//! Prints spending share by category and the stacked daily breakdown.

use crate::config::Settings;
use crate::display::{format_category_shares, format_daily_breakdown};
use crate::error::LedgerResult;
use crate::reports::{category_shares, daily_breakdown, total_spent};
use crate::storage::Storage;

use super::load_for_view;

/// Handle `dashboard`
pub fn handle_dashboard(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let store = load_for_view(storage);
    let records = store.records();

    print!(
        "{}",
        format_category_shares(&category_shares(records), settings)
    );
    println!();
    print!(
        "{}",
        format_daily_breakdown(&daily_breakdown(records), settings)
    );

    if !records.is_empty() {
        println!();
        println!(
            "Total spent: {} across {} expenses",
            settings.format_amount(total_spent(records)),
            records.len()
        );
    }

    Ok(())
}
