//! Budget view formatting
//!
//! One row per category: ceiling, spent, remaining, a progress bar and the
//! alert state.

use crate::config::Settings;
use crate::services::alerts::{BudgetState, BudgetStatus};

use super::report::{format_bar, separator};

/// Format the remaining figure ("∞" when no ceiling is set)
pub fn format_remaining(status: &BudgetStatus, settings: &Settings) -> String {
    match status.remaining {
        Some(remaining) => settings.format_amount(remaining),
        None => "∞".to_string(),
    }
}

/// Format a single budget row
pub fn format_budget_row(status: &BudgetStatus, settings: &Settings) -> String {
    let budget = if status.state == BudgetState::Unlimited {
        "-".to_string()
    } else {
        settings.format_amount(status.ceiling)
    };

    format!(
        "{:10} {:>12} {:>12} {:>12}  {} {:>4.0}%  {}",
        status.category,
        budget,
        settings.format_amount(status.spent),
        format_remaining(status, settings),
        format_bar(status.progress_percent(), 100.0, settings.bar_width),
        status.progress_percent(),
        status.state
    )
}

/// Format the budget overview for every category
pub fn format_budget_overview(statuses: &[BudgetStatus], settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:>12} {:>12} {:>12}  {}\n",
        "Category", "Budget", "Spent", "Remaining", "Progress"
    ));
    output.push_str(&separator(62 + settings.bar_width));
    output.push('\n');

    for status in statuses {
        output.push_str(&format_budget_row(status, settings));
        let marker = status.state.marker();
        if !marker.is_empty() {
            output.push(' ');
            output.push_str(marker);
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_unlimited_shows_infinity() {
        let status = BudgetStatus::new(Category::Other, 12.0, 0.0);
        let settings = Settings::default();

        assert_eq!(format_remaining(&status, &settings), "∞");
        let row = format_budget_row(&status, &settings);
        assert!(row.contains("No limit"));
        assert!(row.contains("$12.00"));
    }

    #[test]
    fn test_exceeded_shows_negative_remaining() {
        let status = BudgetStatus::new(Category::Food, 80.0, 70.0);
        let settings = Settings::default();

        assert_eq!(format_remaining(&status, &settings), "-$10.00");
        let overview = format_budget_overview(&[status], &settings);
        assert!(overview.contains("Exceeded"));
        assert!(overview.contains('✗'));
        assert!(overview.contains("100%"));
    }

    #[test]
    fn test_overview_has_row_per_status() {
        let statuses: Vec<BudgetStatus> = Category::ALL
            .iter()
            .map(|c| BudgetStatus::new(*c, 0.0, 0.0))
            .collect();
        let overview = format_budget_overview(&statuses, &Settings::default());
        assert_eq!(overview.lines().count(), 2 + Category::ALL.len());
    }
}
