//! Dashboard formatting
//!
//! Text renditions of the two dashboard charts: spending share by category
//! and a stacked per-day breakdown.

use crate::config::Settings;
use crate::models::Category;
use crate::reports::{CategoryShare, DailyBreakdown};

use super::report::{format_bar, format_percentage, separator};

/// Glyph used for a category's segment in stacked bars
pub fn category_glyph(category: Category) -> char {
    match category {
        Category::Food => '█',
        Category::Transport => '▓',
        Category::Shopping => '▒',
        Category::Other => '░',
    }
}

/// Format the "By Category" section
pub fn format_category_shares(shares: &[CategoryShare], settings: &Settings) -> String {
    let mut output = String::from("By Category\n");
    output.push_str(&separator(40 + settings.bar_width));
    output.push('\n');

    if shares.is_empty() {
        output.push_str("No data yet\n");
        return output;
    }

    for share in shares {
        output.push_str(&format!(
            "{:10} {:>12} {:>6}  {}\n",
            share.category,
            settings.format_amount(share.total),
            format_percentage(share.percentage),
            format_bar(share.percentage, 100.0, settings.bar_width)
        ));
    }

    output
}

/// Build one stacked bar for a day, scaled against the largest day
///
/// Segment edges are rounded from running totals, so the bar never exceeds
/// `width` cells however many categories it stacks.
fn stacked_bar(daily: &DailyBreakdown, date: &str, max_total: f64, width: usize) -> String {
    let mut bar = String::new();
    if max_total <= 0.0 {
        return bar;
    }

    let edge = |running: f64| ((running / max_total) * width as f64).round() as usize;
    let mut running = 0.0;
    let mut drawn = 0;

    for category in &daily.categories {
        let value = daily
            .by_date
            .get(date)
            .and_then(|cats| cats.get(category))
            .copied()
            .unwrap_or(0.0);
        running += value;
        let end = edge(running).min(width);
        bar.extend(std::iter::repeat(category_glyph(*category)).take(end.saturating_sub(drawn)));
        drawn = drawn.max(end);
    }

    bar
}

/// Format the "Daily (stacked)" section
pub fn format_daily_breakdown(daily: &DailyBreakdown, settings: &Settings) -> String {
    let mut output = String::from("Daily (stacked)\n");
    output.push_str(&separator(40 + settings.bar_width));
    output.push('\n');

    if daily.is_empty() {
        output.push_str("No data yet\n");
        return output;
    }

    let max_total = daily
        .dates
        .iter()
        .map(|d| daily.day_total(d))
        .fold(0.0_f64, f64::max);

    for date in &daily.dates {
        output.push_str(&format!(
            "{:10} {:>12}  {}\n",
            date,
            settings.format_amount(daily.day_total(date)),
            stacked_bar(daily, date, max_total, settings.bar_width)
        ));
    }

    let legend: Vec<String> = daily
        .categories
        .iter()
        .map(|c| format!("{} {}", category_glyph(*c), c))
        .collect();
    output.push_str(&format!("\nLegend: {}\n", legend.join("  ")));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use crate::reports::{category_shares, daily_breakdown};

    fn records() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new(50.0, Category::Food, "2024-01-01", ""),
            ExpenseRecord::new(30.0, Category::Food, "2024-01-01", ""),
            ExpenseRecord::new(20.0, Category::Transport, "2024-01-02", ""),
        ]
    }

    #[test]
    fn test_empty_dashboard_says_no_data() {
        let settings = Settings::default();
        assert!(format_category_shares(&[], &settings).contains("No data yet"));
        assert!(format_daily_breakdown(&DailyBreakdown::default(), &settings)
            .contains("No data yet"));
    }

    #[test]
    fn test_category_shares_section() {
        let output = format_category_shares(&category_shares(&records()), &Settings::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "By Category");
        assert!(lines[2].starts_with("Food"));
        assert!(lines[2].contains("80%"));
        assert!(lines[3].starts_with("Transport"));
    }

    #[test]
    fn test_stacked_bar_scales_to_largest_day() {
        let daily = daily_breakdown(&records());
        let full = stacked_bar(&daily, "2024-01-01", 80.0, 20);
        let quarter = stacked_bar(&daily, "2024-01-02", 80.0, 20);

        assert_eq!(full.chars().count(), 20);
        assert!(full.chars().all(|c| c == '█'));
        assert_eq!(quarter.chars().count(), 5);
        assert!(quarter.chars().all(|c| c == '▓'));
    }

    #[test]
    fn test_stacked_bar_stays_within_width() {
        let records = vec![
            ExpenseRecord::new(100.0, Category::Food, "2024-01-01", ""),
            ExpenseRecord::new(2.0, Category::Food, "2024-01-02", ""),
            ExpenseRecord::new(2.0, Category::Other, "2024-01-02", ""),
            ExpenseRecord::new(2.0, Category::Shopping, "2024-01-02", ""),
            ExpenseRecord::new(2.0, Category::Transport, "2024-01-02", ""),
        ];
        let daily = daily_breakdown(&records);

        // Each segment is half a cell; rounded one by one they would take four
        let small = stacked_bar(&daily, "2024-01-02", 100.0, 25);
        assert_eq!(small.chars().count(), 2);

        let full = stacked_bar(&daily, "2024-01-01", 100.0, 25);
        assert_eq!(full.chars().count(), 25);
    }

    #[test]
    fn test_stacked_bar_splits_full_width() {
        let records = vec![
            ExpenseRecord::new(1.0, Category::Food, "2024-01-01", ""),
            ExpenseRecord::new(1.0, Category::Other, "2024-01-01", ""),
            ExpenseRecord::new(1.0, Category::Transport, "2024-01-01", ""),
        ];
        let daily = daily_breakdown(&records);

        let bar = stacked_bar(&daily, "2024-01-01", 3.0, 10);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_daily_section_has_legend() {
        let output = format_daily_breakdown(&daily_breakdown(&records()), &Settings::default());
        assert!(output.contains("2024-01-01"));
        assert!(output.contains("2024-01-02"));
        assert!(output.contains("Legend: █ Food  ▓ Transport"));
    }
}
