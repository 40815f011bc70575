//! Spending aggregation
//!
//! Derives category totals and per-day breakdowns from ledger records. All
//! functions are pure: they read a snapshot and allocate fresh results.

use std::collections::BTreeMap;

use crate::models::{Category, ExpenseRecord};

/// Per-day, per-category spending, ready for stacked or grouped views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyBreakdown {
    /// date -> category -> total
    pub by_date: BTreeMap<String, BTreeMap<Category, f64>>,
    /// Distinct dates, ascending (lexicographic on the date string)
    pub dates: Vec<String>,
    /// Distinct categories present in the records, ascending by name
    pub categories: Vec<Category>,
}

impl DailyBreakdown {
    /// Totals for one category aligned with `dates` (zero where absent)
    pub fn series(&self, category: Category) -> Vec<f64> {
        self.dates
            .iter()
            .map(|date| {
                self.by_date
                    .get(date)
                    .and_then(|cats| cats.get(&category))
                    .copied()
                    .unwrap_or(0.0)
            })
            .collect()
    }

    /// Sum across categories for one date
    pub fn day_total(&self, date: &str) -> f64 {
        self.by_date
            .get(date)
            .map(|cats| cats.values().sum())
            .unwrap_or(0.0)
    }

    /// Whether there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Share of total spending held by one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: f64,
    /// Percentage of all spending (0-100)
    pub percentage: f64,
}

/// Sum per category, omitting categories with no records
pub fn totals_by_category(records: &[ExpenseRecord]) -> BTreeMap<Category, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.category).or_insert(0.0) += record.amount;
    }
    totals
}

/// Sum per category over the full category set, zero-filled
pub fn spent_by_category(records: &[ExpenseRecord]) -> BTreeMap<Category, f64> {
    let mut spent: BTreeMap<Category, f64> = Category::ALL.iter().map(|c| (*c, 0.0)).collect();
    for record in records {
        *spent.entry(record.category).or_insert(0.0) += record.amount;
    }
    spent
}

/// Sum of every record in one category
pub fn spent_in_category(records: &[ExpenseRecord], category: Category) -> f64 {
    records
        .iter()
        .filter(|r| r.category == category)
        .map(|r| r.amount)
        .sum()
}

/// Sum of every record
pub fn total_spent(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(|r| r.amount).sum()
}

/// Group spending by date, then by category
pub fn daily_breakdown(records: &[ExpenseRecord]) -> DailyBreakdown {
    let mut by_date: BTreeMap<String, BTreeMap<Category, f64>> = BTreeMap::new();

    for record in records {
        *by_date
            .entry(record.date.clone())
            .or_default()
            .entry(record.category)
            .or_insert(0.0) += record.amount;
    }

    let dates: Vec<String> = by_date.keys().cloned().collect();

    let mut categories: Vec<Category> = Vec::new();
    for cats in by_date.values() {
        for category in cats.keys() {
            if !categories.contains(category) {
                categories.push(*category);
            }
        }
    }
    categories.sort_by_key(|c| c.name());

    DailyBreakdown {
        by_date,
        dates,
        categories,
    }
}

/// Each present category's share of total spending, largest first
pub fn category_shares(records: &[ExpenseRecord]) -> Vec<CategoryShare> {
    let total = total_spent(records);

    let mut shares: Vec<CategoryShare> = totals_by_category(records)
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category,
            total: amount,
            percentage: if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    shares.sort_by(|a, b| b.total.total_cmp(&a.total));
    shares
}
