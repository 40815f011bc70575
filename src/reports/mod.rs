//! Reports module
//!
//! Derived views over the ledger: category totals, daily breakdowns and
//! category shares.

pub mod spending;

pub use spending::{
    category_shares, daily_breakdown, spent_by_category, spent_in_category, total_spent,
    totals_by_category, CategoryShare, DailyBreakdown,
};
