//! Budget alert evaluation
//!
//! Classifies how a category's spending compares with its ceiling and decides
//! whether a notice is warranted. Nothing here displays anything: callers get
//! a `Notice` back and choose how to surface it.

use std::fmt;

use crate::models::{Category, LedgerState};
use crate::reports::spending::spent_in_category;

/// Fraction of the ceiling at which a category counts as near its limit
pub const NEAR_LIMIT_RATIO: f64 = 0.9;

/// Budget status of a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    /// No ceiling set
    Unlimited,
    /// Below 90% of the ceiling
    Normal,
    /// Between 90% and 100% of the ceiling, inclusive
    Near,
    /// Over the ceiling
    Exceeded,
}

impl BudgetState {
    /// Classify spending against a ceiling
    pub fn classify(spent: f64, ceiling: f64) -> Self {
        if ceiling <= 0.0 {
            Self::Unlimited
        } else if spent > ceiling {
            Self::Exceeded
        } else if spent >= NEAR_LIMIT_RATIO * ceiling {
            Self::Near
        } else {
            Self::Normal
        }
    }

    /// Short marker for terminal output
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Unlimited | Self::Normal => "",
            Self::Near => "⚠",
            Self::Exceeded => "✗",
        }
    }
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "No limit"),
            Self::Normal => write!(f, "OK"),
            Self::Near => write!(f, "Near limit"),
            Self::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// Evaluated budget figures for a category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: Category,
    pub state: BudgetState,
    pub spent: f64,
    pub ceiling: f64,
    /// `ceiling - spent` when a ceiling is set; negative once exceeded
    pub remaining: Option<f64>,
}

impl BudgetStatus {
    /// Build a status from raw figures
    pub fn new(category: Category, spent: f64, ceiling: f64) -> Self {
        let state = BudgetState::classify(spent, ceiling);
        let remaining = match state {
            BudgetState::Unlimited => None,
            _ => Some(ceiling - spent),
        };

        Self {
            category,
            state,
            spent,
            ceiling,
            remaining,
        }
    }

    /// Percentage of the ceiling used, capped at 100; zero when unlimited
    pub fn progress_percent(&self) -> f64 {
        if self.ceiling > 0.0 {
            (self.spent / self.ceiling * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

/// Kind of budget notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    NearLimit,
    Exceeded,
}

/// A budget notice the caller may show to the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub category: Category,
    pub spent: f64,
    pub ceiling: f64,
}

impl Notice {
    /// One-line title for the notice
    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::NearLimit => "Budget Near Limit",
            NoticeKind::Exceeded => "Budget Exceeded",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::Exceeded => write!(f, "{} budget exceeded!", self.category)?,
            NoticeKind::NearLimit => write!(f, "{} budget nearly reached.", self.category)?,
        }
        write!(f, " Budget: {:.2}, Spent: {:.2}", self.ceiling, self.spent)
    }
}

/// Evaluate one category against the ledger state
pub fn evaluate(state: &LedgerState, category: Category) -> BudgetStatus {
    let spent = spent_in_category(&state.expenses, category);
    BudgetStatus::new(category, spent, state.budgets.get(category))
}

/// Evaluate every category, in display order
pub fn evaluate_all(state: &LedgerState) -> Vec<BudgetStatus> {
    Category::ALL
        .iter()
        .map(|category| evaluate(state, *category))
        .collect()
}

/// Decide whether a category warrants a notice
pub fn should_notify(state: &LedgerState, category: Category) -> Option<Notice> {
    notice_for(&evaluate(state, category))
}

/// Notice for an already evaluated status
pub fn notice_for(status: &BudgetStatus) -> Option<Notice> {
    let kind = match status.state {
        BudgetState::Exceeded => NoticeKind::Exceeded,
        BudgetState::Near => NoticeKind::NearLimit,
        BudgetState::Unlimited | BudgetState::Normal => return None,
    };

    Some(Notice {
        kind,
        category: status.category,
        spent: status.spent,
        ceiling: status.ceiling,
    })
}
