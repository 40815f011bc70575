//! Expense category model
//!
//! Categories form a fixed, closed set. Every expense belongs to exactly one
//! of them and every budget map carries an entry for each.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Other,
    ];

    /// The label used on disk and in terminal output
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Look up a category by its exact on-disk label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == label)
    }

    /// Comma-separated list of valid labels, for error messages and help text
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment specifiers work in table output
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Parse a category label, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(s) => write!(
                f,
                "Unknown category '{}' (expected one of: {})",
                s,
                Category::valid_names()
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}
