//! Budget ceiling model
//!
//! A `BudgetMap` always holds one ceiling per category. A ceiling of zero
//! means no limit has been set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;

/// Per-category budget ceilings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct BudgetMap {
    ceilings: BTreeMap<Category, f64>,
}

impl BudgetMap {
    /// Create a map with every ceiling set to zero
    pub fn new() -> Self {
        Self {
            ceilings: Category::ALL.iter().map(|c| (*c, 0.0)).collect(),
        }
    }

    /// Get the ceiling for a category
    pub fn get(&self, category: Category) -> f64 {
        self.ceilings.get(&category).copied().unwrap_or(0.0)
    }

    /// Set the ceiling for a category without validation
    ///
    /// Callers go through `LedgerStore::set_budget`, which checks the value.
    pub(crate) fn set(&mut self, category: Category, ceiling: f64) {
        self.ceilings.insert(category, ceiling);
    }

    /// Whether a limit has been set for the category
    pub fn is_limited(&self, category: Category) -> bool {
        self.get(category) > 0.0
    }

    /// Iterate over all categories and their ceilings in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.ceilings.iter().map(|(c, v)| (*c, *v))
    }
}

impl Default for BudgetMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a budget ceiling is a finite, non-negative number
pub fn validate_ceiling(ceiling: f64) -> Result<(), BudgetValidationError> {
    if !ceiling.is_finite() || ceiling < 0.0 {
        return Err(BudgetValidationError::InvalidCeiling(ceiling));
    }
    Ok(())
}

impl TryFrom<BTreeMap<String, f64>> for BudgetMap {
    type Error = BudgetValidationError;

    /// Build a total map from the on-disk form, zero-filling absent categories
    ///
    /// Keys must match category labels exactly, as expense records do.
    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut map = Self::new();
        for (name, ceiling) in raw {
            let category = Category::from_label(&name)
                .ok_or_else(|| BudgetValidationError::UnknownCategory(name.clone()))?;
            validate_ceiling(ceiling)?;
            map.set(category, ceiling);
        }
        Ok(map)
    }
}

impl From<BudgetMap> for BTreeMap<String, f64> {
    fn from(map: BudgetMap) -> Self {
        map.ceilings
            .into_iter()
            .map(|(c, v)| (c.name().to_string(), v))
            .collect()
    }
}

/// Validation errors for budget ceilings
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    InvalidCeiling(f64),
    UnknownCategory(String),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCeiling(v) => {
                write!(f, "Budget must be a number >= 0, got {}", v)
            }
            Self::UnknownCategory(name) => write!(
                f,
                "Unknown budget category '{}' (expected one of: {})",
                name,
                Category::valid_names()
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_total_and_zero() {
        let map = BudgetMap::new();
        assert_eq!(map.iter().count(), Category::ALL.len());
        for category in Category::ALL {
            assert_eq!(map.get(category), 0.0);
            assert!(!map.is_limited(category));
        }
    }

    #[test]
    fn test_set() {
        let mut map = BudgetMap::new();
        map.set(Category::Food, 70.0);
        assert_eq!(map.get(Category::Food), 70.0);
        assert!(map.is_limited(Category::Food));
    }

    #[test]
    fn test_deserialize_fills_missing_categories() {
        let map: BudgetMap = serde_json::from_str(r#"{"Food": 120.5}"#).unwrap();
        assert_eq!(map.get(Category::Food), 120.5);
        assert_eq!(map.get(Category::Transport), 0.0);
        assert_eq!(map.iter().count(), 4);
    }

    #[test]
    fn test_deserialize_rejects_unknown_or_negative() {
        assert!(serde_json::from_str::<BudgetMap>(r#"{"Rent": 10}"#).is_err());
        assert!(serde_json::from_str::<BudgetMap>(r#"{"Food": -1}"#).is_err());
    }

    #[test]
    fn test_deserialize_keys_are_case_sensitive() {
        let err = serde_json::from_str::<BudgetMap>(r#"{"food": 1, "Food": 2}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown budget category 'food'"));
    }

    #[test]
    fn test_serializes_every_category() {
        let mut map = BudgetMap::new();
        map.set(Category::Shopping, 50.0);
        let value = serde_json::to_value(&map).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["Shopping"], 50.0);
        assert_eq!(obj["Other"], 0.0);
    }

    #[test]
    fn test_validate_ceiling() {
        assert!(validate_ceiling(0.0).is_ok());
        assert!(validate_ceiling(10.0).is_ok());
        assert!(validate_ceiling(-0.01).is_err());
        assert!(validate_ceiling(f64::NAN).is_err());
    }
}
