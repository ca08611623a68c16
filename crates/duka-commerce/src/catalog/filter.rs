//! Category filter used by the filter buttons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category identifier meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Which products the grid shows by category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Every product, in catalog order.
    #[default]
    All,
    /// Products whose category equals this name exactly.
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter button's category identifier.
    pub fn from_button(category: &str) -> Self {
        if category == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(category.to_string())
        }
    }

    /// The identifier carried by the matching filter button.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(name) => name,
        }
    }

    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_button() {
        assert_eq!(CategoryFilter::from_button("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_button("phones"),
            CategoryFilter::Category("phones".to_string())
        );
    }

    #[test]
    fn test_category_match_is_exact() {
        let filter = CategoryFilter::from_button("phones");
        assert!(filter.matches("phones"));
        assert!(!filter.matches("Phones"));
        assert!(!filter.matches("phones-accessories"));
        assert!(CategoryFilter::All.matches("anything"));
    }
}
