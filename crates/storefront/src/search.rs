//! Catalog filtering and sorting.
//!
//! The catalog is a dozen records, so search is a deliberate linear scan:
//! a case-insensitive substring match on the product name, an exact
//! category filter, and one of three sort orders.

use serde::Deserialize;

use shopspot_core::{Product, SortOption};

/// Query parameters for the product grid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    /// Search term, matched case-insensitively against product names.
    #[serde(default)]
    pub q: String,
    /// Category filter; empty means all categories.
    #[serde(default)]
    pub category: String,
    /// Sort order.
    #[serde(default)]
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Whether this query filters on the given category (for marking the
    /// selected option in templates).
    #[must_use]
    pub fn is_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Filter and sort the catalog for this query.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let needle = self.q.to_lowercase();

        let mut matches: Vec<Product> = products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .filter(|product| self.category.is_empty() || product.category == self.category)
            .cloned()
            .collect();

        match self.sort {
            SortOption::Default => matches.sort_by_key(|product| product.id),
            SortOption::PriceLowHigh => matches.sort_by_key(|product| product.price),
            SortOption::PriceHighLow => {
                matches.sort_by_key(|product| std::cmp::Reverse(product.price));
            }
        }

        matches
    }
}
