//! Catalog product types.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A catalog entry.
///
/// Products are immutable and externally supplied: the storefront loads
/// them once at startup and never mutates them. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Price in whole rupees.
    pub price: u32,
    /// Category label (one of a small fixed set per catalog).
    pub category: String,
    /// Free-text description.
    pub description: String,
}

/// Catalog sort orders.
///
/// Serialized in kebab-case so the values can be used directly in query
/// strings and `<option>` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order: ascending by product id.
    #[default]
    Default,
    /// Cheapest first.
    PriceLowHigh,
    /// Most expensive first.
    PriceHighLow,
}

impl SortOption {
    /// Whether this is the catalog-order sort.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    /// Whether this is the cheapest-first sort.
    #[must_use]
    pub const fn is_price_low_high(self) -> bool {
        matches!(self, Self::PriceLowHigh)
    }

    /// Whether this is the most-expensive-first sort.
    #[must_use]
    pub const fn is_price_high_low(self) -> bool {
        matches!(self, Self::PriceHighLow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_option_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SortOption::PriceLowHigh).expect("serialize"),
            "\"price-low-high\""
        );
        let parsed: SortOption = serde_json::from_str("\"price-high-low\"").expect("deserialize");
        assert_eq!(parsed, SortOption::PriceHighLow);
    }

    #[test]
    fn test_sort_option_default() {
        assert_eq!(SortOption::default(), SortOption::Default);
    }
}
