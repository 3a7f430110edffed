//! The product catalog.
//!
//! Products are loaded once at startup - from the embedded dataset by
//! default, or from a configured JSON file - and never change for the
//! lifetime of the process. Category labels are derived from the
//! products in first-appearance order.

use std::fs;
use std::path::Path;

use thiserror::Error;

use shopspot_core::{Product, ProductId};

/// The embedded default catalog.
const DEFAULT_CATALOG: &str = include_str!("../data/products.json");

/// Errors loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The in-memory product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    /// Load the catalog from a file, or the embedded dataset when `path`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON does not
    /// describe a product list.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::from_json(&raw)
            }
            None => Self::from_json(DEFAULT_CATALOG),
        }
    }

    /// Parse a catalog from raw JSON (an array of products).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a product list.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;

        let mut categories = Vec::new();
        for product in &products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }

        Ok(Self {
            products,
            categories,
        })
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Unique category labels, in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
