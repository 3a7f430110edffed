//! Core types for ShopSpot.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod money;
pub mod product;

pub use cart::{Cart, CartLine};
pub use id::*;
pub use money::{OrderSummary, format_rupees};
pub use product::{Product, SortOption};
