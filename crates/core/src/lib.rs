//! ShopSpot Core - Shared domain types.
//!
//! This crate provides the types shared by every ShopSpot component:
//! - `storefront` - The customer-facing shop
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP,
//! no sessions. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, products, the cart aggregate, and money

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
