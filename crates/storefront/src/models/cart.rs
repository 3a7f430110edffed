//! The session-backed cart store.
//!
//! [`SessionCart`] is the authoritative cart for one visitor: it loads
//! the persisted snapshot at the start of a request, applies mutations
//! through the [`Cart`] aggregate, and writes the full snapshot back
//! after every change. `clear` removes the session entry entirely rather
//! than writing an empty list - an observer can tell "never used" from
//! "emptied".

use tower_sessions::Session;

use shopspot_core::{Cart, Product, ProductId};

use crate::error::Result;
use crate::models::session_keys;

/// A visitor's cart, loaded from and mirrored to their session.
#[derive(Debug)]
pub struct SessionCart {
    session: Session,
    cart: Cart,
}

impl SessionCart {
    /// Load the cart snapshot from the session.
    ///
    /// A malformed snapshot is discarded: the corrupt entry is deleted
    /// and the visitor continues with an empty cart.
    pub async fn load(session: Session) -> Self {
        let (cart, purge) = recover(session.get::<Cart>(session_keys::CART).await);

        if purge {
            if let Err(err) = session.remove::<serde_json::Value>(session_keys::CART).await {
                tracing::warn!(error = %err, "failed to delete malformed cart snapshot");
            }
        }

        Self { session, cart }
    }

    /// The current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a product and persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the session write fails.
    pub async fn add(&mut self, product: &Product) -> Result<()> {
        self.cart.add(product);
        self.save().await
    }

    /// Remove a product's line (no-op if absent) and persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the session write fails.
    pub async fn remove(&mut self, id: ProductId) -> Result<()> {
        self.cart.remove(id);
        self.save().await
    }

    /// Set a line's quantity (0 or below removes the line) and persist
    /// the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the session write fails.
    pub async fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Result<()> {
        self.cart.update_quantity(id, quantity);
        self.save().await
    }

    /// Empty the cart and delete the persisted snapshot entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the session write fails.
    pub async fn clear(&mut self) -> Result<()> {
        self.cart.clear();
        self.session
            .remove::<serde_json::Value>(session_keys::CART)
            .await?;
        Ok(())
    }

    /// Write the full snapshot to the session.
    async fn save(&self) -> Result<()> {
        self.session.insert(session_keys::CART, &self.cart).await?;
        Ok(())
    }
}

/// Decide how to proceed from a snapshot read: the recovered cart, and
/// whether the stored entry must be purged.
fn recover<E: std::fmt::Display>(loaded: std::result::Result<Option<Cart>, E>) -> (Cart, bool) {
    match loaded {
        Ok(Some(cart)) => (cart, false),
        Ok(None) => (Cart::new(), false),
        Err(err) => {
            tracing::warn!(error = %err, "discarding malformed cart snapshot");
            (Cart::new(), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            image: String::new(),
            price: 100,
            category: "Home".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_recover_present_snapshot() {
        let mut cart = Cart::new();
        cart.add(&product(1));

        let (recovered, purge) = recover::<&str>(Ok(Some(cart.clone())));
        assert_eq!(recovered, cart);
        assert!(!purge);
    }

    #[test]
    fn test_recover_absent_snapshot_is_empty() {
        let (recovered, purge) = recover::<&str>(Ok(None));
        assert!(recovered.is_empty());
        assert!(!purge);
    }

    #[test]
    fn test_recover_malformed_snapshot_purges() {
        let (recovered, purge) = recover(Err("invalid type: map, expected a sequence"));
        assert!(recovered.is_empty());
        assert!(purge);
    }
}
