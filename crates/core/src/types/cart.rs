//! The shopping cart aggregate.
//!
//! A [`Cart`] is an insertion-ordered sequence of [`CartLine`]s keyed by
//! product id: at most one line per product, quantity always >= 1. The
//! totals are derived from the lines on every read and are never stored,
//! so they cannot drift from the line sequence.
//!
//! The cart serializes as a bare array of lines - that array is the
//! canonical persisted snapshot shape.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::product::Product;

/// One product-plus-quantity entry in the cart.
///
/// Serialized flat: the product fields and `quantity` sit at the same
/// level, matching the persisted snapshot shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    #[serde(flatten)]
    pub product: Product,
    /// Number of units. Always >= 1; a line at 0 is removed, not kept.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}

/// The cart aggregate: an insertion-ordered sequence of lines.
///
/// New products append to the end; existing products keep their position
/// when their quantity changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The current line sequence, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up the line for a product, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented in place (position unchanged); otherwise a new line
    /// with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove the line for a product. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of 0 or below behaves exactly like [`Cart::remove`].
    /// Updating a product that is not in the cart is a no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total item count: the sum of line quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Total price: the sum of price times quantity over all lines.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, price: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            image: format!("https://img.example/{id}.jpg"),
            price,
            category: "Electronics".to_string(),
            description: "A test product".to_string(),
        }
    }

    #[test]
    fn test_add_new_product_appends_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.add(&product(2, 50));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product.id, ProductId::new(1));
        assert_eq!(cart.lines()[1].product.id, ProductId::new(2));
    }

    #[test]
    fn test_add_existing_product_increments_in_place() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.add(&product(2, 50));
        cart.add(&product(1, 100));

        // Position unchanged, quantity bumped
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product.id, ProductId::new(1));
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_add_sequence_property() {
        // Distinct lines == distinct ids added; each quantity == add count.
        let adds = [1, 2, 1, 3, 2, 1];
        let mut cart = Cart::new();
        for id in adds {
            cart.add(&product(id, 10));
        }

        assert_eq!(cart.len(), 3);
        for id in [1, 2, 3] {
            let expected = adds.iter().filter(|&&a| a == id).count() as u32;
            let line = cart.line(ProductId::new(id)).expect("line present");
            assert_eq!(line.quantity, expected, "quantity for product {id}");
        }
    }

    #[test]
    fn test_scenario_two_lines_three_items() {
        // Add(A), Add(A), Add(B) => [A qty 2, B qty 1], total_items 3
        let a = product(1, 100);
        let b = product(2, 50);
        let mut cart = Cart::new();
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_scenario_total_price() {
        // A(price 100, qty 2) + B(price 50, qty 1) => 250
        let a = product(1, 100);
        let b = product(2, 50);
        let mut cart = Cart::new();
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.total_price(), 250);
    }

    #[test]
    fn test_remove_deletes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.add(&product(2, 50));
        cart.remove(ProductId::new(1));

        assert_eq!(cart.len(), 1);
        assert!(cart.line(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.remove(ProductId::new(99));

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.update_quantity(ProductId::new(1), 5);

        assert_eq!(cart.line(ProductId::new(1)).expect("line").quantity, 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_zero_or_below_equals_remove() {
        for quantity in [0, -1, -100] {
            let mut updated = Cart::new();
            updated.add(&product(1, 100));
            updated.add(&product(2, 50));
            updated.update_quantity(ProductId::new(1), quantity);

            let mut removed = Cart::new();
            removed.add(&product(1, 100));
            removed.add(&product(2, 50));
            removed.remove(ProductId::new(1));

            assert_eq!(updated, removed, "quantity {quantity}");
        }
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.update_quantity(ProductId::new(99), 5);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_clear_leaves_no_lines() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn test_totals_track_every_mutation() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        assert_eq!((cart.total_items(), cart.total_price()), (1, 100));

        cart.add(&product(1, 100));
        assert_eq!((cart.total_items(), cart.total_price()), (2, 200));

        cart.add(&product(2, 50));
        assert_eq!((cart.total_items(), cart.total_price()), (3, 250));

        cart.update_quantity(ProductId::new(2), 4);
        assert_eq!((cart.total_items(), cart.total_price()), (6, 400));

        cart.remove(ProductId::new(1));
        assert_eq!((cart.total_items(), cart.total_price()), (4, 200));
    }

    #[test]
    fn test_snapshot_round_trip_preserves_order_and_quantities() {
        let mut cart = Cart::new();
        cart.add(&product(3, 30));
        cart.add(&product(1, 10));
        cart.add(&product(3, 30));
        cart.add(&product(2, 20));

        let snapshot = serde_json::to_string(&cart).expect("serialize");
        let restored: Cart = serde_json::from_str(&snapshot).expect("deserialize");

        assert_eq!(restored, cart);
        let ids: Vec<i32> = restored
            .lines()
            .iter()
            .map(|line| line.product.id.as_i32())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_snapshot_shape_is_flat_array() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));

        let value = serde_json::to_value(&cart).expect("serialize");
        let lines = value.as_array().expect("cart serializes as an array");
        let line = lines[0].as_object().expect("line is an object");
        // Product fields and quantity at the same level
        assert_eq!(line["id"], 1);
        assert_eq!(line["price"], 100);
        assert_eq!(line["quantity"], 1);
    }

    #[test]
    fn test_malformed_snapshot_fails_to_parse() {
        // The storefront treats this as an empty cart and deletes the entry.
        assert!(serde_json::from_str::<Cart>("{\"not\": \"a cart\"}").is_err());
        assert!(serde_json::from_str::<Cart>("[{\"id\": 1}]").is_err());
    }
}
