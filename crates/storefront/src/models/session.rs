//! Session key definitions.
//!
//! Everything the storefront remembers between requests lives under
//! these keys in the visitor's session.

/// Session keys for storefront state.
pub mod keys {
    /// Key for the persisted cart snapshot (a serialized array of lines).
    pub const CART: &str = "cart";

    /// Key for the checkout navigation flag; set while the checkout view
    /// is active, absent otherwise.
    pub const SHOW_CHECKOUT: &str = "showCheckout";

    /// Key for the scroll offset saved when entering checkout.
    pub const SCROLL_POSITION: &str = "scrollPosition";
}
