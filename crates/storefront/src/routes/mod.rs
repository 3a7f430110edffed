//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - View chooser (catalog or checkout)
//! GET  /health           - Health check
//!
//! # Products
//! GET  /products         - Product grid fragment (HTMX; q, category, sort)
//!
//! # Cart (HTMX fragments)
//! GET  /cart             - Cart panel fragment
//! POST /cart/add         - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update      - Update quantity (returns cart panel fragment)
//! POST /cart/remove      - Remove line (returns cart panel fragment)
//! GET  /cart/count       - Cart count badge fragment
//!
//! # Checkout
//! POST /checkout         - Enter checkout (redirects to /?checkout=true)
//! POST /checkout/return  - Return to the catalog (redirects to /)
//! POST /checkout/submit  - Validate and place the order
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // View chooser
        .route("/", get(home::home))
        // Product grid fragment
        .route("/products", get(products::grid))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout transitions and submission
        .route("/checkout", post(checkout::enter))
        .route("/checkout/return", post(checkout::return_to_shop))
        .route("/checkout/submit", post(checkout::submit))
}
