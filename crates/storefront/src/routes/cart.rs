//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page
//! reloads. The cart itself lives in the visitor's session as a full
//! serialized snapshot; every mutation rewrites it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use shopspot_core::{Cart, CartLine, ProductId, format_rupees};

use crate::error::{AppError, Result};
use crate::models::SessionCart;
use crate::nav;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_items: u64,
    pub total_price: String,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: format_rupees(Decimal::ZERO),
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            total_items: cart.total_items(),
            total_price: format_rupees(Decimal::from(cart.total_price())),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.as_i32(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            quantity: line.quantity,
            price: format_rupees(Decimal::from(line.product.price)),
            line_price: format_rupees(Decimal::from(line.line_total())),
        }
    }
}

// =============================================================================
// Forms & Templates
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart panel fragment.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = SessionCart::load(session).await;

    CartPanelTemplate {
        cart: CartView::from(cart.cart()),
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the cart count badge with an HTMX trigger to refresh the
/// other cart elements. Unless the visitor is on the checkout view, a
/// second trigger opens the cart panel.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let on_checkout = nav::current(&session).await.is_checkout();
    let mut cart = SessionCart::load(session).await;
    cart.add(product).await?;

    let triggers = if on_checkout {
        "cart-updated"
    } else {
        "cart-updated, cart-open"
    };

    Ok((
        AppendHeaders([("HX-Trigger", triggers)]),
        CartCountTemplate {
            count: cart.cart().total_items(),
        },
    )
        .into_response())
}

/// Update a cart line's quantity (HTMX).
///
/// A quantity of 0 or below removes the line.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Response> {
    let mut cart = SessionCart::load(session).await;
    cart.update_quantity(ProductId::new(form.product_id), form.quantity)
        .await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartPanelTemplate {
            cart: CartView::from(cart.cart()),
        },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let mut cart = SessionCart::load(session).await;
    cart.remove(ProductId::new(form.product_id)).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartPanelTemplate {
            cart: CartView::from(cart.cart()),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = SessionCart::load(session).await;

    CartCountTemplate {
        count: cart.cart().total_items(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopspot_core::Product;

    fn product(id: i32, price: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            image: String::new(),
            price,
            category: "Home".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_cart_view_formats_totals() {
        let mut cart = Cart::new();
        cart.add(&product(1, 8_999));
        cart.add(&product(1, 8_999));

        let view = CartView::from(&cart);
        assert_eq!(view.total_items, 2);
        assert_eq!(view.total_price, "₹17,998");
        assert_eq!(view.items[0].price, "₹8,999");
        assert_eq!(view.items[0].line_price, "₹17,998");
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.total_items, 0);
        assert_eq!(view.total_price, "₹0");
    }
}
