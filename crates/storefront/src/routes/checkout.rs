//! Checkout route handlers.
//!
//! The checkout view renders the shipping form and the order summary.
//! Submission validates every field server-side, collecting errors into
//! a field-to-message mapping that renders inline; a valid submission
//! runs the stubbed order-placement operation, clears the cart, and
//! renders the success view.

use std::sync::LazyLock;
use std::time::Duration;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use shopspot_core::OrderSummary;

use crate::error::Result;
use crate::filters;
use crate::models::SessionCart;
use crate::nav;
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Length of a generated order reference.
const ORDER_REFERENCE_LEN: usize = 8;

/// Days until the estimated delivery date.
const DELIVERY_ESTIMATE_DAYS: i64 = 5;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").expect("valid mobile regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));
static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid pincode regex"));

/// States selectable in the shipping form.
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Puducherry",
];

// =============================================================================
// Forms & Validation
// =============================================================================

/// Shipping form data. Missing fields deserialize as empty strings and
/// fail validation rather than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub pincode: String,
    pub city: String,
    pub state: String,
}

/// Per-field validation messages. `None` means the field is valid.
#[derive(Debug, Clone, Default)]
pub struct CheckoutErrors {
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl CheckoutErrors {
    /// Whether every field passed validation.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.mobile.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.pincode.is_none()
            && self.city.is_none()
            && self.state.is_none()
    }
}

impl CheckoutForm {
    /// Validate every field, collecting messages per field.
    #[must_use]
    pub fn validate(&self) -> CheckoutErrors {
        let mut errors = CheckoutErrors::default();

        if self.full_name.trim().is_empty() {
            errors.full_name = Some("Full name is required".to_string());
        }

        let mobile = self.mobile.trim();
        if mobile.is_empty() {
            errors.mobile = Some("Mobile number is required".to_string());
        } else if !MOBILE_RE.is_match(mobile) {
            errors.mobile =
                Some("Please enter a valid 10-digit Indian mobile number".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !EMAIL_RE.is_match(email) {
            errors.email = Some("Please enter a valid email address".to_string());
        }

        if self.address.trim().is_empty() {
            errors.address = Some("Address is required".to_string());
        }

        let pincode = self.pincode.trim();
        if pincode.is_empty() {
            errors.pincode = Some("Pincode is required".to_string());
        } else if !PINCODE_RE.is_match(pincode) {
            errors.pincode = Some("Please enter a valid 6-digit pincode".to_string());
        }

        if self.city.trim().is_empty() {
            errors.city = Some("City is required".to_string());
        }

        let state = self.state.trim();
        if state.is_empty() {
            errors.state = Some("State is required".to_string());
        } else if !INDIAN_STATES.contains(&state) {
            errors.state = Some("Please select a valid state".to_string());
        }

        errors
    }

    /// Whether the given state is the one selected in the form (for
    /// marking the selected option in templates).
    #[must_use]
    pub fn selected(&self, state: &str) -> bool {
        self.state == state
    }
}

// =============================================================================
// Views & Templates
// =============================================================================

/// A placed order, as shown on the success view.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub full_name: String,
    pub email: String,
    pub reference: String,
    pub delivery_date: String,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/index.html")]
pub struct CheckoutPageTemplate {
    pub cart: CartView,
    pub summary: OrderSummary,
    pub form: CheckoutForm,
    pub errors: CheckoutErrors,
    pub states: &'static [&'static str],
}

/// Checkout content fragment template (re-rendered on validation errors).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_content.html")]
pub struct CheckoutContentTemplate {
    pub cart: CartView,
    pub summary: OrderSummary,
    pub form: CheckoutForm,
    pub errors: CheckoutErrors,
    pub states: &'static [&'static str],
}

/// Order success fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_success.html")]
pub struct OrderSuccessTemplate {
    pub order: OrderView,
}

/// Build the checkout page for the current session cart.
pub async fn page(session: Session) -> CheckoutPageTemplate {
    let cart = SessionCart::load(session).await;
    let summary = OrderSummary::from_subtotal(cart.cart().total_price());

    CheckoutPageTemplate {
        cart: CartView::from(cart.cart()),
        summary,
        form: CheckoutForm::default(),
        errors: CheckoutErrors::default(),
        states: INDIAN_STATES,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Enter-checkout form data.
#[derive(Debug, Deserialize)]
pub struct EnterCheckoutForm {
    #[serde(default)]
    pub scroll_y: Option<f64>,
}

/// Transition to the checkout view.
#[instrument(skip(session))]
pub async fn enter(session: Session, Form(form): Form<EnterCheckoutForm>) -> Redirect {
    nav::enter_checkout(&session, form.scroll_y).await
}

/// Transition back to the catalog view.
#[instrument(skip(session))]
pub async fn return_to_shop(session: Session) -> Redirect {
    nav::return_to_catalog(&session).await
}

/// Submit the checkout form.
///
/// Invalid input re-renders the checkout content with inline errors and
/// the submitted values. Valid input places the order, clears the cart,
/// and renders the success view.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let mut cart = SessionCart::load(session).await;

    if cart.cart().is_empty() {
        // Nothing to order; back to the catalog
        return Ok(Redirect::to(nav::CATALOG_URL).into_response());
    }

    let errors = form.validate();
    if !errors.is_empty() {
        let summary = OrderSummary::from_subtotal(cart.cart().total_price());
        return Ok(CheckoutContentTemplate {
            cart: CartView::from(cart.cart()),
            summary,
            form,
            errors,
            states: INDIAN_STATES,
        }
        .into_response());
    }

    let order = place_order(&form, state.config().processing_delay).await;
    cart.clear().await?;
    tracing::info!(reference = %order.reference, "order placed");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        OrderSuccessTemplate { order },
    )
        .into_response())
}

/// The stubbed order-placement operation.
///
/// Stands in for a payment/order API call: it takes the configured
/// processing time to complete and yields the order reference and the
/// delivery estimate. The success state is driven by this operation's
/// completion, not by a timer in the view layer.
async fn place_order(form: &CheckoutForm, processing_delay: Duration) -> OrderView {
    tokio::time::sleep(processing_delay).await;

    let delivery = Utc::now() + chrono::Duration::days(DELIVERY_ESTIMATE_DAYS);

    OrderView {
        full_name: form.full_name.trim().to_string(),
        email: form.email.trim().to_string(),
        reference: order_reference(),
        delivery_date: delivery.format("%d/%m/%Y").to_string(),
    }
}

/// Generate an order reference: 8 uppercase alphanumeric characters.
fn order_reference() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(ORDER_REFERENCE_LEN)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}
