//! The top-level view chooser.
//!
//! `GET /` decides which of the two views renders. The decision comes
//! from [`crate::nav`]: the session navigation state is reconciled
//! against the URL marker, then either the catalog or the checkout view
//! is returned. This is the only full-page route in the storefront.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::nav::{self, NavigationState};
use crate::routes::checkout;
use crate::search::CatalogQuery;
use crate::state::AppState;

/// Query parameters for the view chooser.
///
/// `checkout=true` is the navigation marker; the rest prefill the
/// catalog controls so filtered views are shareable as URLs.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub checkout: Option<bool>,
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sort: shopspot_core::SortOption,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub categories: Vec<String>,
    pub query: CatalogQuery,
    pub scroll_y: Option<f64>,
}

/// Choose and render the active view.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HomeQuery>,
) -> Response {
    let url_checkout = query.checkout == Some(true);

    match nav::reconcile(&session, url_checkout).await {
        NavigationState::Checkout => checkout::page(session).await.into_response(),
        NavigationState::Catalog => {
            let scroll_y = nav::take_scroll_position(&session).await;

            CatalogTemplate {
                categories: state.catalog().categories().to_vec(),
                query: CatalogQuery {
                    q: query.q,
                    category: query.category,
                    sort: query.sort,
                },
                scroll_y,
            }
            .into_response()
        }
    }
}
