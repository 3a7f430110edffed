//! Product grid route handler.
//!
//! The catalog page loads the grid as an HTMX fragment, so searching,
//! filtering, and sorting never reload the page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use shopspot_core::Product;

use crate::filters;
use crate::search::CatalogQuery;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub price: u32,
    pub category: String,
    pub description: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }
}

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
    pub count: usize,
}

/// Display the product grid fragment.
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let matches = query.apply(state.catalog().products());

    ProductGridTemplate {
        count: matches.len(),
        products: matches.iter().map(ProductCardView::from).collect(),
    }
}
