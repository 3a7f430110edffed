//! ShopSpot Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing the full router to be driven in-process by tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod nav;
pub mod routes;
pub mod search;
pub mod state;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the storefront application: session layer plus all routes.
///
/// The binary adds static file serving and request tracing on top;
/// tests drive this router directly.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
