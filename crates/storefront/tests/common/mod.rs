//! Shared test harness: drives the assembled router in-process,
//! threading the session cookie between requests like a browser would.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use tower::ServiceExt;

use shopspot_storefront::app;
use shopspot_storefront::catalog::Catalog;
use shopspot_storefront::config::StorefrontConfig;
use shopspot_storefront::state::AppState;

/// Build the storefront app with the embedded catalog and no
/// order-processing delay.
pub fn test_app() -> Router {
    let config = StorefrontConfig {
        processing_delay: Duration::ZERO,
        ..StorefrontConfig::default()
    };
    let catalog = Catalog::load(None).expect("embedded catalog loads");
    app(AppState::new(config, catalog))
}

/// A single visitor: one app instance and one session cookie.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    pub fn new() -> Self {
        Self::on(test_app())
    }

    /// A visitor on an existing app instance (for multi-visitor tests).
    pub fn on(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// Send a GET request.
    pub async fn get(&mut self, path: &str) -> (StatusCode, HeaderMap, String) {
        self.request("GET", path, None).await
    }

    /// Send a POST request with a urlencoded form body.
    pub async fn post(&mut self, path: &str, form: &str) -> (StatusCode, HeaderMap, String) {
        self.request("POST", path, Some(form)).await
    }

    async fn request(
        &mut self,
        method: &str,
        path: &str,
        form: Option<&str>,
    ) -> (StatusCode, HeaderMap, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.clone());
        }

        let body = match form {
            Some(data) => {
                builder =
                    builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(data.to_string())
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("request builds");
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request succeeds");

        // Carry the session cookie forward like a browser
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let raw = set_cookie.to_str().expect("cookie is valid utf-8");
            if let Some(pair) = raw.split(';').next() {
                self.cookie = Some(pair.to_string());
            }
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body = String::from_utf8(bytes.to_vec()).expect("body is utf-8");

        (status, headers, body)
    }
}

/// The cart count badge markup for a given count.
pub fn badge(count: u64) -> String {
    format!("<span class=\"badge\">{count}</span>")
}
