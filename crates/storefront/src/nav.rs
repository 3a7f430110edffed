//! Navigation between the two top-level views.
//!
//! The storefront has exactly two views, catalog and checkout, chosen by
//! a single session-owned [`NavigationState`]. The URL query marker
//! `?checkout=true` is a *projection* of that state: transitions write it
//! via redirect, and every full-page GET reconciles the session to
//! whatever the URL says - that is what makes browser back/forward and
//! hand-edited URLs behave. Fragment endpoints (cart add and friends)
//! have no page URL and read the session state directly.

use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::models::session_keys;

/// URL of the checkout view (the projection of `Checkout` state).
pub const CHECKOUT_URL: &str = "/?checkout=true";

/// URL of the catalog view.
pub const CATALOG_URL: &str = "/";

/// Which of the two top-level views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationState {
    Catalog,
    Checkout,
}

impl NavigationState {
    /// Whether the checkout view is active.
    #[must_use]
    pub const fn is_checkout(self) -> bool {
        matches!(self, Self::Checkout)
    }

    const fn from_marker(url_checkout: bool) -> Self {
        if url_checkout {
            Self::Checkout
        } else {
            Self::Catalog
        }
    }
}

/// Read the current navigation state from the session.
///
/// An unreadable flag falls back to the catalog view.
pub async fn current(session: &Session) -> NavigationState {
    match session.get::<bool>(session_keys::SHOW_CHECKOUT).await {
        Ok(Some(true)) => NavigationState::Checkout,
        Ok(_) => NavigationState::Catalog,
        Err(err) => {
            tracing::warn!(error = %err, "unreadable navigation flag; assuming catalog");
            NavigationState::Catalog
        }
    }
}

/// Reconcile the session state with the URL marker at a full-page GET.
///
/// The URL wins: in-app transitions always write both sides, so a
/// disagreement means history navigation or a hand-edited URL, and the
/// session flag is rewritten to match.
pub async fn reconcile(session: &Session, url_checkout: bool) -> NavigationState {
    let state = NavigationState::from_marker(url_checkout);

    if current(session).await != state {
        let result = if url_checkout {
            session.insert(session_keys::SHOW_CHECKOUT, true).await
        } else {
            session
                .remove::<bool>(session_keys::SHOW_CHECKOUT)
                .await
                .map(|_| ())
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to reconcile navigation flag");
        }
    }

    state
}

/// Transition to the checkout view.
///
/// Stores the caller's scroll offset for later restoration, sets the
/// session flag, and redirects to the URL projection. A failed session
/// write degrades to URL-only navigation: the redirect still happens and
/// the next full-page GET repairs the flag.
pub async fn enter_checkout(session: &Session, scroll_y: Option<f64>) -> Redirect {
    if let Some(y) = scroll_y {
        if let Err(err) = session.insert(session_keys::SCROLL_POSITION, y).await {
            tracing::warn!(error = %err, "failed to save scroll position");
        }
    }

    if let Err(err) = session.insert(session_keys::SHOW_CHECKOUT, true).await {
        tracing::warn!(error = %err, "session write failed; degrading to URL-only navigation");
    }

    Redirect::to(CHECKOUT_URL)
}

/// Transition back to the catalog view.
pub async fn return_to_catalog(session: &Session) -> Redirect {
    if let Err(err) = session.remove::<bool>(session_keys::SHOW_CHECKOUT).await {
        tracing::warn!(error = %err, "session write failed; degrading to URL-only navigation");
    }

    Redirect::to(CATALOG_URL)
}

/// Take the saved scroll offset, removing it from the session.
///
/// Only the catalog view consumes this; rendering the checkout view
/// leaves the saved offset in place.
pub async fn take_scroll_position(session: &Session) -> Option<f64> {
    match session.remove::<f64>(session_keys::SCROLL_POSITION).await {
        Ok(position) => position,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read saved scroll position");
            None
        }
    }
}
