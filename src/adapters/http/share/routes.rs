//! HTTP routes for share-link endpoints.

use axum::routing::get;
use axum::Router;

use super::super::AppState;
use super::handlers::{get_share_link, put_share_link};

/// Creates the share-link router with all routes.
pub fn share_routes(state: AppState) -> Router {
    Router::new()
        // GET + PUT /api/share/link
        .route("/api/share/link", get(get_share_link).put(put_share_link))
        .with_state(state)
}
