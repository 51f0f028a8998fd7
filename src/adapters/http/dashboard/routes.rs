//! HTTP routes for dashboard endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::AppState;
use super::handlers::{generate_narrative, get_stats, reset, simulate};

/// Creates the dashboard router with all routes.
pub fn dashboard_routes(state: AppState) -> Router {
    Router::new()
        // GET /api/dashboard/stats
        .route("/api/dashboard/stats", get(get_stats))
        // POST /api/dashboard/simulate
        .route("/api/dashboard/simulate", post(simulate))
        // POST /api/dashboard/reset
        .route("/api/dashboard/reset", post(reset))
        // POST /api/dashboard/narrative
        .route("/api/dashboard/narrative", post(generate_narrative))
        .with_state(state)
}
