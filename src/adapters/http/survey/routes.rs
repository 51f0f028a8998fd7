//! HTTP routes for survey endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::AppState;
use super::handlers::{get_questions, submit_response};

/// Creates the survey router with all routes.
pub fn survey_routes(state: AppState) -> Router {
    Router::new()
        // GET /api/survey/questions
        .route("/api/survey/questions", get(get_questions))
        // POST /api/survey/responses
        .route("/api/survey/responses", post(submit_response))
        .with_state(state)
}
