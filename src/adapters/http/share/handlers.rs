//! HTTP handlers for share-link endpoints.

use axum::extract::{Json, State};

use super::super::{ApiError, AppState};
use super::dto::{ShareLinkView, UpdateShareLinkRequest};

/// GET /api/share/link
///
/// Returns the current deep-link URL (the QR payload).
pub async fn get_share_link(State(state): State<AppState>) -> Json<ShareLinkView> {
    Json(ShareLinkView {
        url: state.share_link.get(),
    })
}

/// PUT /api/share/link
///
/// Replaces the deep-link URL with a presenter-edited value.
pub async fn put_share_link(
    State(state): State<AppState>,
    Json(request): Json<UpdateShareLinkRequest>,
) -> Result<Json<ShareLinkView>, ApiError> {
    state
        .share_link
        .set(request.url)
        .map_err(|err| ApiError::validation(err.to_string()))?;

    Ok(Json(ShareLinkView {
        url: state.share_link.get(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::test_state;

    #[tokio::test]
    async fn get_returns_initial_link() {
        let state = test_state();
        let Json(view) = get_share_link(State(state)).await;
        assert_eq!(view.url, "http://localhost:8080/");
    }

    #[tokio::test]
    async fn put_replaces_link() {
        let state = test_state();
        let request = UpdateShareLinkRequest {
            url: "https://pulse.example.com/live".to_string(),
        };

        let Json(view) = put_share_link(State(state.clone()), Json(request))
            .await
            .unwrap();
        assert_eq!(view.url, "https://pulse.example.com/live");

        let Json(view) = get_share_link(State(state)).await;
        assert_eq!(view.url, "https://pulse.example.com/live");
    }

    #[tokio::test]
    async fn put_rejects_blank_link() {
        let state = test_state();
        let request = UpdateShareLinkRequest {
            url: "   ".to_string(),
        };

        let result = put_share_link(State(state.clone()), Json(request)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let Json(view) = get_share_link(State(state)).await;
        assert_eq!(view.url, "http://localhost:8080/");
    }
}
