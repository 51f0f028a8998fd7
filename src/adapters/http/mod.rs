//! HTTP surface: the JSON API the participant form and the presenter
//! dashboard consume.

pub mod dashboard;
mod error;
pub mod share;
pub mod survey;

pub use error::{ApiError, ErrorResponse};

use std::sync::Arc;

use axum::Router;

use crate::application::{NarrativeService, ShareLink, SurveyService};

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub survey: Arc<SurveyService>,
    pub narrative: Arc<NarrativeService>,
    pub share_link: Arc<ShareLink>,
}

impl AppState {
    /// Bundles the owned state objects for the router.
    pub fn new(
        survey: Arc<SurveyService>,
        narrative: Arc<NarrativeService>,
        share_link: Arc<ShareLink>,
    ) -> Self {
        Self {
            survey,
            narrative,
            share_link,
        }
    }
}

/// Assembles the full API router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(survey::survey_routes(state.clone()))
        .merge(dashboard::dashboard_routes(state.clone()))
        .merge(share::share_routes(state))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::ai::MockAiProvider;
    use crate::domain::catalog::default_catalog;
    use crate::domain::survey::StyleClassifier;

    /// Fresh state over the default catalog and a mock provider.
    pub(crate) fn test_state() -> AppState {
        state_with_provider(MockAiProvider::new())
    }

    pub(crate) fn state_with_provider(provider: MockAiProvider) -> AppState {
        AppState::new(
            Arc::new(SurveyService::new(
                Arc::new(default_catalog().clone()),
                StyleClassifier::new(),
            )),
            Arc::new(NarrativeService::new(Arc::new(provider), 1024)),
            Arc::new(ShareLink::new("http://localhost:8080/")),
        )
    }
}
