//! HTTP handlers for dashboard endpoints.

use axum::extract::{Json, State};

use crate::application::NarrativeError;

use super::super::{ApiError, AppState};
use super::dto::{AggregatedStats, NarrativeView, ParticipantCountView, SimulateRequest};

/// Upper bound for one simulate batch.
const MAX_SIMULATED_BATCH: usize = 100;

impl From<NarrativeError> for ApiError {
    fn from(error: NarrativeError) -> Self {
        match error {
            NarrativeError::GenerationInProgress => ApiError::conflict(
                "GENERATION_IN_PROGRESS",
                "a narrative generation is already in progress",
            ),
        }
    }
}

/// GET /api/dashboard/stats
///
/// Returns the current aggregated statistics.
pub async fn get_stats(State(state): State<AppState>) -> Json<AggregatedStats> {
    Json(state.survey.stats())
}

/// POST /api/dashboard/simulate
///
/// Appends a batch of randomly answered votes (default five).
pub async fn simulate(
    State(state): State<AppState>,
    request: Option<Json<SimulateRequest>>,
) -> Result<Json<ParticipantCountView>, ApiError> {
    let count = request
        .map(|Json(r)| r.count)
        .unwrap_or_default()
        .unwrap_or(crate::application::DEFAULT_SIMULATION_BATCH);

    if count == 0 || count > MAX_SIMULATED_BATCH {
        return Err(ApiError::bad_request(format!(
            "count must be between 1 and {}",
            MAX_SIMULATED_BATCH
        )));
    }

    let total_participants = state.survey.simulate(count);
    Ok(Json(ParticipantCountView { total_participants }))
}

/// POST /api/dashboard/reset
///
/// Clears all vote records.
pub async fn reset(State(state): State<AppState>) -> Json<ParticipantCountView> {
    state.survey.reset();
    Json(ParticipantCountView {
        total_participants: 0,
    })
}

/// POST /api/dashboard/narrative
///
/// Runs one AI narrative generation over the current statistics.
pub async fn generate_narrative(
    State(state): State<AppState>,
) -> Result<Json<NarrativeView>, ApiError> {
    let stats = state.survey.stats();
    if stats.total_participants == 0 {
        return Err(ApiError::conflict(
            "NO_PARTICIPANTS",
            "no submissions to summarize yet",
        ));
    }

    let narrative = state
        .narrative
        .generate(&stats, state.survey.catalog())
        .await?;

    Ok(Json(NarrativeView { narrative }))
}
