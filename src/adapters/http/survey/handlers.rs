//! HTTP handlers for survey endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;

use crate::application::SurveyError;

use super::super::{ApiError, AppState};
use super::dto::{QuestionCatalog, SubmissionView, SubmitResponseRequest};

impl From<SurveyError> for ApiError {
    fn from(error: SurveyError) -> Self {
        match error {
            SurveyError::InvalidName(err) => ApiError::validation(err.to_string()),
            SurveyError::InvalidAnswers(err) => ApiError::validation(err.to_string()),
        }
    }
}

/// GET /api/survey/questions
///
/// Returns the question catalog for the participant form.
pub async fn get_questions(State(state): State<AppState>) -> Json<QuestionCatalog> {
    Json(state.survey.catalog().clone())
}

/// POST /api/survey/responses
///
/// Accepts one participant's completed answer sheet, classifies it, and
/// returns the individual result with the same-style cohort share.
pub async fn submit_response(
    State(state): State<AppState>,
    Json(request): Json<SubmitResponseRequest>,
) -> Result<(StatusCode, Json<SubmissionView>), ApiError> {
    let receipt = state
        .survey
        .submit(&request.participant_name, request.answers)?;

    Ok((StatusCode::CREATED, Json(receipt.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::test_state;
    use crate::domain::catalog::StyleCategory;
    use crate::domain::survey::AnswerSheet;

    fn submit_body(name: &str) -> SubmitResponseRequest {
        SubmitResponseRequest {
            participant_name: name.to_string(),
            answers: AnswerSheet::new()
                .with("q1", &["q1_a"])
                .with("q2", &["q2_b"])
                .with("q3", &["q3_a"])
                .with("q4", &["q4_a", "q4_b"])
                .with("q5", &["q5_a"]),
        }
    }

    #[tokio::test]
    async fn get_questions_returns_catalog() {
        let state = test_state();
        let Json(catalog) = get_questions(State(state)).await;
        assert_eq!(catalog.len(), 5);
    }

    #[tokio::test]
    async fn submit_returns_created_with_result() {
        let state = test_state();
        let (status, Json(view)) = submit_response(State(state.clone()), Json(submit_body("Ada")))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(view.participant, "Ada");
        assert_eq!(view.style, StyleCategory::Result);
        assert_eq!(view.total_participants, 1);
        assert_eq!(view.same_style_percentage.value(), 100);
        assert_eq!(state.survey.vote_count(), 1);
    }

    #[tokio::test]
    async fn submit_rejects_incomplete_sheet() {
        let state = test_state();
        let request = SubmitResponseRequest {
            participant_name: "Ada".to_string(),
            answers: AnswerSheet::new().with("q1", &["q1_a"]),
        };

        let result = submit_response(State(state.clone()), Json(request)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert_eq!(state.survey.vote_count(), 0);
    }

    #[tokio::test]
    async fn submit_rejects_blank_name() {
        let state = test_state();
        let result = submit_response(State(state), Json(submit_body("  "))).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
