//! HTTP DTOs for survey endpoints.
//!
//! The question catalog is already designed for serialization, so the
//! catalog endpoint re-exports the domain type directly.

pub use crate::domain::catalog::QuestionCatalog;

use serde::{Deserialize, Serialize};

use crate::application::SubmissionReceipt;
use crate::domain::catalog::StyleCategory;
use crate::domain::foundation::{Percentage, Timestamp, VoteId};
use crate::domain::survey::AnswerSheet;

/// Request body for submitting one participant's answers.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponseRequest {
    /// Free-text participant name.
    pub participant_name: String,
    /// Question id -> selected option ids.
    pub answers: AnswerSheet,
}

/// The individual result shown right after submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub id: VoteId,
    pub participant: String,
    pub style: StyleCategory,
    pub style_label: &'static str,
    pub style_description: &'static str,
    pub submitted_at: Timestamp,
    /// Participants submitted so far, including this one.
    pub total_participants: u64,
    /// Share of participants with the same dominant style.
    pub same_style_percentage: Percentage,
}

impl From<SubmissionReceipt> for SubmissionView {
    fn from(receipt: SubmissionReceipt) -> Self {
        Self {
            id: receipt.record.id,
            participant: receipt.record.participant.as_str().to_string(),
            style: receipt.record.style,
            style_label: receipt.record.style.label(),
            style_description: receipt.style_description,
            submitted_at: receipt.record.submitted_at,
            total_participants: receipt.total_participants,
            same_style_percentage: receipt.same_style_percentage,
        }
    }
}
