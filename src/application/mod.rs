//! Application layer: the owned state objects the HTTP adapters are
//! injected with.

mod narrative;
mod share_link;
mod survey_service;

pub use narrative::{build_prompt, NarrativeError, NarrativeService, NARRATIVE_FALLBACK};
pub use share_link::ShareLink;
pub use survey_service::{
    SubmissionReceipt, SurveyError, SurveyService, DEFAULT_SIMULATION_BATCH,
};
