//! HTTP DTOs for dashboard endpoints.
//!
//! The aggregated statistics are already designed for serialization, so
//! the stats endpoint re-exports the domain type directly.

pub use crate::domain::survey::AggregatedStats;

use serde::{Deserialize, Serialize};

/// Request body for the simulate control.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulateRequest {
    /// Batch size; defaults to five when omitted.
    pub count: Option<usize>,
}

/// Participant count after a mutation.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantCountView {
    pub total_participants: u64,
}

/// Generated narrative text.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeView {
    /// Markdown text, or the fixed fallback when the provider failed.
    pub narrative: String,
}
