//! Vote records: one immutable submission per participant.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::StyleCategory;
use crate::domain::foundation::{Timestamp, ValidationError, VoteId};

use super::AnswerSheet;

/// Participant display name: free text, but never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Creates a name, trimming surrounding whitespace. Returns an error
    /// when nothing remains.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::blank("participant_name"));
        }
        Ok(Self(name))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One participant's full submission plus the derived style.
///
/// Created exactly once per submission and never mutated or deleted
/// individually; reset clears the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// Record identifier.
    pub id: VoteId,
    /// Who submitted.
    pub participant: ParticipantName,
    /// The validated answer sheet.
    pub answers: AnswerSheet,
    /// Dominant style computed at submission time.
    pub style: StyleCategory,
    /// When the submission was accepted.
    pub submitted_at: Timestamp,
}

impl VoteRecord {
    /// Creates a record with a fresh id and the current timestamp.
    pub fn new(participant: ParticipantName, answers: AnswerSheet, style: StyleCategory) -> Self {
        Self {
            id: VoteId::new(),
            participant,
            answers,
            style,
            submitted_at: Timestamp::now(),
        }
    }
}
