//! The vote store and its single append/reset entry points.

use std::sync::{Arc, RwLock};

use rand_core::OsRng;
use thiserror::Error;
use tracing::info;

use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::{Percentage, ValidationError};
use crate::domain::survey::{
    aggregate, random_sheet, simulated_name, AggregatedStats, AnswerSheet, AnswerValidationError,
    ParticipantName, StyleClassifier, VoteRecord,
};

/// Default batch size for the presenter's simulate control.
pub const DEFAULT_SIMULATION_BATCH: usize = 5;

/// Owns the append-only vote sequence for the lifetime of the process.
///
/// Explicitly constructed and injected rather than global: appending is the
/// only mutation path besides [`SurveyService::reset`], which clears the
/// whole collection. Statistics are recomputed in full on every read.
///
/// # Panics
///
/// Methods panic if the interior lock is poisoned, which only happens after
/// another thread already panicked mid-append.
pub struct SurveyService {
    catalog: Arc<QuestionCatalog>,
    classifier: StyleClassifier,
    votes: RwLock<Vec<VoteRecord>>,
}

/// Why a submission was rejected.
#[derive(Debug, Clone, Error)]
pub enum SurveyError {
    #[error("invalid participant name: {0}")]
    InvalidName(#[from] ValidationError),

    #[error("invalid answers: {0}")]
    InvalidAnswers(#[from] AnswerValidationError),
}

/// What a participant gets back right after submitting.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    /// The stored record.
    pub record: VoteRecord,
    /// Description of the computed style.
    pub style_description: &'static str,
    /// Participants submitted so far, including this one.
    pub total_participants: u64,
    /// Share of participants with the same dominant style, including this one.
    pub same_style_percentage: Percentage,
}

impl SurveyService {
    /// Creates an empty store over the given catalog and classifier.
    pub fn new(catalog: Arc<QuestionCatalog>, classifier: StyleClassifier) -> Self {
        Self {
            catalog,
            classifier,
            votes: RwLock::new(Vec::new()),
        }
    }

    /// The catalog submissions are validated against.
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Validates and appends one submission.
    ///
    /// The sheet must answer exactly the catalog's questions with known
    /// options; nothing invalid is ever appended. Returns the stored record
    /// together with the post-append cohort comparison.
    pub fn submit(
        &self,
        name: &str,
        answers: AnswerSheet,
    ) -> Result<SubmissionReceipt, SurveyError> {
        let participant = ParticipantName::new(name)?;
        answers.validate_against(&self.catalog)?;

        let style = self.classifier.classify(&answers, &self.catalog);
        let record = VoteRecord::new(participant, answers, style);

        let stats = {
            let mut votes = self.votes.write().expect("vote store lock poisoned");
            votes.push(record.clone());
            aggregate(&votes)
        };

        info!(
            vote_id = %record.id,
            style = %style,
            total = stats.total_participants,
            "accepted survey submission"
        );

        Ok(SubmissionReceipt {
            style_description: style.description(),
            total_participants: stats.total_participants,
            same_style_percentage: stats.style_percentage(style),
            record,
        })
    }

    /// Recomputes aggregated statistics over the current sequence.
    pub fn stats(&self) -> AggregatedStats {
        let votes = self.votes.read().expect("vote store lock poisoned");
        aggregate(&votes)
    }

    /// Number of stored records.
    pub fn vote_count(&self) -> usize {
        self.votes.read().expect("vote store lock poisoned").len()
    }

    /// Clears all records.
    pub fn reset(&self) {
        let mut votes = self.votes.write().expect("vote store lock poisoned");
        let dropped = votes.len();
        votes.clear();
        info!(dropped, "vote store reset");
    }

    /// Appends `count` randomly answered records, returning the new total.
    pub fn simulate(&self, count: usize) -> u64 {
        let mut rng = OsRng;
        let batch: Vec<VoteRecord> = (1..=count)
            .map(|i| {
                let sheet = random_sheet(&self.catalog, &mut rng);
                let style = self.classifier.classify(&sheet, &self.catalog);
                VoteRecord::new(simulated_name(i), sheet, style)
            })
            .collect();

        let mut votes = self.votes.write().expect("vote store lock poisoned");
        votes.extend(batch);
        let total = votes.len() as u64;
        info!(added = count, total, "appended simulated submissions");
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{default_catalog, StyleCategory};
    use crate::domain::foundation::QuestionId;

    fn service() -> SurveyService {
        SurveyService::new(
            Arc::new(default_catalog().clone()),
            StyleClassifier::new(),
        )
    }

    fn result_sheet() -> AnswerSheet {
        AnswerSheet::new()
            .with("q1", &["q1_a"])
            .with("q2", &["q2_b"])
            .with("q3", &["q3_a"])
            .with("q4", &["q4_a", "q4_c"])
            .with("q5", &["q5_a"])
    }

    #[test]
    fn submit_classifies_appends_and_compares() {
        let service = service();
        let receipt = service.submit("Ada", result_sheet()).unwrap();

        assert_eq!(receipt.record.style, StyleCategory::Result);
        assert_eq!(receipt.total_participants, 1);
        assert_eq!(receipt.same_style_percentage, Percentage::HUNDRED);
        assert!(!receipt.style_description.is_empty());
        assert_eq!(service.vote_count(), 1);
    }

    #[test]
    fn same_style_share_includes_the_submitter() {
        let service = service();
        service.submit("First", result_sheet()).unwrap();
        let receipt = service.submit("Second", result_sheet()).unwrap();

        assert_eq!(receipt.total_participants, 2);
        assert_eq!(receipt.same_style_percentage, Percentage::HUNDRED);
    }

    #[test]
    fn blank_name_is_rejected_and_nothing_is_appended() {
        let service = service();
        let result = service.submit("   ", result_sheet());

        assert!(matches!(result, Err(SurveyError::InvalidName(_))));
        assert_eq!(service.vote_count(), 0);
    }

    #[test]
    fn incomplete_sheet_is_rejected_and_nothing_is_appended() {
        let service = service();
        let incomplete = AnswerSheet::new().with("q1", &["q1_a"]);
        let result = service.submit("Ada", incomplete);

        assert!(matches!(result, Err(SurveyError::InvalidAnswers(_))));
        assert_eq!(service.vote_count(), 0);
    }

    #[test]
    fn stats_reflect_submissions() {
        let service = service();
        service.submit("Ada", result_sheet()).unwrap();
        service.submit("Grace", result_sheet()).unwrap();

        let stats = service.stats();
        assert_eq!(stats.total_participants, 2);
        assert_eq!(stats.style_count(StyleCategory::Result), 2);
        assert_eq!(
            stats.option_count(&QuestionId::new("q4"), &crate::domain::foundation::OptionId::new("q4_a")),
            2
        );
    }

    #[test]
    fn simulate_appends_valid_batch() {
        let service = service();
        let total = service.simulate(DEFAULT_SIMULATION_BATCH);

        assert_eq!(total, 5);
        assert_eq!(service.vote_count(), 5);

        let stats = service.stats();
        let styled: u64 = stats.style_distribution.values().sum();
        assert_eq!(styled, 5);
    }

    #[test]
    fn reset_returns_to_zero_record_state() {
        let service = service();
        service.simulate(5);
        assert_eq!(service.vote_count(), 5);

        service.reset();

        assert_eq!(service.vote_count(), 0);
        let stats = service.stats();
        assert_eq!(stats.total_participants, 0);
        assert!(stats.style_distribution.is_empty());
        assert!(stats.question_stats.is_empty());
    }
}
