//! One participant's answer sheet and its validation against the catalog.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::domain::catalog::{QuestionCatalog, SelectionMode};
use crate::domain::foundation::{OptionId, QuestionId};

/// Mapping from question id to the set of selected option ids.
///
/// Selection order is irrelevant and ids are unique within a question's
/// set. A sheet is only appendable to the vote store once
/// [`AnswerSheet::validate_against`] passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: HashMap<QuestionId, HashSet<OptionId>>,
}

impl AnswerSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selection; duplicate option ids collapse into the set.
    pub fn select(&mut self, question: QuestionId, option: OptionId) {
        self.answers.entry(question).or_default().insert(option);
    }

    /// Builder-style helper for assembling sheets in tests and simulation.
    pub fn with(mut self, question: impl Into<String>, options: &[&str]) -> Self {
        let qid = QuestionId::new(question);
        for option in options {
            self.select(qid.clone(), OptionId::new(*option));
        }
        self
    }

    /// Returns the selections for a question, if any.
    pub fn selected(&self, question: &QuestionId) -> Option<&HashSet<OptionId>> {
        self.answers.get(question)
    }

    /// Iterates over (question, selections) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &HashSet<OptionId>)> {
        self.answers.iter()
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if nothing has been selected.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Checks the sheet covers exactly the catalog's questions with known
    /// options and legal selection counts.
    ///
    /// The answered question-id set must equal the catalog's id set, every
    /// selected option must belong to its question, and a single-select
    /// question must carry exactly one selection.
    pub fn validate_against(&self, catalog: &QuestionCatalog) -> Result<(), AnswerValidationError> {
        for question in catalog.questions() {
            let selected = self
                .selected(&question.id)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| AnswerValidationError::MissingAnswer {
                    question: question.id.clone(),
                })?;

            if question.mode == SelectionMode::Single && selected.len() > 1 {
                return Err(AnswerValidationError::TooManySelections {
                    question: question.id.clone(),
                    selected: selected.len(),
                });
            }

            for option in selected {
                if question.option(option).is_none() {
                    return Err(AnswerValidationError::UnknownOption {
                        question: question.id.clone(),
                        option: option.clone(),
                    });
                }
            }
        }

        // Reject answers for questions the catalog does not know.
        for (question, _) in self.iter() {
            if catalog.question(question).is_none() {
                return Err(AnswerValidationError::UnknownQuestion {
                    question: question.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Why an answer sheet was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerValidationError {
    #[error("question '{question}' has no selection")]
    MissingAnswer { question: QuestionId },

    #[error("question '{question}' is single-select but {selected} options were selected")]
    TooManySelections { question: QuestionId, selected: usize },

    #[error("option '{option}' does not belong to question '{question}'")]
    UnknownOption {
        question: QuestionId,
        option: OptionId,
    },

    #[error("question '{question}' is not in the catalog")]
    UnknownQuestion { question: QuestionId },
}
