//! Dominant-style classification over one answer sheet.

use std::collections::HashMap;

use crate::domain::catalog::{QuestionCatalog, StyleCategory};

use super::AnswerSheet;

/// Pure classifier from one answer sheet to a single dominant style.
///
/// Every selected option carrying a style tag scores one point for that
/// style; untagged options and questions contribute nothing. The style
/// with the strictly highest score wins. Ties, including the all-zero
/// case of an empty sheet, resolve to the earliest tied style in the
/// classifier's configured order rather than a hard-coded favorite.
#[derive(Debug, Clone)]
pub struct StyleClassifier {
    tie_break: [StyleCategory; 4],
}

impl StyleClassifier {
    /// Creates a classifier with the default tie-break order, the catalog
    /// declaration order of [`StyleCategory::ALL`].
    pub fn new() -> Self {
        Self {
            tie_break: StyleCategory::ALL,
        }
    }

    /// Creates a classifier with an explicit tie-break order.
    pub fn with_tie_break(tie_break: [StyleCategory; 4]) -> Self {
        Self { tie_break }
    }

    /// Returns the configured tie-break order.
    pub fn tie_break(&self) -> &[StyleCategory; 4] {
        &self.tie_break
    }

    /// Classifies one sheet. Incomplete sheets simply undercount; the
    /// caller enforces completeness before appending to the store.
    pub fn classify(&self, answers: &AnswerSheet, catalog: &QuestionCatalog) -> StyleCategory {
        let scores = self.scores(answers, catalog);

        let mut winner = self.tie_break[0];
        let mut best = scores.get(&winner).copied().unwrap_or(0);
        for style in &self.tie_break[1..] {
            let score = scores.get(style).copied().unwrap_or(0);
            if score > best {
                winner = *style;
                best = score;
            }
        }
        winner
    }

    /// Per-style tallies for one sheet.
    pub fn scores(
        &self,
        answers: &AnswerSheet,
        catalog: &QuestionCatalog,
    ) -> HashMap<StyleCategory, u32> {
        let mut scores = HashMap::new();
        for question in catalog.questions() {
            if let Some(selected) = answers.selected(&question.id) {
                for option_id in selected {
                    if let Some(style) = question.option(option_id).and_then(|o| o.style) {
                        *scores.entry(style).or_insert(0) += 1;
                    }
                }
            }
        }
        scores
    }
}

impl Default for StyleClassifier {
    fn default() -> Self {
        Self::new()
    }
}
