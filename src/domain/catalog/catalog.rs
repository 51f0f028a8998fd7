//! The question catalog and its built-in contents.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

use super::{AnswerOption, Question, SelectionMode, StyleCategory};

/// Ordered, immutable collection of survey questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Creates a catalog from an ordered question list.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Returns the questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the catalog has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The "valued qualities" question: the first question whose options
    /// carry no style tags. Used by the narrative prompt for its top-3
    /// summary; absent in catalogs where every question scores.
    pub fn qualities_question(&self) -> Option<&Question> {
        self.questions.iter().find(|q| !q.has_style_tags())
    }
}

static DEFAULT_CATALOG: Lazy<QuestionCatalog> = Lazy::new(|| {
    use StyleCategory::{Innovation, Process, Result, Team};

    QuestionCatalog::new(vec![
        Question::new(
            "q1",
            "In management activities, what do you value most?",
            SelectionMode::Single,
            vec![
                AnswerOption::tagged("q1_a", "Goal setting", Result),
                AnswerOption::tagged("q1_b", "Team motivation", Team),
                AnswerOption::tagged("q1_c", "Process monitoring", Process),
                AnswerOption::tagged("q1_d", "Outcome evaluation", Result),
            ],
        ),
        Question::new(
            "q2",
            "When team members disagree, how do you usually handle it?",
            SelectionMode::Single,
            vec![
                AnswerOption::tagged("q2_a", "Organize a discussion and seek consensus", Team),
                AnswerOption::tagged("q2_b", "Make the call and set a clear direction", Result),
                AnswerOption::tagged("q2_c", "Listen to all sides and calm emotions", Team),
                AnswerOption::tagged("q2_d", "Bring in a third party to mediate", Process),
            ],
        ),
        Question::new(
            "q3",
            "When evaluating team performance, what do you tend to focus on?",
            SelectionMode::Single,
            vec![
                AnswerOption::tagged("q3_a", "Individual contribution", Result),
                AnswerOption::tagged("q3_b", "Overall team performance", Team),
                AnswerOption::tagged("q3_c", "Innovation and process improvement", Innovation),
                AnswerOption::tagged("q3_d", "Customer satisfaction", Result),
            ],
        ),
        Question::new(
            "q4",
            "Which core qualities should an effective manager have? (multiple choice)",
            SelectionMode::Multi,
            vec![
                AnswerOption::new("q4_a", "Decisiveness"),
                AnswerOption::new("q4_b", "Communication"),
                AnswerOption::new("q4_c", "Accountability"),
                AnswerOption::new("q4_d", "Learning ability"),
                AnswerOption::new("q4_e", "Empathy"),
            ],
        ),
        Question::new(
            "q5",
            "Facing uncertainty, which management style do you lean toward?",
            SelectionMode::Single,
            vec![
                AnswerOption::tagged("q5_a", "Plan carefully and avoid risk", Process),
                AnswerOption::tagged("q5_b", "Adapt flexibly and seize opportunities", Innovation),
                AnswerOption::tagged("q5_c", "Rely on experience and advance steadily", Process),
                AnswerOption::tagged("q5_d", "Encourage trial and error, iterate quickly", Innovation),
            ],
        ),
    ])
});

/// The built-in survey catalog.
pub fn default_catalog() -> &'static QuestionCatalog {
    &DEFAULT_CATALOG
}
