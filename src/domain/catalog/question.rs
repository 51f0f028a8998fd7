//! Questions and answer options.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, QuestionId};

use super::StyleCategory;

/// How many options a participant may select on a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Exactly one option.
    Single,
    /// One or more options.
    Multi,
}

/// One selectable answer choice.
///
/// Options on informational questions carry no style tag and do not
/// contribute to classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Identifier, unique within the owning question.
    pub id: OptionId,
    /// Display text.
    pub text: String,
    /// Style category this option scores toward, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleCategory>,
}

impl AnswerOption {
    /// Creates an untagged option.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(id),
            text: text.into(),
            style: None,
        }
    }

    /// Creates a style-tagged option.
    pub fn tagged(id: impl Into<String>, text: impl Into<String>, style: StyleCategory) -> Self {
        Self {
            id: OptionId::new(id),
            text: text.into(),
            style: Some(style),
        }
    }
}

/// A survey question with its ordered answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier.
    pub id: QuestionId,
    /// Prompt text shown to the participant.
    pub prompt: String,
    /// Selection mode.
    pub mode: SelectionMode,
    /// Ordered answer options.
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a question.
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        mode: SelectionMode,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.into(),
            mode,
            options,
        }
    }

    /// Looks up an option by id.
    pub fn option(&self, id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    /// Returns true if any option carries a style tag.
    pub fn has_style_tags(&self) -> bool {
        self.options.iter().any(|o| o.style.is_some())
    }

    /// Returns true if more than one option may be selected.
    pub fn is_multi(&self) -> bool {
        self.mode == SelectionMode::Multi
    }
}
