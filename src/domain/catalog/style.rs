//! Management-style categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed categories a participant is classified into.
///
/// Declaration order doubles as the default tie-break order for the
/// classifier: when two categories tie, the one listed first here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    /// Goal- and outcome-driven.
    Result,
    /// Relationship- and collaboration-driven.
    Team,
    /// Rule- and stability-driven.
    Process,
    /// Change- and experimentation-driven.
    Innovation,
}

impl StyleCategory {
    /// All categories, in declaration order.
    pub const ALL: [StyleCategory; 4] = [
        StyleCategory::Result,
        StyleCategory::Team,
        StyleCategory::Process,
        StyleCategory::Innovation,
    ];

    /// Human-readable label shown on survey results and charts.
    pub fn label(&self) -> &'static str {
        match self {
            StyleCategory::Result => "Result & Decision",
            StyleCategory::Team => "Team & Collaboration",
            StyleCategory::Process => "Process & Stability",
            StyleCategory::Innovation => "Innovation & Change",
        }
    }

    /// Participant-facing description of the style.
    pub fn description(&self) -> &'static str {
        match self {
            StyleCategory::Result => {
                "You are goal-oriented and decisive, focused on efficiency and \
                 final outcomes. On a team you often play the commander."
            }
            StyleCategory::Team => {
                "You value relationships and team climate highly, and excel at \
                 motivation and communication. On a team you are often the glue."
            }
            StyleCategory::Process => {
                "You work rigorously, with attention to rules, detail, and risk \
                 control. On a team you often play the guardian."
            }
            StyleCategory::Innovation => {
                "You embrace change, enjoy trying new approaches, and adapt \
                 quickly. On a team you often play the change agent."
            }
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_category_once() {
        assert_eq!(StyleCategory::ALL.len(), 4);
        for (i, a) in StyleCategory::ALL.iter().enumerate() {
            for b in StyleCategory::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn serializes_to_lowercase() {
        let json = serde_json::to_string(&StyleCategory::Result).unwrap();
        assert_eq!(json, "\"result\"");

        let json = serde_json::to_string(&StyleCategory::Innovation).unwrap();
        assert_eq!(json, "\"innovation\"");
    }

    #[test]
    fn deserializes_from_lowercase() {
        let style: StyleCategory = serde_json::from_str("\"process\"").unwrap();
        assert_eq!(style, StyleCategory::Process);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(format!("{}", StyleCategory::Team), "Team & Collaboration");
    }

    #[test]
    fn every_category_has_a_description() {
        for style in StyleCategory::ALL {
            assert!(!style.description().is_empty());
        }
    }
}
