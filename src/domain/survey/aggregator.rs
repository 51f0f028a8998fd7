//! Full recomputation of summary statistics over the vote sequence.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::catalog::{AnswerOption, Question, StyleCategory};
use crate::domain::foundation::{OptionId, Percentage, QuestionId};

use super::VoteRecord;

/// Derived summary over the current vote records.
///
/// Always a pure function of the record sequence; recomputed in full on
/// every read, never incrementally updated. Map ordering carries no
/// meaning, only the counts do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedStats {
    /// Number of submitted records.
    pub total_participants: u64,
    /// Count of records per dominant style.
    pub style_distribution: HashMap<StyleCategory, u64>,
    /// Selection counts per question and option.
    pub question_stats: HashMap<QuestionId, HashMap<OptionId, u64>>,
}

impl AggregatedStats {
    /// Records classified into the given style.
    pub fn style_count(&self, style: StyleCategory) -> u64 {
        self.style_distribution.get(&style).copied().unwrap_or(0)
    }

    /// Share of participants classified into the given style.
    pub fn style_percentage(&self, style: StyleCategory) -> Percentage {
        Percentage::from_ratio(self.style_count(style), self.total_participants)
    }

    /// Times the given option was selected.
    pub fn option_count(&self, question: &QuestionId, option: &OptionId) -> u64 {
        self.question_stats
            .get(question)
            .and_then(|opts| opts.get(option))
            .copied()
            .unwrap_or(0)
    }

    /// The question's options with their counts, most-selected first.
    /// Options tied on count keep their catalog order.
    pub fn ranked_options<'a>(&self, question: &'a Question) -> Vec<(&'a AnswerOption, u64)> {
        let mut ranked: Vec<(&AnswerOption, u64)> = question
            .options
            .iter()
            .map(|opt| (opt, self.option_count(&question.id, &opt.id)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Recomputes [`AggregatedStats`] from the full record sequence.
pub fn aggregate(records: &[VoteRecord]) -> AggregatedStats {
    let mut stats = AggregatedStats {
        total_participants: records.len() as u64,
        ..Default::default()
    };

    for record in records {
        *stats.style_distribution.entry(record.style).or_insert(0) += 1;

        for (question, selected) in record.answers.iter() {
            let per_option = stats.question_stats.entry(question.clone()).or_default();
            for option in selected {
                *per_option.entry(option.clone()).or_insert(0) += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::default_catalog;
    use crate::domain::survey::{AnswerSheet, ParticipantName, StyleClassifier};

    fn record(selections: &[(&str, &[&str])]) -> VoteRecord {
        let mut sheet = AnswerSheet::new();
        for (question, options) in selections {
            sheet = sheet.with(*question, options);
        }
        let style = StyleClassifier::new().classify(&sheet, default_catalog());
        VoteRecord::new(ParticipantName::new("Tester").unwrap(), sheet, style)
    }

    fn result_heavy() -> VoteRecord {
        record(&[
            ("q1", &["q1_a"]),
            ("q2", &["q2_b"]),
            ("q3", &["q3_a"]),
            ("q4", &["q4_a", "q4_b"]),
            ("q5", &["q5_a"]),
        ])
    }

    #[test]
    fn zero_records_yield_zero_stats() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_participants, 0);
        assert!(stats.style_distribution.is_empty());
        assert!(stats.question_stats.is_empty());
    }

    #[test]
    fn single_result_record_counts_once() {
        let stats = aggregate(&[result_heavy()]);
        assert_eq!(stats.total_participants, 1);
        assert_eq!(stats.style_count(StyleCategory::Result), 1);
        assert_eq!(stats.style_count(StyleCategory::Team), 0);
        assert_eq!(
            stats.style_percentage(StyleCategory::Result),
            Percentage::HUNDRED
        );
    }

    #[test]
    fn multi_select_contributes_one_count_per_option() {
        let stats = aggregate(&[result_heavy()]);
        let q4 = QuestionId::new("q4");
        assert_eq!(stats.option_count(&q4, &OptionId::new("q4_a")), 1);
        assert_eq!(stats.option_count(&q4, &OptionId::new("q4_b")), 1);
        assert_eq!(stats.option_count(&q4, &OptionId::new("q4_c")), 0);

        let per_question: u64 = stats.question_stats[&q4].values().sum();
        assert_eq!(per_question, 2);
    }

    #[test]
    fn style_counts_sum_to_total() {
        let records = vec![
            result_heavy(),
            record(&[
                ("q1", &["q1_b"]),
                ("q2", &["q2_a"]),
                ("q3", &["q3_b"]),
                ("q4", &["q4_e"]),
                ("q5", &["q5_d"]),
            ]),
            result_heavy(),
        ];
        let stats = aggregate(&records);
        let summed: u64 = stats.style_distribution.values().sum();
        assert_eq!(summed, stats.total_participants);
        assert_eq!(stats.total_participants, 3);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let records = vec![result_heavy(), result_heavy()];
        assert_eq!(aggregate(&records), aggregate(&records));
    }

    #[test]
    fn ranked_options_sort_by_count_desc() {
        let records = vec![
            record(&[("q4", &["q4_b", "q4_c"])]),
            record(&[("q4", &["q4_b"])]),
        ];
        let stats = aggregate(&records);
        let q4 = default_catalog()
            .question(&QuestionId::new("q4"))
            .unwrap();

        let ranked = stats.ranked_options(q4);
        assert_eq!(ranked[0].0.id, OptionId::new("q4_b"));
        assert_eq!(ranked[0].1, 2);
        assert_eq!(ranked[1].0.id, OptionId::new("q4_c"));
        assert_eq!(ranked[1].1, 1);
        assert_eq!(ranked.len(), q4.options.len());
    }

    #[test]
    fn ranked_options_keep_catalog_order_on_ties() {
        let stats = aggregate(&[]);
        let q4 = default_catalog()
            .question(&QuestionId::new("q4"))
            .unwrap();

        let ranked = stats.ranked_options(q4);
        let ids: Vec<&str> = ranked.iter().map(|(o, _)| o.id.as_str()).collect();
        assert_eq!(ids, vec!["q4_a", "q4_b", "q4_c", "q4_d", "q4_e"]);
    }
}
