//! Randomly answered sheets for the presenter's simulate control.

use rand_core::RngCore;

use crate::domain::catalog::QuestionCatalog;

use super::{AnswerSheet, ParticipantName};

/// How many options a simulated participant picks on a multi-select.
const MULTI_SELECT_PICKS: usize = 2;

/// Builds a complete sheet with random selections: one option per
/// single-select question, two distinct options per multi-select.
pub fn random_sheet(catalog: &QuestionCatalog, rng: &mut dyn RngCore) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();

    for question in catalog.questions() {
        let count = question.options.len();
        if count == 0 {
            continue;
        }

        let first = rng.next_u32() as usize % count;
        sheet.select(question.id.clone(), question.options[first].id.clone());

        if question.is_multi() {
            for _ in 1..MULTI_SELECT_PICKS.min(count) {
                // Offset into the remaining options keeps picks distinct.
                let offset = 1 + rng.next_u32() as usize % (count - 1);
                let next = (first + offset) % count;
                sheet.select(question.id.clone(), question.options[next].id.clone());
            }
        }
    }

    sheet
}

/// Display name for the n-th simulated participant of a batch.
pub fn simulated_name(index: usize) -> ParticipantName {
    ParticipantName::new(format!("Simulated Participant {}", index))
        .expect("generated name is non-blank")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::default_catalog;
    use rand_core::impls;

    /// Deterministic counter rng for repeatable tests.
    struct StepRng(u32);

    impl RngCore for StepRng {
        fn next_u32(&mut self) -> u32 {
            self.0 = self.0.wrapping_add(1);
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            impls::next_u64_via_u32(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            impls::fill_bytes_via_next(self, dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn random_sheet_is_always_valid() {
        let catalog = default_catalog();
        let mut rng = StepRng(0);
        for _ in 0..50 {
            let sheet = random_sheet(catalog, &mut rng);
            assert!(sheet.validate_against(catalog).is_ok());
        }
    }

    #[test]
    fn multi_select_gets_two_distinct_picks() {
        let catalog = default_catalog();
        let mut rng = StepRng(7);
        let sheet = random_sheet(catalog, &mut rng);

        let q4 = catalog.qualities_question().unwrap();
        assert_eq!(sheet.selected(&q4.id).unwrap().len(), 2);
    }

    #[test]
    fn single_select_gets_exactly_one_pick() {
        let catalog = default_catalog();
        let mut rng = StepRng(99);
        let sheet = random_sheet(catalog, &mut rng);

        for question in catalog.questions() {
            if !question.is_multi() {
                assert_eq!(sheet.selected(&question.id).unwrap().len(), 1);
            }
        }
    }

    #[test]
    fn simulated_names_are_numbered() {
        assert_eq!(simulated_name(1).as_str(), "Simulated Participant 1");
        assert_eq!(simulated_name(5).as_str(), "Simulated Participant 5");
    }
}
