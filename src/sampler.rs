//! Puzzle sampling by bounded rejection: draw a random headword and a random
//! selected case slot, reject dead draws, give up after `max_attempts`.
//!
//! Every rejection reason (null entry, gender mismatch, empty solution list)
//! consumes one attempt from the same counter, whatever the filters are.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::dictionary::WordDatabase;
use crate::domain::Puzzle;
use crate::taxonomy::{CaseSlot, GenderFilter};
use crate::util::choose_random;

pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Draw one puzzle satisfying the filters, or `None`.
///
/// `None` comes back immediately (no attempts used) when no case slot or no
/// gender is selected or the dictionary is empty; otherwise after
/// `max_attempts` rejected draws. Both are normal outcomes.
#[instrument(level = "debug", skip(db, selected_cases, selected_genders, rng), fields(cases = selected_cases.len(), genders = selected_genders.len()))]
pub fn sample<R: Rng + ?Sized>(
    db: &WordDatabase,
    selected_cases: &BTreeSet<CaseSlot>,
    selected_genders: &BTreeSet<GenderFilter>,
    max_attempts: usize,
    rng: &mut R,
) -> Option<Puzzle> {
    if selected_cases.is_empty() || selected_genders.is_empty() || db.is_empty() {
        debug!(target: "puzzle", "Nothing to sample from");
        return None;
    }
    let slots: Vec<CaseSlot> = selected_cases.iter().copied().collect();
    let unrestricted = GenderFilter::ALL.iter().all(|g| selected_genders.contains(g));

    for attempt in 1..=max_attempts {
        let word = choose_random(db.headwords(), rng)?;
        let Some(info) = db.get(word) else {
            continue;
        };
        if !unrestricted && !selected_genders.iter().any(|g| g.matches(info.gender, info.is_animate)) {
            continue;
        }
        let case_slot = *choose_random(&slots, rng)?;
        let solutions = info.forms(case_slot);
        if solutions.is_empty() {
            continue;
        }
        debug!(target: "puzzle", %word, slot = case_slot.get(), attempt, "Sampled puzzle");
        return Some(Puzzle {
            word: word.clone(),
            info: info.clone(),
            case_slot,
            solutions: solutions.to_vec(),
        });
    }

    warn!(target: "puzzle", max_attempts, "No puzzle found within attempt budget");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CaseForms, Gender, WordEntry};
    use crate::seeds::seed_dictionary;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn slots(ns: &[u8]) -> BTreeSet<CaseSlot> {
        ns.iter().map(|n| CaseSlot::new(*n).unwrap()).collect()
    }

    fn all_genders() -> BTreeSet<GenderFilter> {
        GenderFilter::ALL.into_iter().collect()
    }

    fn pes_only() -> WordDatabase {
        let entry = WordEntry {
            gender: Some(Gender::Masculine),
            is_animate: true,
            genitive: Some(CaseForms { singular: vec!["psa".into()], plural: vec!["psů".into()] }),
            ..Default::default()
        };
        WordDatabase::from_entries([("pes".to_string(), Some(entry))])
    }

    /// Counts every random number drawn, to check attempts are bounded.
    struct CountingRng {
        inner: StdRng,
        calls: usize,
    }

    impl rand::RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.calls += 1;
            self.inner.next_u32()
        }
        fn next_u64(&mut self) -> u64 {
            self.calls += 1;
            self.inner.next_u64()
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.calls += 1;
            self.inner.fill_bytes(dest)
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.calls += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    #[test]
    fn single_word_scenario_is_stable() {
        let db = pes_only();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let p = sample(&db, &slots(&[2]), &all_genders(), DEFAULT_MAX_ATTEMPTS, &mut rng).expect("puzzle");
            assert_eq!(p.word, "pes");
            assert_eq!(p.case_slot.get(), 2);
            assert_eq!(p.solutions, ["psa"]);
        }
    }

    #[test]
    fn results_respect_selected_slots_and_are_non_empty() {
        let db = seed_dictionary();
        let selected = slots(&[3, 9, 14]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let p = sample(&db, &selected, &all_genders(), DEFAULT_MAX_ATTEMPTS, &mut rng).expect("puzzle");
            assert!(selected.contains(&p.case_slot));
            assert!(!p.solutions.is_empty());
            assert_eq!(p.solutions, db.get(&p.word).unwrap().forms(p.case_slot));
        }
    }

    #[test]
    fn gender_filter_is_respected() {
        let db = seed_dictionary();
        let genders: BTreeSet<_> = [GenderFilter::MasculineInanimate].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let p = sample(&db, &slots(&[2, 9]), &genders, DEFAULT_MAX_ATTEMPTS, &mut rng).expect("puzzle");
            assert_eq!(p.info.gender, Some(Gender::Masculine));
            assert!(!p.info.is_animate, "{} is animate", p.word);
        }
    }

    #[test]
    fn empty_filters_return_none_without_drawing() {
        let db = seed_dictionary();
        let mut rng = CountingRng { inner: StdRng::seed_from_u64(1), calls: 0 };
        assert!(sample(&db, &BTreeSet::new(), &all_genders(), DEFAULT_MAX_ATTEMPTS, &mut rng).is_none());
        assert!(sample(&db, &slots(&[2]), &BTreeSet::new(), DEFAULT_MAX_ATTEMPTS, &mut rng).is_none());
        assert!(sample(&WordDatabase::default(), &slots(&[2]), &all_genders(), DEFAULT_MAX_ATTEMPTS, &mut rng).is_none());
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn exhaustion_is_bounded() {
        // "pes" has no dative forms at all.
        let db = pes_only();
        let mut rng = CountingRng { inner: StdRng::seed_from_u64(9), calls: 0 };
        assert!(sample(&db, &slots(&[3, 10]), &all_genders(), 25, &mut rng).is_none());
        assert!(rng.calls > 0);
        // Two uniform draws per attempt, each a handful of words at most.
        assert!(rng.calls <= 25 * 2 * 4, "drew {} numbers", rng.calls);
    }

    #[test]
    fn ungendered_entries_pass_only_without_gender_restriction() {
        let entry = WordEntry {
            gender: None,
            genitive: Some(CaseForms { singular: vec!["Aha".into()], plural: vec![] }),
            ..Default::default()
        };
        let db = WordDatabase::from_entries([("Aha".to_string(), Some(entry))]);
        let mut rng = StdRng::seed_from_u64(13);
        let p = sample(&db, &slots(&[2]), &all_genders(), DEFAULT_MAX_ATTEMPTS, &mut rng).expect("puzzle");
        assert_eq!(p.word, "Aha");
        assert_eq!(p.info.gender, None);

        for left_out in GenderFilter::ALL {
            let subset: BTreeSet<_> = GenderFilter::ALL.into_iter().filter(|g| *g != left_out).collect();
            assert!(sample(&db, &slots(&[2]), &subset, 20, &mut rng).is_none(), "without {left_out:?}");
        }
    }

    #[test]
    fn null_entries_and_wrong_genders_use_up_attempts() {
        let db = WordDatabase::from_entries([("naplat".to_string(), None)]);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(sample(&db, &slots(&[2]), &all_genders(), 10, &mut rng).is_none());

        let feminine: BTreeSet<_> = [GenderFilter::Feminine].into_iter().collect();
        assert!(sample(&pes_only(), &slots(&[2]), &feminine, 10, &mut rng).is_none());
    }
}
