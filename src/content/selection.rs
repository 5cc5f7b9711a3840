//! Random prompt selection.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Prompt, PromptRecord};

/// Number of prompts drawn per cycle (one per panel).
pub const DEFAULT_COUNT: usize = 3;

/// Draw up to `count` distinct valid prompts, uniformly at random.
///
/// Invalid records are skipped. Fewer valid records than `count` yields all
/// of them (shuffled); none yields an empty vector.
pub fn select<R: Rng + ?Sized>(records: &[PromptRecord], count: usize, rng: &mut R) -> Vec<Prompt> {
    let mut pool: Vec<Prompt> = records.iter().filter_map(PromptRecord::validate).collect();

    let rejected = records.len() - pool.len();
    if rejected > 0 {
        log::warn!("Skipped {} malformed prompt record(s)", rejected);
    }

    // Fisher–Yates
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::record;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool_with_invalid() -> Vec<PromptRecord> {
        let mut records: Vec<PromptRecord> = (0..5).map(record).collect();
        records.insert(1, PromptRecord::default());
        let mut broken = record(99);
        broken.slider_images = Some(Vec::new());
        records.push(broken);
        records
    }

    #[test]
    fn draws_three_distinct_valid_prompts_for_every_seed() {
        let records = pool_with_invalid();
        let valid: HashSet<String> = (0..5).map(|n| format!("prompt {}", n)).collect();

        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select(&records, DEFAULT_COUNT, &mut rng);
            assert_eq!(picked.len(), 3);

            let names: HashSet<String> = picked.iter().map(|p| p.prompt.clone()).collect();
            assert_eq!(names.len(), 3, "duplicate pick for seed {}", seed);
            assert!(names.is_subset(&valid), "invalid pick for seed {}", seed);
        }
    }

    #[test]
    fn returns_all_when_pool_is_small() {
        let records = vec![record(0), PromptRecord::default(), record(1)];
        let mut rng = StdRng::seed_from_u64(7);
        let picked = select(&records, DEFAULT_COUNT, &mut rng);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn returns_empty_without_valid_records() {
        let records = vec![PromptRecord::default(), PromptRecord::default()];
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select(&records, DEFAULT_COUNT, &mut rng).is_empty());
        assert!(select(&[], DEFAULT_COUNT, &mut rng).is_empty());
    }

    #[test]
    fn every_record_reaches_the_front() {
        let records: Vec<PromptRecord> = (0..5).map(record).collect();
        let mut firsts = HashSet::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let picked = select(&records, 1, &mut rng);
            firsts.insert(picked[0].prompt.clone());
        }
        assert_eq!(firsts.len(), 5);
    }
}
