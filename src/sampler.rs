//! Stratified sampling of the candidate pool by skill level.
//!
//! Each tier takes `floor(percent * amount)` workers, drawn without
//! replacement from the candidates whose score is within the tier's bound.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{SkillLevel, TierOverlap};
use crate::worker::{Worker, WorkerId};

/// What one tier contributed to the population.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierReport {
    pub name: String,
    /// Workers the tier asked for
    pub limit: usize,
    /// Candidates that qualified for the tier
    pub eligible: usize,
    /// Workers actually taken
    pub selected: usize,
}

impl TierReport {
    /// Whether the tier fell short of its limit.
    pub fn is_short(&self) -> bool {
        self.selected < self.limit
    }
}

/// The sampled output population.
#[derive(Clone, Debug, Default)]
pub struct Population {
    /// Selected workers, tier by tier in tier order.
    pub workers: Vec<Worker>,
    pub tiers: Vec<TierReport>,
}

impl Population {
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

/// Sample `amount` workers from `candidates` across `levels`.
///
/// Tiers are processed in order. With `TierOverlap::Exclusive` a worker taken
/// by one tier is no longer eligible for later tiers.
pub fn sample_population<R: Rng>(
    candidates: &[Worker],
    levels: &[SkillLevel],
    amount: usize,
    overlap: TierOverlap,
    rng: &mut R,
) -> Population {
    let mut population = Population::default();
    let mut taken: HashSet<WorkerId> = HashSet::new();

    for level in levels {
        let limit = level.limit(amount);
        let mut qualifying: Vec<&Worker> = candidates
            .iter()
            .filter(|w| level.admits(w.score()))
            .filter(|w| overlap == TierOverlap::Overlapping || !taken.contains(&w.id()))
            .collect();
        let eligible = qualifying.len();

        qualifying.shuffle(rng);
        qualifying.truncate(limit);

        if overlap == TierOverlap::Exclusive {
            taken.extend(qualifying.iter().map(|w| w.id()));
        }

        population.tiers.push(TierReport {
            name: level.name.clone(),
            limit,
            eligible,
            selected: qualifying.len(),
        });
        population.workers.extend(qualifying.into_iter().cloned());
    }

    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Candidates with scores cycling through 5..=40.
    fn candidates(n: u64) -> Vec<Worker> {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        (0..n)
            .map(|i| {
                let extra = (i % 36) as u32;
                let attrs = Attributes::new(1 + extra, 1, 1, 1, 1);
                Worker::new(WorkerId(i), format!("Worker {}", i), attrs, &mut rng)
            })
            .collect()
    }

    #[test]
    fn test_respects_limits_and_bounds() {
        let pool = candidates(500);
        let levels = SkillLevel::defaults();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let population = sample_population(&pool, &levels, 40, TierOverlap::Exclusive, &mut rng);

        assert!(population.len() <= 40);
        let mut offset = 0;
        for (level, report) in levels.iter().zip(&population.tiers) {
            assert_eq!(report.name, level.name);
            assert!(report.selected <= level.limit(40));
            for w in &population.workers[offset..offset + report.selected] {
                assert!(w.score() <= level.score, "{} exceeds tier {}", w.score(), level.name);
            }
            offset += report.selected;
        }
        assert_eq!(offset, population.len());
    }

    #[test]
    fn test_exclusive_has_no_duplicates() {
        let pool = candidates(60);
        let levels = vec![
            SkillLevel::new("a", 0.5, 40),
            SkillLevel::new("b", 0.5, 40),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let population = sample_population(&pool, &levels, 100, TierOverlap::Exclusive, &mut rng);

        let ids: HashSet<WorkerId> = population.workers.iter().map(|w| w.id()).collect();
        assert_eq!(ids.len(), population.len());
        // The first tier takes 50 of 60; the second only has 10 left
        assert_eq!(population.tiers[0].selected, 50);
        assert_eq!(population.tiers[1].eligible, 10);
        assert!(population.tiers[1].is_short());
    }

    #[test]
    fn test_overlapping_allows_reselection() {
        let pool = candidates(10);
        let levels = vec![
            SkillLevel::new("a", 0.5, 40),
            SkillLevel::new("b", 0.5, 40),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let population = sample_population(&pool, &levels, 20, TierOverlap::Overlapping, &mut rng);

        // Both tiers take the whole pool, so every worker appears twice
        assert_eq!(population.len(), 20);
        let ids: HashSet<WorkerId> = population.workers.iter().map(|w| w.id()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_short_tier_takes_what_qualifies() {
        let pool = candidates(100);
        // Only scores of exactly 5 qualify
        let levels = vec![SkillLevel::new("lo", 1.0, 5)];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let population = sample_population(&pool, &levels, 50, TierOverlap::Exclusive, &mut rng);

        let expected = pool.iter().filter(|w| w.score() <= 5).count();
        assert_eq!(population.len(), expected);
        assert_eq!(population.tiers[0].limit, 50);
    }

    #[test]
    fn test_zero_amount_selects_nothing() {
        let pool = candidates(100);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let population =
            sample_population(&pool, &SkillLevel::defaults(), 0, TierOverlap::Exclusive, &mut rng);
        assert!(population.is_empty());
    }
}
