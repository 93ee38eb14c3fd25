use rand::prelude::*;

use crate::processors::{ScoreError, ScoreSource};

// Stand-in rating source for driving the pipeline without a camera
pub struct SyntheticScorer {
    rng: StdRng,
}

impl SyntheticScorer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SyntheticScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSource for SyntheticScorer {
    fn next_score(&mut self) -> Result<f64, ScoreError> {
        Ok(self.rng.gen_range(0.0..=10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_stay_inside_the_rating_range() {
        let mut scorer = SyntheticScorer::seeded(7);
        for _ in 0..1000 {
            let score = scorer.next_score().unwrap();
            assert!((0.0..=10.0).contains(&score));
        }
    }

    #[test]
    fn same_seed_replays_the_same_scores() {
        let mut a = SyntheticScorer::seeded(42);
        let mut b = SyntheticScorer::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_score().unwrap(), b.next_score().unwrap());
        }
    }
}
