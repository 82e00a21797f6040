use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Uniform Fisher-Yates shuffling from a seeded generator, same seed deals the same boards.
#[derive(Clone, Debug)]
pub struct RandomShuffler {
    rng: SmallRng,
}

impl RandomShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, symbols: &mut [Symbol]) {
        symbols.shuffle(&mut self.rng);
    }
}
