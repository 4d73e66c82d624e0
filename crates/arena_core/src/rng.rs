use std::ops::RangeInclusive;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seeded random source shared by stat generation and combat rolls.
#[derive(Debug)]
pub struct SimulationRng {
    seed: u64,
    rng: StdRng,
}

impl SimulationRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

/// Picks a seed from OS entropy so an unseeded run can still be replayed.
pub fn fresh_seed() -> u64 {
    StdRng::from_entropy().gen()
}
