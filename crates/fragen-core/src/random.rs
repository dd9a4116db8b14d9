//! `rand`-backed implementations of [`RandomSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Draws from the thread-local RNG, seeded by the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Reproducible draws from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Pick a seeded source when a seed is given, the thread RNG otherwise.
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random source");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom),
    }
}
