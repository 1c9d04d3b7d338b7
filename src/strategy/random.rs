//! Uniform random colours.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::types::Rgb;

use super::{mismatch, GenerationStrategy, StrategyId, StrategyInput};

/// `count` uniformly random colours, reproducible when `seed` is set.
pub fn random_colours(count: usize, seed: Option<u64>) -> Vec<Rgb> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    (0..count)
        .map(|_| Rgb::new(rng.random(), rng.random(), rng.random()))
        .collect()
}

/// Generates uniformly random palettes.
#[derive(Debug, Clone, Default)]
pub struct RandomGenerator {
    seed: Option<u64>,
}

impl RandomGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl GenerationStrategy for RandomGenerator {
    fn id(&self) -> StrategyId {
        StrategyId::Random
    }

    fn generate(&self, input: &StrategyInput, count: usize) -> Result<Vec<Rgb>> {
        match input {
            StrategyInput::Random => Ok(random_colours(count, self.seed)),
            other => Err(mismatch(StrategyId::Random, other)),
        }
    }
}
