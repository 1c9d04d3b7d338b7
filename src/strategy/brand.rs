//! Tint and shade ladders from brand seed colours.

use crate::error::{Result, SwatchError};
use crate::types::{adjust_lightness, Rgb};

use super::{mismatch, GenerationStrategy, StrategyId, StrategyInput};

/// Lightness step per lap over the seeds: seed, tint, shade, lighter tint, deeper shade.
const LADDER: [f32; 5] = [0.0, 20.0, -20.0, 40.0, -40.0];

/// Round-robins over seed colours, stepping lightness on each lap.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrandGenerator;

impl GenerationStrategy for BrandGenerator {
    fn id(&self) -> StrategyId {
        StrategyId::Brand
    }

    fn generate(&self, input: &StrategyInput, count: usize) -> Result<Vec<Rgb>> {
        let StrategyInput::Brand { seeds } = input else {
            return Err(mismatch(StrategyId::Brand, input));
        };

        if seeds.is_empty() {
            return Err(SwatchError::StrategyInputMismatch {
                strategy: StrategyId::Brand,
                given: "empty seed list".to_string(),
                help: Some("Provide at least one seed colour".to_string()),
            });
        }

        Ok((0..count)
            .map(|i| {
                let seed = seeds[i % seeds.len()];
                match LADDER[(i / seeds.len()) % LADDER.len()] {
                    step if step == 0.0 => seed,
                    step => adjust_lightness(seed, step),
                }
            })
            .collect())
    }
}
