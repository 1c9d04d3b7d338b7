//! Colour-wheel harmony schemes around a base colour.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};

use super::{mismatch, GenerationStrategy, StrategyId, StrategyInput};

/// Saturation band (percent) generated colours are held to.
const SATURATION_BAND: (f64, f64) = (40.0, 85.0);

/// Lightness band (percent) for the first lap.
const LIGHTNESS_BAND: (f64, f64) = (35.0, 65.0);

/// Lightness change per extra lap around the offsets.
const LAP_STEP: f64 = 12.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyScheme {
    Complementary,
    #[default]
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Monochromatic,
}

impl HarmonyScheme {
    /// Hue offsets in degrees from the base hue.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            HarmonyScheme::Complementary => &[0.0, 180.0],
            HarmonyScheme::Analogous => &[0.0, 30.0, -30.0, 60.0, -60.0],
            HarmonyScheme::Triadic => &[0.0, 120.0, 240.0],
            HarmonyScheme::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            HarmonyScheme::SplitComplementary => &[0.0, 150.0, 210.0],
            HarmonyScheme::Monochromatic => &[0.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Triadic => "triadic",
            HarmonyScheme::Tetradic => "tetradic",
            HarmonyScheme::SplitComplementary => "split-complementary",
            HarmonyScheme::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lightness shift for a lap: 0, +12, -12, +24, -24, ...
fn lap_shift(lap: usize) -> f64 {
    if lap == 0 {
        return 0.0;
    }
    let magnitude = LAP_STEP * lap.div_ceil(2) as f64;
    if lap % 2 == 1 {
        magnitude
    } else {
        -magnitude
    }
}

/// Derives hues by fixed offsets around a base colour's hue.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonyGenerator;

impl GenerationStrategy for HarmonyGenerator {
    fn id(&self) -> StrategyId {
        StrategyId::Harmony
    }

    fn generate(&self, input: &StrategyInput, count: usize) -> Result<Vec<Rgb>> {
        let StrategyInput::Harmony { base, scheme } = input else {
            return Err(mismatch(StrategyId::Harmony, input));
        };

        let base = rgb_to_hsl(*base);
        let saturation = base.s.clamp(SATURATION_BAND.0, SATURATION_BAND.1);
        let lightness = base.l.clamp(LIGHTNESS_BAND.0, LIGHTNESS_BAND.1);
        let offsets = scheme.offsets();

        Ok((0..count)
            .map(|i| {
                let hue = base.h + offsets[i % offsets.len()];
                let l = (lightness + lap_shift(i / offsets.len())).clamp(15.0, 90.0);
                hsl_to_rgb(Hsl::new(hue, saturation, l))
            })
            .collect())
    }
}
