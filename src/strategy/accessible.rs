//! Accessibility-first generation with a bounded lightness search.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::accessibility::contrast_ratio;
use crate::error::{Result, SwatchError};
use crate::types::{hsl_to_rgb, Hsl, Rgb};

use super::{mismatch, GenerationStrategy, StrategyId, StrategyInput};

/// Default number of candidates tried per palette before giving up.
pub const DEFAULT_RETRY_BUDGET: usize = 100;

/// Golden angle, spreads successive hues evenly around the wheel.
const GOLDEN_ANGLE: f64 = 137.508;
const START_HUE: f64 = 200.0;
const SATURATION: f64 = 65.0;
const START_LIGHTNESS: f64 = 50.0;
const LIGHTNESS_STEP: f64 = 5.0;

/// UI role a slot must be usable in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Background that supports black or white text.
    Background,
    /// Text on a white surface.
    TextOnLight,
    /// Text on a black surface.
    TextOnDark,
    /// Text on both white and black surfaces.
    Universal,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Background => "background",
            Role::TextOnLight => "text-on-light",
            Role::TextOnDark => "text-on-dark",
            Role::Universal => "universal",
        }
    }

    /// Whether `colour` meets `threshold` for this role.
    pub fn accepts(self, colour: Rgb, threshold: f64) -> bool {
        let on_white = contrast_ratio(colour, Rgb::WHITE);
        let on_black = contrast_ratio(colour, Rgb::BLACK);
        match self {
            Role::Background => on_white.max(on_black) >= threshold,
            Role::TextOnLight => on_white >= threshold,
            Role::TextOnDark => on_black >= threshold,
            Role::Universal => on_white >= threshold && on_black >= threshold,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lightness for the `attempt`-th candidate of a slot: 50, 45, 55, 40, 60, ...
fn lightness_for(attempt: usize) -> f64 {
    let magnitude = LIGHTNESS_STEP * attempt.div_ceil(2) as f64;
    let offset = if attempt % 2 == 1 { -magnitude } else { magnitude };
    (START_LIGHTNESS + offset).clamp(0.0, 100.0)
}

/// Searches for colours meeting per-slot contrast roles.
///
/// Every candidate spends one attempt from a budget shared by the whole
/// palette, so generation always terminates.
#[derive(Debug, Clone, Copy)]
pub struct AccessibilityFirstGenerator {
    retry_budget: usize,
}

impl AccessibilityFirstGenerator {
    pub fn new(retry_budget: usize) -> Self {
        Self { retry_budget }
    }

    pub fn retry_budget(&self) -> usize {
        self.retry_budget
    }
}

impl Default for AccessibilityFirstGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_BUDGET)
    }
}

impl GenerationStrategy for AccessibilityFirstGenerator {
    fn id(&self) -> StrategyId {
        StrategyId::Accessibility
    }

    fn generate(&self, input: &StrategyInput, count: usize) -> Result<Vec<Rgb>> {
        let StrategyInput::Accessibility { roles, level } = input else {
            return Err(mismatch(StrategyId::Accessibility, input));
        };

        let threshold = level.threshold();
        let mut found = Vec::with_capacity(count);
        let mut spent = 0;

        for slot in 0..count {
            let role = if roles.is_empty() {
                Role::Background
            } else {
                roles[slot % roles.len()]
            };
            let hue = START_HUE + GOLDEN_ANGLE * slot as f64;

            let mut attempt = 0;
            loop {
                if spent >= self.retry_budget {
                    warn!(
                        found = found.len(),
                        wanted = count,
                        budget = self.retry_budget,
                        %role,
                        "accessibility retry budget exhausted"
                    );
                    return Err(SwatchError::AccessibilityUnsatisfiable {
                        wanted: count,
                        found: found.len(),
                        budget: self.retry_budget,
                        help: Some(format!(
                            "No {} colour met {} contrast; relax the role or level, or raise retry_budget",
                            role, level
                        )),
                    });
                }
                spent += 1;

                let candidate = hsl_to_rgb(Hsl::new(hue, SATURATION, lightness_for(attempt)));
                if role.accepts(candidate, threshold) {
                    debug!(slot, attempt, %role, colour = %candidate, "accessible colour found");
                    found.push(candidate);
                    break;
                }
                attempt += 1;
            }
        }

        Ok(found)
    }
}
