//! Palette generation strategies.
//!
//! Every strategy turns a [`StrategyInput`] into `count` candidate colours:
//! - [`PromptMapper`] - keyword rule table over free-text prompts
//! - [`HarmonyGenerator`] - fixed hue offsets around a base colour
//! - [`BrandGenerator`] - tint/shade ladders of brand seed colours
//! - [`AccessibilityFirstGenerator`] - bounded search for colours meeting contrast roles
//! - [`RandomGenerator`] - uniform random colours
//!
//! Strategies are deterministic for a given input; only the random strategy
//! (and the prompt mapper's no-match fallback) draw from an RNG, which can be
//! seeded.

mod accessible;
mod brand;
mod harmony;
mod keywords;
mod prompt;
mod random;

pub use accessible::{AccessibilityFirstGenerator, Role, DEFAULT_RETRY_BUDGET};
pub use brand::BrandGenerator;
pub use harmony::{HarmonyGenerator, HarmonyScheme};
pub use keywords::{builtin_rules, KeywordRule};
pub use prompt::PromptMapper;
pub use random::{random_colours, RandomGenerator};

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::accessibility::WcagLevel;
use crate::error::{Result, SwatchError};
use crate::types::Rgb;

/// Identifier of a generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyId {
    Prompt,
    Harmony,
    Brand,
    Accessibility,
    Random,
}

impl StrategyId {
    pub fn name(self) -> &'static str {
        match self {
            StrategyId::Prompt => "prompt",
            StrategyId::Harmony => "harmony",
            StrategyId::Brand => "brand",
            StrategyId::Accessibility => "accessibility",
            StrategyId::Random => "random",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strategy-specific input.
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyInput {
    Prompt { text: String },
    Harmony { base: Rgb, scheme: HarmonyScheme },
    Brand { seeds: Vec<Rgb> },
    Accessibility { roles: Vec<Role>, level: WcagLevel },
    Random,
}

impl StrategyInput {
    /// The strategy this input shape belongs to.
    pub fn strategy(&self) -> StrategyId {
        match self {
            StrategyInput::Prompt { .. } => StrategyId::Prompt,
            StrategyInput::Harmony { .. } => StrategyId::Harmony,
            StrategyInput::Brand { .. } => StrategyId::Brand,
            StrategyInput::Accessibility { .. } => StrategyId::Accessibility,
            StrategyInput::Random => StrategyId::Random,
        }
    }

    /// Short provenance text recorded on generated palettes.
    pub fn describe(&self) -> String {
        match self {
            StrategyInput::Prompt { text } => text.trim().to_string(),
            StrategyInput::Harmony { base, scheme } => format!("{} {}", base, scheme),
            StrategyInput::Brand { seeds } => seeds
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            StrategyInput::Accessibility { roles, level } => {
                let roles: Vec<&str> = roles.iter().map(|r| r.name()).collect();
                if roles.is_empty() {
                    format!("{} background", level)
                } else {
                    format!("{} {}", level, roles.join(", "))
                }
            }
            StrategyInput::Random => String::new(),
        }
    }
}

/// A pluggable palette generator.
pub trait GenerationStrategy {
    fn id(&self) -> StrategyId;

    /// Produce exactly `count` colours for `input`.
    fn generate(&self, input: &StrategyInput, count: usize) -> Result<Vec<Rgb>>;
}

/// Error for a strategy handed another strategy's input.
pub(crate) fn mismatch(strategy: StrategyId, input: &StrategyInput) -> SwatchError {
    SwatchError::StrategyInputMismatch {
        strategy,
        given: input.strategy().to_string(),
        help: Some(format!("Pass {} input to the {} strategy", strategy, strategy)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_strategy() {
        let input = StrategyInput::Prompt {
            text: "ocean".to_string(),
        };
        assert_eq!(input.strategy(), StrategyId::Prompt);
        assert_eq!(StrategyInput::Random.strategy(), StrategyId::Random);
    }

    #[test]
    fn test_describe() {
        let harmony = StrategyInput::Harmony {
            base: Rgb::new(0x3A, 0x86, 0xFF),
            scheme: HarmonyScheme::Triadic,
        };
        assert_eq!(harmony.describe(), "#3A86FF triadic");

        let brand = StrategyInput::Brand {
            seeds: vec![Rgb::BLACK, Rgb::WHITE],
        };
        assert_eq!(brand.describe(), "#000000, #FFFFFF");

        let access = StrategyInput::Accessibility {
            roles: vec![Role::TextOnLight],
            level: WcagLevel::Aaa,
        };
        assert_eq!(access.describe(), "AAA text-on-light");
    }

    #[test]
    fn test_mismatch_names_both_sides() {
        let err = mismatch(StrategyId::Harmony, &StrategyInput::Random);
        assert_eq!(
            err.to_string(),
            "The harmony strategy cannot use random input"
        );
    }

    #[test]
    fn test_strategy_id_serde() {
        let json = serde_json::to_string(&StrategyId::Accessibility).unwrap();
        assert_eq!(json, "\"accessibility\"");
    }
}
