//! Palette engine: runs a strategy, merges locked slots, scores the result.

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, SwatchError};
use crate::strategy::{
    AccessibilityFirstGenerator, BrandGenerator, GenerationStrategy, HarmonyGenerator,
    PromptMapper, RandomGenerator, StrategyId, StrategyInput,
};
use crate::types::{Colour, Palette, Source};

/// Orchestrates palette generation.
///
/// Holds no per-palette state: locks travel in the `previous` palette passed
/// to [`PaletteEngine::generate`], so one engine can serve any number of
/// callers.
#[derive(Debug, Clone)]
pub struct PaletteEngine {
    count: usize,
    prompt: PromptMapper,
    accessibility: AccessibilityFirstGenerator,
    random: RandomGenerator,
}

impl PaletteEngine {
    /// Engine with default settings and the builtin keyword table.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            count: config.count,
            prompt: PromptMapper::with_user_rules(config.keywords.clone()).seeded(config.seed),
            accessibility: AccessibilityFirstGenerator::new(config.retry_budget),
            random: RandomGenerator::new(config.seed),
        }
    }

    /// Slot count for palettes generated without a previous palette.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Override the slot count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// The configured strategy for `id`.
    pub fn strategy(&self, id: StrategyId) -> &dyn GenerationStrategy {
        match id {
            StrategyId::Prompt => &self.prompt,
            StrategyId::Harmony => &HarmonyGenerator,
            StrategyId::Brand => &BrandGenerator,
            StrategyId::Accessibility => &self.accessibility,
            StrategyId::Random => &self.random,
        }
    }

    /// Generate a palette with a configured strategy.
    ///
    /// Locked slots of `previous` are carried over unchanged; the strategy only
    /// fills the unlocked ones.
    pub fn generate(
        &self,
        strategy: StrategyId,
        input: &StrategyInput,
        previous: Option<&Palette>,
    ) -> Result<Palette> {
        self.generate_with(self.strategy(strategy), input, previous)
    }

    /// Generate a palette with any strategy implementation.
    pub fn generate_with(
        &self,
        strategy: &dyn GenerationStrategy,
        input: &StrategyInput,
        previous: Option<&Palette>,
    ) -> Result<Palette> {
        let slots = previous.map_or(self.count, Palette::len);
        let kept: Vec<Option<&Colour>> = (0..slots)
            .map(|i| previous.and_then(|p| p.get(i)).filter(|c| c.is_locked()))
            .collect();
        let open = kept.iter().filter(|slot| slot.is_none()).count();

        let fresh = strategy.generate(input, open)?;
        if fresh.len() < open {
            return Err(SwatchError::Build {
                message: format!(
                    "The {} strategy returned {} colours, {} needed",
                    strategy.id(),
                    fresh.len(),
                    open
                ),
                help: None,
            });
        }

        let mut fresh = fresh.into_iter().map(Colour::from_rgb);
        let colours: Vec<Colour> = kept
            .into_iter()
            .filter_map(|slot| match slot {
                Some(colour) => Some(colour.clone()),
                None => fresh.next(),
            })
            .collect();

        debug!(
            strategy = %strategy.id(),
            slots,
            regenerated = open,
            "generated palette"
        );

        // Nothing regenerated: the palette is still the previous one
        let source = match previous {
            Some(previous) if open == 0 => previous.source().clone(),
            _ => Source {
                strategy: strategy.id(),
                input: input.describe(),
            },
        };

        Ok(Palette::new(colours, source))
    }
}

impl Default for PaletteEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::WcagLevel;
    use crate::strategy::{HarmonyScheme, Role};
    use crate::types::Rgb;

    fn prompt(text: &str) -> StrategyInput {
        StrategyInput::Prompt {
            text: text.to_string(),
        }
    }

    fn hexes(palette: &Palette) -> Vec<&str> {
        palette.colours().iter().map(Colour::hex).collect()
    }

    #[test]
    fn test_fresh_palette() {
        let engine = PaletteEngine::new();
        let palette = engine
            .generate(StrategyId::Prompt, &prompt("energetic fitness app"), None)
            .unwrap();

        assert_eq!(
            hexes(&palette),
            vec!["#FF6B35", "#F7931E", "#FFD23F", "#06FFA5", "#118AB2"]
        );
        assert_eq!(palette.source().strategy, StrategyId::Prompt);
        assert_eq!(palette.source().input, "energetic fitness app");
        assert_eq!(palette.locked_count(), 0);
    }

    #[test]
    fn test_locked_slot_survives() {
        let engine = PaletteEngine::new();
        let first = engine
            .generate(StrategyId::Prompt, &prompt("ocean"), None)
            .unwrap()
            .with_lock(2, true)
            .unwrap();

        let next = engine
            .generate(StrategyId::Prompt, &prompt("fitness"), Some(&first))
            .unwrap();

        assert_eq!(next.get(2), first.get(2));
        // Unlocked slots take the first four fitness colours in order
        assert_eq!(
            hexes(&next),
            vec!["#FF6B35", "#F7931E", "#00B4D8", "#FFD23F", "#06FFA5"]
        );
    }

    #[test]
    fn test_all_locked_returns_previous() {
        let engine = PaletteEngine::new();
        let mut previous = engine
            .generate(StrategyId::Prompt, &prompt("forest"), None)
            .unwrap();
        for i in 0..previous.len() {
            previous = previous.with_lock(i, true).unwrap();
        }

        let next = engine
            .generate(StrategyId::Random, &StrategyInput::Random, Some(&previous))
            .unwrap();
        assert_eq!(next, previous);
    }

    #[test]
    fn test_previous_sets_slot_count() {
        let engine = PaletteEngine::new().with_count(3);
        let previous = engine
            .generate(StrategyId::Prompt, &prompt("gym"), None)
            .unwrap();
        assert_eq!(previous.len(), 3);

        let next = PaletteEngine::new()
            .generate(StrategyId::Prompt, &prompt("gym"), Some(&previous))
            .unwrap();
        assert_eq!(next.len(), 3);
    }

    #[test]
    fn test_strategy_errors_propagate() {
        let engine = PaletteEngine::new();
        let result = engine.generate(StrategyId::Harmony, &prompt("ocean"), None);
        assert!(matches!(
            result,
            Err(SwatchError::StrategyInputMismatch {
                strategy: StrategyId::Harmony,
                ..
            })
        ));

        let input = StrategyInput::Accessibility {
            roles: vec![Role::Universal],
            level: WcagLevel::Aaa,
        };
        assert!(matches!(
            engine.generate(StrategyId::Accessibility, &input, None),
            Err(SwatchError::AccessibilityUnsatisfiable { .. })
        ));
    }

    #[test]
    fn test_short_strategy_is_an_error() {
        struct Stingy;
        impl GenerationStrategy for Stingy {
            fn id(&self) -> StrategyId {
                StrategyId::Random
            }
            fn generate(&self, _: &StrategyInput, _: usize) -> Result<Vec<Rgb>> {
                Ok(vec![Rgb::BLACK])
            }
        }

        let result = PaletteEngine::new().generate_with(&Stingy, &StrategyInput::Random, None);
        assert!(matches!(result, Err(SwatchError::Build { .. })));
    }

    #[test]
    fn test_harmony_provenance() {
        let input = StrategyInput::Harmony {
            base: Rgb::new(0x3A, 0x86, 0xFF),
            scheme: HarmonyScheme::Triadic,
        };
        let palette = PaletteEngine::new()
            .generate(StrategyId::Harmony, &input, None)
            .unwrap();
        assert_eq!(palette.source().input, "#3A86FF triadic");
        assert_eq!(palette.len(), 5);
    }

    #[test]
    fn test_config_keywords_reach_prompt_strategy() {
        let config = Config::parse(
            "count: 2\nkeywords:\n  - keywords: [retro]\n    palette: [\"#F4A261\", \"#E76F51\"]\n",
        )
        .unwrap();
        let palette = PaletteEngine::from_config(&config)
            .generate(StrategyId::Prompt, &prompt("retro arcade"), None)
            .unwrap();
        assert_eq!(hexes(&palette), vec!["#F4A261", "#E76F51"]);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaletteEngine>();
        assert_send_sync::<Palette>();
    }
}
