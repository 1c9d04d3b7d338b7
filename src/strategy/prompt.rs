//! Free-text prompt strategy backed by the keyword rule table.

use tracing::debug;

use crate::error::Result;
use crate::types::{lighten, Rgb};

use super::keywords::{builtin_rules, normalize, KeywordRule};
use super::random::random_colours;
use super::{mismatch, GenerationStrategy, StrategyId, StrategyInput};

/// Lightening applied per extra lap when more colours are requested than a rule holds.
const LAP_LIGHTEN: f32 = 20.0;

/// Maps prompts to palettes through an ordered keyword table.
///
/// The first matching rule wins. Prompts that match nothing get uniform
/// random colours.
#[derive(Debug, Clone)]
pub struct PromptMapper {
    rules: Vec<KeywordRule>,
    seed: Option<u64>,
}

impl PromptMapper {
    /// Mapper over the builtin table.
    pub fn new() -> Self {
        Self::with_rules(builtin_rules())
    }

    /// Mapper over an explicit table.
    pub fn with_rules(rules: Vec<KeywordRule>) -> Self {
        Self { rules, seed: None }
    }

    /// Mapper whose user rules are consulted before the builtin table.
    pub fn with_user_rules(user: Vec<KeywordRule>) -> Self {
        let mut rules = user;
        rules.extend(builtin_rules());
        Self::with_rules(rules)
    }

    /// Seed the no-match fallback.
    pub fn seeded(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Find the first rule matching `prompt`.
    pub fn find_rule(&self, prompt: &str) -> Option<&KeywordRule> {
        let normalized = normalize(prompt);
        self.rules
            .iter()
            .filter(|rule| !rule.palette.is_empty())
            .find(|rule| rule.matches(&normalized))
    }
}

impl Default for PromptMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationStrategy for PromptMapper {
    fn id(&self) -> StrategyId {
        StrategyId::Prompt
    }

    fn generate(&self, input: &StrategyInput, count: usize) -> Result<Vec<Rgb>> {
        let StrategyInput::Prompt { text } = input else {
            return Err(mismatch(StrategyId::Prompt, input));
        };

        let Some(rule) = self.find_rule(text) else {
            debug!(prompt = %text, "no keyword rule matched, using random colours");
            return Ok(random_colours(count, self.seed));
        };

        debug!(prompt = %text, keywords = ?rule.keywords, "keyword rule matched");
        let len = rule.palette.len();
        Ok((0..count)
            .map(|i| {
                let base = rule.palette[i % len];
                match i / len {
                    0 => base,
                    lap => lighten(base, (LAP_LIGHTEN * lap as f32).min(80.0)),
                }
            })
            .collect())
    }
}
