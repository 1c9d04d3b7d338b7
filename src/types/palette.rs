//! Palette type: an ordered, scored set of slot colours.

use serde::{Deserialize, Serialize};

use crate::accessibility::{score_palette, PaletteScore};
use crate::error::{Result, SwatchError};
use crate::strategy::StrategyId;

use super::Colour;

/// Where a palette came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub strategy: StrategyId,
    /// Human-readable description of the strategy input (prompt text, base colour, ...).
    pub input: String,
}

/// An ordered palette. Slot order maps to display and export position.
///
/// Palettes are values: regeneration and lock toggles return new palettes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredPalette")]
pub struct Palette {
    colours: Vec<Colour>,
    score: PaletteScore,
    source: Source,
}

impl Palette {
    /// Assemble a palette, scoring its colours.
    pub fn new(colours: Vec<Colour>, source: Source) -> Self {
        let score = score_palette(&colours);
        Self {
            colours,
            score,
            source,
        }
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    pub fn get(&self, index: usize) -> Option<&Colour> {
        self.colours.get(index)
    }

    pub fn score(&self) -> &PaletteScore {
        &self.score
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette has no slots.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Number of locked slots.
    pub fn locked_count(&self) -> usize {
        self.colours.iter().filter(|c| c.is_locked()).count()
    }

    /// Display name built from provenance.
    pub fn name(&self) -> String {
        if self.source.input.is_empty() {
            format!("{} palette", self.source.strategy)
        } else {
            format!("{} palette ({})", self.source.strategy, self.source.input)
        }
    }

    /// Copy of this palette with one slot's lock flag changed.
    pub fn with_lock(&self, index: usize, locked: bool) -> Result<Self> {
        if index >= self.colours.len() {
            return Err(SwatchError::Build {
                message: format!(
                    "Slot {} is out of range for a {}-colour palette",
                    index + 1,
                    self.colours.len()
                ),
                help: Some("Slots are numbered from 1".to_string()),
            });
        }

        let mut colours = self.colours.clone();
        colours[index] = colours[index].with_locked(locked);
        Ok(Self {
            colours,
            score: self.score.clone(),
            source: self.source.clone(),
        })
    }
}

/// Persisted form; the score is always recomputed on load.
#[derive(Deserialize)]
struct StoredPalette {
    colours: Vec<Colour>,
    source: Source,
}

impl TryFrom<StoredPalette> for Palette {
    type Error = SwatchError;

    fn try_from(stored: StoredPalette) -> Result<Self> {
        Ok(Palette::new(stored.colours, stored.source))
    }
}
