//! Palette slot colour with cached projections.

use serde::{Deserialize, Serialize};

use crate::accessibility::{self, Accessibility};
use crate::error::{Result, SwatchError};

use super::{colour_name, rgb_to_hsl, Hsl, Rgb};

/// One palette slot.
///
/// `rgb`, `hsl`, `name` and `accessibility` are projections of `hex`; the
/// only way to get a `Colour` is through [`Colour::from_rgb`] (or parsing a
/// hex), so they can never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredColour")]
pub struct Colour {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    name: String,
    locked: bool,
    accessibility: Accessibility,
}

impl Colour {
    /// Build an unlocked slot colour from RGB channels.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hsl = rgb_to_hsl(rgb);
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl,
            name: colour_name(&hsl),
            locked: false,
            accessibility: accessibility::grade(rgb),
        }
    }

    /// Build an unlocked slot colour from a hex string.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb(Rgb::from_hex(hex)?))
    }

    /// Canonical `#RRGGBB`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    /// Copy of this colour with the lock flag set.
    pub fn with_locked(&self, locked: bool) -> Self {
        Self {
            locked,
            ..self.clone()
        }
    }
}

/// Persisted form: only `hex` and `locked` are trusted.
#[derive(Deserialize)]
struct StoredColour {
    hex: String,
    #[serde(default)]
    locked: bool,
}

impl TryFrom<StoredColour> for Colour {
    type Error = SwatchError;

    fn try_from(stored: StoredColour) -> Result<Self> {
        Ok(Colour::from_hex(&stored.hex)?.with_locked(stored.locked))
    }
}
