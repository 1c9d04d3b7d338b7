//! Mood label from the hue and lightness profile of a palette.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Hsl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Energetic,
    Cozy,
    Natural,
    Fresh,
    Calming,
    Dramatic,
    Soft,
    Neutral,
}

impl Emotion {
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Energetic => "Energetic",
            Emotion::Cozy => "Cozy",
            Emotion::Natural => "Natural",
            Emotion::Fresh => "Fresh",
            Emotion::Calming => "Calming",
            Emotion::Dramatic => "Dramatic",
            Emotion::Soft => "Soft",
            Emotion::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Saturation at or above which a palette counts as vivid.
const VIVID: f64 = 60.0;

/// Classify a palette's mood.
///
/// Lightness extremes win over hue: very dark palettes read as dramatic and
/// very light ones as soft, whatever their hue.
pub fn emotion_of(colours: &[Hsl]) -> Emotion {
    let chromatic: Vec<&Hsl> = colours.iter().filter(|c| c.is_chromatic()).collect();
    if chromatic.is_empty() {
        return Emotion::Neutral;
    }

    let mean_lightness = colours.iter().map(|c| c.l).sum::<f64>() / colours.len() as f64;
    if mean_lightness < 25.0 {
        return Emotion::Dramatic;
    }
    if mean_lightness > 75.0 {
        return Emotion::Soft;
    }

    let mean_saturation = chromatic.iter().map(|c| c.s).sum::<f64>() / chromatic.len() as f64;
    let vivid = mean_saturation >= VIVID;

    match mean_hue(&chromatic) {
        h if !(60.0..330.0).contains(&h) => {
            if vivid {
                Emotion::Energetic
            } else {
                Emotion::Cozy
            }
        }
        h if h < 170.0 => Emotion::Natural,
        _ => {
            if vivid {
                Emotion::Fresh
            } else {
                Emotion::Calming
            }
        }
    }
}

/// Circular mean of the hues, in `[0, 360)`.
fn mean_hue(colours: &[&Hsl]) -> f64 {
    let (sin, cos) = colours.iter().fold((0.0, 0.0), |(s, c), hsl| {
        let rad = hsl.h.to_radians();
        (s + rad.sin(), c + rad.cos())
    });
    crate::types::normalize_hue(sin.atan2(cos).to_degrees())
}
