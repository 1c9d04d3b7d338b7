//! Accessibility grading and palette scoring.
//!
//! Grades single colours against the WCAG contrast thresholds and rolls a
//! palette up into a [`PaletteScore`]:
//! - `accessibility` - share of colours that pass AA
//! - `harmony` - hue cohesion or even spacing (see [`harmony`])
//! - `emotion` - a mood label from the hue and lightness profile

mod contrast;
mod emotion;
mod harmony;

pub use contrast::{contrast_ratio, contrast_ratio_hex, relative_luminance};
pub use emotion::{emotion_of, Emotion};
pub use harmony::harmony_score;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Colour, Rgb};

/// WCAG minimum contrast for normal text at level AA.
pub const AA_THRESHOLD: f64 = 4.5;

/// WCAG minimum contrast for normal text at level AAA.
pub const AAA_THRESHOLD: f64 = 7.0;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WcagLevel {
    #[default]
    Aa,
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level.
    pub fn threshold(self) -> f64 {
        match self {
            WcagLevel::Aa => AA_THRESHOLD,
            WcagLevel::Aaa => AAA_THRESHOLD,
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WcagLevel::Aa => write!(f, "AA"),
            WcagLevel::Aaa => write!(f, "AAA"),
        }
    }
}

/// Contrast grade of a colour used as a background under black or white text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accessibility {
    pub wcag_aa: bool,
    pub wcag_aaa: bool,
    /// Best contrast against black or white.
    pub contrast: f64,
}

impl Accessibility {
    /// Whether the best text colour for this background is white.
    pub fn prefers_white_text(rgb: Rgb) -> bool {
        contrast_ratio(rgb, Rgb::WHITE) >= contrast_ratio(rgb, Rgb::BLACK)
    }
}

/// Grade a colour by its better contrast against pure black or pure white.
pub fn grade(rgb: Rgb) -> Accessibility {
    let contrast = contrast_ratio(rgb, Rgb::WHITE).max(contrast_ratio(rgb, Rgb::BLACK));
    Accessibility {
        wcag_aa: contrast >= AA_THRESHOLD,
        wcag_aaa: contrast >= AAA_THRESHOLD,
        contrast,
    }
}

/// Grade a hex colour string.
pub fn grade_hex(hex: &str) -> Result<Accessibility> {
    Ok(grade(Rgb::from_hex(hex)?))
}

/// Aggregate palette score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteScore {
    /// Percent of colours passing WCAG AA.
    pub accessibility: u8,
    pub harmony: u8,
    pub emotion: Emotion,
    pub overall: u8,
}

/// Score a palette from its colours.
pub fn score_palette(colours: &[Colour]) -> PaletteScore {
    if colours.is_empty() {
        return PaletteScore {
            accessibility: 0,
            harmony: 0,
            emotion: Emotion::Neutral,
            overall: 0,
        };
    }

    let passing = colours.iter().filter(|c| c.accessibility().wcag_aa).count();
    let accessibility = (100.0 * passing as f64 / colours.len() as f64).round() as u8;

    let hsls: Vec<_> = colours.iter().map(Colour::hsl).collect();
    let harmony = harmony_score(&hsls);
    let emotion = emotion_of(&hsls);
    let overall = ((f64::from(accessibility) + f64::from(harmony)) / 2.0).round() as u8;

    PaletteScore {
        accessibility,
        harmony,
        emotion,
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_black_and_white() {
        let black = grade(Rgb::BLACK);
        assert!((black.contrast - 21.0).abs() < 0.01);
        assert!(black.wcag_aa && black.wcag_aaa);

        let white = grade_hex("#FFFFFF").unwrap();
        assert!((white.contrast - 21.0).abs() < 0.01);
    }

    #[test]
    fn test_grade_mid_tone_is_aa_not_aaa() {
        // Close to the luminance where black and white text tie
        let mid = grade_hex("#777777").unwrap();
        assert!(mid.contrast >= AA_THRESHOLD);
        assert!(!mid.wcag_aaa);
        assert!(mid.wcag_aa);
    }

    #[test]
    fn test_thresholds_are_consistent() {
        for v in 0..=255u8 {
            for rgb in [Rgb::new(v, v, v), Rgb::new(v, 255 - v, 90), Rgb::new(255, v, 0)] {
                let a = grade(rgb);
                assert_eq!(a.wcag_aa, a.contrast >= 4.5);
                assert_eq!(a.wcag_aaa, a.contrast >= 7.0);
                if a.wcag_aaa {
                    assert!(a.wcag_aa);
                }
            }
        }
    }

    #[test]
    fn test_prefers_white_text() {
        assert!(Accessibility::prefers_white_text(Rgb::new(0x1D, 0x35, 0x57)));
        assert!(!Accessibility::prefers_white_text(Rgb::new(0xFF, 0xD2, 0x3F)));
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(WcagLevel::Aa.threshold(), 4.5);
        assert_eq!(WcagLevel::Aaa.threshold(), 7.0);
        assert_eq!(WcagLevel::default(), WcagLevel::Aa);
    }

    #[test]
    fn test_score_empty() {
        let score = score_palette(&[]);
        assert_eq!(score.overall, 0);
        assert_eq!(score.emotion, Emotion::Neutral);
    }

    #[test]
    fn test_score_overall_is_mean() {
        let colours: Vec<Colour> = ["#FF0000", "#00FFFF"]
            .iter()
            .map(|h| Colour::from_hex(h).unwrap())
            .collect();
        let score = score_palette(&colours);
        assert_eq!(score.accessibility, 100);
        assert_eq!(score.harmony, 100);
        assert_eq!(score.overall, 100);
    }
}
