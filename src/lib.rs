//! swatch - Accessible colour palette generator
//!
//! A library for generating colour palettes from prompts, colour harmony
//! rules, brand seeds, or contrast requirements, scoring them for
//! accessibility, harmony, and mood, and exporting them to stylesheet and
//! design-tool formats.

pub mod accessibility;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod output;
pub mod strategy;
pub mod types;

pub use accessibility::{
    contrast_ratio, grade, score_palette, Accessibility, Emotion, PaletteScore, WcagLevel,
};
pub use config::{Config, CONFIG_FILENAME};
pub use engine::PaletteEngine;
pub use error::{Result, SwatchError};
pub use export::{export, export_as, ExportFormat};
pub use strategy::{
    GenerationStrategy, HarmonyScheme, KeywordRule, Role, StrategyId, StrategyInput,
};
pub use types::{Colour, Hsl, Palette, Rgb, Source};
