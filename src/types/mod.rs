//! Core domain types for swatch.
//!
//! This module contains the fundamental colour types:
//! - `Rgb` / `Hsl` - channel representations and conversions
//! - `Colour` - one palette slot with cached projections
//! - `Palette` - an ordered, scored set of slots

mod adjust;
mod colour;
mod hsl;
mod naming;
mod palette;
mod rgb;

pub use adjust::{adjust_lightness, darken, lighten};
pub use colour::Colour;
pub use hsl::{hsl_to_rgb, normalize_hue, rgb_to_hsl, Hsl};
pub use naming::colour_name;
pub use palette::{Palette, Source};
pub use rgb::{hex_to_rgb, rgb_to_hex, Rgb};
