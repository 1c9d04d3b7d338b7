//! Colour adjustments in HSL space.
//!
//! - `lighten` / `darken` - move lightness toward white or black by a percentage
//! - `adjust_lightness` - signed form of both, used for tint/shade ladders

use palette::{Hsl, IntoColor, Srgb};

use super::Rgb;

/// Increase lightness by a percentage of the remaining range.
pub fn lighten(colour: Rgb, percent: f32) -> Rgb {
    adjust_lightness(colour, percent.abs())
}

/// Decrease lightness by a percentage of the current value.
pub fn darken(colour: Rgb, percent: f32) -> Rgb {
    adjust_lightness(colour, -percent.abs())
}

/// Signed lightness adjustment: positive lightens, negative darkens.
pub fn adjust_lightness(colour: Rgb, percent: f32) -> Rgb {
    let mut hsl = to_hsl(colour);

    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.lightness += (1.0 - hsl.lightness) * delta;
    } else {
        hsl.lightness += hsl.lightness * delta;
    }
    hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

    from_hsl(hsl)
}

fn to_hsl(colour: Rgb) -> Hsl {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );
    rgb.into_color()
}

fn from_hsl(hsl: Hsl) -> Rgb {
    let rgb_out: Srgb<f32> = hsl.into_color();
    Rgb::new(
        (rgb_out.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb_out.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb_out.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}
