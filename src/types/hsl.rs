//! HSL projection of RGB colours.

use palette::{Hsl as PaletteHsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use super::Rgb;

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Whether the colour carries a meaningful hue.
    pub fn is_chromatic(&self) -> bool {
        self.s >= 10.0
    }
}

/// Convert RGB to HSL using the min/max channel method.
///
/// Achromatic colours (`max == min`) get `h = 0, s = 0`.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(normalize_hue(h * 60.0), s * 100.0, l * 100.0)
}

/// Convert HSL back to 8-bit RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let hsl = PaletteHsl::new(
        normalize_hue(hsl.h) as f32,
        (hsl.s / 100.0).clamp(0.0, 1.0) as f32,
        (hsl.l / 100.0).clamp(0.0, 1.0) as f32,
    );
    let rgb: Srgb<f32> = hsl.into_color();

    Rgb::new(
        unit_to_byte(rgb.red),
        unit_to_byte(rgb.green),
        unit_to_byte(rgb.blue),
    )
}

/// Wrap a hue angle into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.5
    }

    #[test]
    fn test_primaries() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_eq!(red, Hsl::new(0.0, 100.0, 50.0));

        let green = rgb_to_hsl(Rgb::new(0, 255, 0));
        assert!(approx(green.h, 120.0));

        let blue = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert!(approx(blue.h, 240.0));
    }

    #[test]
    fn test_achromatic() {
        let grey = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert!(approx(grey.l, 50.2));
        assert!(!grey.is_chromatic());

        assert_eq!(rgb_to_hsl(Rgb::WHITE), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(rgb_to_hsl(Rgb::BLACK), Hsl::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_magenta_hue_wraps() {
        // g < b on a red-max colour lands in the 300s, not negative
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 128));
        assert!(hsl.h > 300.0 && hsl.h < 360.0);
    }

    #[test]
    fn test_ranges() {
        for rgb in [
            Rgb::new(0xFF, 0x6B, 0x35),
            Rgb::new(0x06, 0xFF, 0xA5),
            Rgb::new(0x11, 0x8A, 0xB2),
            Rgb::new(1, 2, 3),
        ] {
            let hsl = rgb_to_hsl(rgb);
            assert!((0.0..360.0).contains(&hsl.h));
            assert!((0.0..=100.0).contains(&hsl.s));
            assert!((0.0..=100.0).contains(&hsl.l));
        }
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 50.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 100.0)), Rgb::WHITE);
    }

    #[test]
    fn test_hsl_round_trip_is_close() {
        let original = Rgb::new(0xFF, 0x6B, 0x35);
        let back = hsl_to_rgb(rgb_to_hsl(original));
        assert!((i16::from(original.r) - i16::from(back.r)).abs() <= 1);
        assert!((i16::from(original.g) - i16::from(back.g)).abs() <= 1);
        assert!((i16::from(original.b) - i16::from(back.b)).abs() <= 1);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(360.0), 0.0);
    }
}
