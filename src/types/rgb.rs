//! RGB colour type and hex parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SwatchError};

/// An opaque 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Parse a 6-digit hex colour string, with or without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SwatchError::InvalidFormat {
                input: s.to_string(),
            });
        }

        let r = parse_hex_byte(&hex[0..2], s)?;
        let g = parse_hex_byte(&hex[2..4], s)?;
        let b = parse_hex_byte(&hex[4..6], s)?;
        Ok(Self::new(r, g, b))
    }

    /// Canonical `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl FromStr for Rgb {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Channels { r: u8, g: u8, b: u8 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(hex) => Rgb::from_hex(&hex).map_err(serde::de::Error::custom),
            Repr::Channels { r, g, b } => Ok(Rgb::new(r, g, b)),
        }
    }
}

/// Parse a hex colour string into RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex)
}

/// Format RGB channels as canonical uppercase hex.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str, input: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::InvalidFormat {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Rgb::from_hex("#FF0000").unwrap();
        assert_eq!(c, Rgb::new(255, 0, 0));

        let c = Rgb::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Rgb::new(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Rgb::from_hex("FF6B35").unwrap();
        assert_eq!(c, Rgb::new(0xFF, 0x6B, 0x35));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgb::from_hex("#F00").is_err());
        assert!(Rgb::from_hex("#GG0000").is_err());
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#FF000080").is_err());
        assert!(Rgb::from_hex("##FF0000").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_rejects_whitespace() {
        for input in [" #FF0000", "FF0000\n", " #FF0000 ", "\tFF0000\n", "# FF0000"] {
            assert!(
                matches!(hex_to_rgb(input), Err(SwatchError::InvalidFormat { .. })),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_invalid_format_keeps_input() {
        match Rgb::from_hex("#nothex") {
            Err(SwatchError::InvalidFormat { input }) => assert_eq!(input, "#nothex"),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(Rgb::new(0xab, 0xcd, 0xef).to_string(), "#ABCDEF");
        assert_eq!(rgb_to_hex(Rgb::BLACK), "#000000");
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#FFFFFF", "#ff6b35", "06FFA5", "#118aB2", "#7F7F7F"] {
            let normalized = format!("#{}", hex.trim_start_matches('#').to_uppercase());
            assert_eq!(rgb_to_hex(hex_to_rgb(hex).unwrap()), normalized);
        }
    }

    #[test]
    fn test_hex_round_trip_every_grey_and_primary_step() {
        for v in 0..=255u8 {
            for rgb in [Rgb::new(v, v, v), Rgb::new(v, 0, 255 - v), Rgb::new(17, v, 200)] {
                assert_eq!(Rgb::from_hex(&rgb.to_hex()).unwrap(), rgb);
            }
        }
    }

    #[test]
    fn test_deserialize_hex_or_channels() {
        let a: Rgb = serde_json::from_str("\"#FF6B35\"").unwrap();
        let b: Rgb = serde_json::from_str(r#"{"r":255,"g":107,"b":53}"#).unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<Rgb>("\"#XYZXYZ\"").is_err());
    }
}
