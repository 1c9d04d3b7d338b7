//! Display names for palette colours.
//!
//! Names are a pure function of the colour, so a slot keeps its name for as
//! long as it keeps its hex.

use super::Hsl;

/// Hue families by upper bound (exclusive, degrees).
const HUE_FAMILIES: &[(f64, &str)] = &[
    (15.0, "Red"),
    (40.0, "Orange"),
    (50.0, "Amber"),
    (65.0, "Yellow"),
    (90.0, "Lime"),
    (150.0, "Green"),
    (175.0, "Teal"),
    (195.0, "Cyan"),
    (220.0, "Azure"),
    (250.0, "Blue"),
    (275.0, "Indigo"),
    (300.0, "Violet"),
    (330.0, "Magenta"),
    (350.0, "Rose"),
    (360.0, "Red"),
];

/// Describe a colour as `[modifier] family`, e.g. "Deep Teal" or "Silver".
pub fn colour_name(hsl: &Hsl) -> String {
    if !hsl.is_chromatic() {
        return grey_name(hsl.l).to_string();
    }

    let family = HUE_FAMILIES
        .iter()
        .find(|(bound, _)| hsl.h < *bound)
        .map_or("Red", |(_, name)| name);

    let modifier = match hsl.l {
        l if l < 25.0 => Some("Deep"),
        l if l < 40.0 => Some("Dark"),
        l if l > 80.0 => Some("Pale"),
        l if l > 65.0 => Some("Light"),
        _ if hsl.s < 35.0 => Some("Dusty"),
        _ => None,
    };

    match modifier {
        Some(m) => format!("{} {}", m, family),
        None => family.to_string(),
    }
}

fn grey_name(lightness: f64) -> &'static str {
    match lightness {
        l if l < 10.0 => "Black",
        l if l < 30.0 => "Charcoal",
        l if l < 70.0 => "Grey",
        l if l < 92.0 => "Silver",
        _ => "White",
    }
}
