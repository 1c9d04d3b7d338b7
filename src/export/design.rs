//! JSON-based exports: plain JSON and design-tool import payloads.

use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::strategy::StrategyId;
use crate::types::{Colour, Palette};

/// Schema id stamped on Figma payloads.
pub const FIGMA_SCHEMA: &str = "swatch.figma/v1";

/// Schema id stamped on Adobe payloads.
pub const ADOBE_SCHEMA: &str = "swatch.adobe/v1";

#[derive(Serialize)]
struct JsonPalette<'a> {
    colors: Vec<JsonColour<'a>>,
    metadata: JsonMetadata<'a>,
}

#[derive(Serialize)]
struct JsonColour<'a> {
    hex: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct JsonMetadata<'a> {
    strategy: StrategyId,
    input: &'a str,
}

pub(super) fn json(palette: &Palette) -> Result<String> {
    let output = JsonPalette {
        colors: palette
            .colours()
            .iter()
            .map(|c| JsonColour {
                hex: c.hex(),
                name: c.name(),
            })
            .collect(),
        metadata: JsonMetadata {
            strategy: palette.source().strategy,
            input: &palette.source().input,
        },
    };
    to_json(&output, "JSON")
}

// Figma: one paint style per slot, colour channels as 0-1 floats.

#[derive(Serialize)]
struct FigmaDocument {
    schema: &'static str,
    name: String,
    styles: Vec<FigmaStyle>,
}

#[derive(Serialize)]
struct FigmaStyle {
    name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    paints: [FigmaPaint; 1],
}

#[derive(Serialize)]
struct FigmaPaint {
    #[serde(rename = "type")]
    kind: &'static str,
    color: FigmaColor,
    opacity: f64,
}

#[derive(Serialize)]
struct FigmaColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

pub(super) fn figma(palette: &Palette) -> Result<String> {
    let name = palette.name();
    // Figma reads `/` in a style name as a group separator
    let group = name.replace('/', "-");
    let styles = palette
        .colours()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let [r, g, b] = unit_channels(c);
            FigmaStyle {
                name: format!("{}/{} {}", group, i + 1, c.name()),
                kind: "PAINT",
                paints: [FigmaPaint {
                    kind: "SOLID",
                    color: FigmaColor { r, g, b, a: 1.0 },
                    opacity: 1.0,
                }],
            }
        })
        .collect();

    to_json(
        &FigmaDocument {
            schema: FIGMA_SCHEMA,
            name,
            styles,
        },
        "Figma",
    )
}

// Adobe: a single swatch group mirroring the ASE group/swatch layout.

#[derive(Serialize)]
struct AdobeDocument {
    schema: &'static str,
    version: &'static str,
    groups: [AdobeGroup; 1],
}

#[derive(Serialize)]
struct AdobeGroup {
    name: String,
    swatches: Vec<AdobeSwatch>,
}

#[derive(Serialize)]
struct AdobeSwatch {
    name: String,
    model: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    values: [f64; 3],
}

pub(super) fn adobe(palette: &Palette) -> Result<String> {
    let swatches = palette
        .colours()
        .iter()
        .map(|c| AdobeSwatch {
            name: format!("{} {}", c.name(), c.hex()),
            model: "RGB",
            kind: "global",
            values: unit_channels(c),
        })
        .collect();

    to_json(
        &AdobeDocument {
            schema: ADOBE_SCHEMA,
            version: "1.0",
            groups: [AdobeGroup {
                name: palette.name(),
                swatches,
            }],
        },
        "Adobe",
    )
}

/// Channels as 0-1 floats rounded to 4 decimals.
fn unit_channels(colour: &Colour) -> [f64; 3] {
    colour
        .rgb()
        .to_unit()
        .map(|v| (v * 10_000.0).round() / 10_000.0)
}

fn to_json<T: Serialize>(value: &T, label: &str) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| SwatchError::Build {
        message: format!("Failed to serialize {} export: {}", label, e),
        help: None,
    })
}
