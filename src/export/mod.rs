//! Palette export to interchange formats.
//!
//! Every exporter is a pure function from a [`Palette`] to a string. The
//! Figma and Adobe payloads follow versioned schemas (`swatch.figma/v1`,
//! `swatch.adobe/v1`) and are byte-stable for a given palette.

mod design;
mod stylesheet;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::types::Palette;

pub use design::{FIGMA_SCHEMA, ADOBE_SCHEMA};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Tailwind,
    Json,
    Figma,
    Adobe,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Tailwind,
        ExportFormat::Json,
        ExportFormat::Figma,
        ExportFormat::Adobe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Json => "json",
            ExportFormat::Figma => "figma",
            ExportFormat::Adobe => "adobe",
        }
    }

    /// Conventional file extension for the exported text.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Tailwind => "js",
            ExportFormat::Json | ExportFormat::Figma | ExportFormat::Adobe => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| SwatchError::UnknownFormat(s.to_string()))
    }
}

/// Serialize a palette.
pub fn export(palette: &Palette, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Css => Ok(stylesheet::css(palette)),
        ExportFormat::Scss => Ok(stylesheet::scss(palette)),
        ExportFormat::Tailwind => Ok(stylesheet::tailwind(palette)),
        ExportFormat::Json => design::json(palette),
        ExportFormat::Figma => design::figma(palette),
        ExportFormat::Adobe => design::adobe(palette),
    }
}

/// Serialize a palette by format id, rejecting unknown ids.
pub fn export_as(palette: &Palette, format: &str) -> Result<String> {
    export(palette, format.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyId;
    use crate::types::{Colour, Source};

    fn palette() -> Palette {
        let colours = ["#FF6B35", "#118AB2"]
            .iter()
            .map(|h| Colour::from_hex(h).unwrap())
            .collect();
        Palette::new(
            colours,
            Source {
                strategy: StrategyId::Prompt,
                input: "gym".to_string(),
            },
        )
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("css".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert_eq!(" FIGMA ".parse::<ExportFormat>().unwrap(), ExportFormat::Figma);
    }

    #[test]
    fn test_unknown_format() {
        match export_as(&palette(), "sketch") {
            Err(SwatchError::UnknownFormat(id)) => assert_eq!(id, "sketch"),
            other => panic!("expected UnknownFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_every_format_exports() {
        let p = palette();
        for format in ExportFormat::ALL {
            let text = export(&p, format).unwrap();
            assert!(text.contains("FF6B35") || text.contains("0.4196"), "{}", format);
        }
    }

    #[test]
    fn test_export_is_pure() {
        let p = palette();
        for format in ExportFormat::ALL {
            assert_eq!(export(&p, format).unwrap(), export(&p, format).unwrap());
        }
    }
}
