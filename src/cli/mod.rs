pub mod completions;
pub mod contrast;
pub mod export;
pub mod extract;
pub mod generate;
pub mod init;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Result, SwatchError};
use crate::types::Palette;

/// swatch - Accessible colour palette generator
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./swatch.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a palette and print it in an export format
    Generate(generate::GenerateArgs),

    /// Contrast ratio between two colours
    Contrast(contrast::ContrastArgs),

    /// Extract the most frequent colours from an image
    Extract(extract::ExtractArgs),

    /// Export a saved palette
    Export(export::ExportArgs),

    /// Initialize a swatch project (generates swatch.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load an explicit config file, or discover one in the working directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(Path::new(".")),
    }
}

/// Read a palette saved by `swatch generate --save`.
pub fn read_palette(path: &Path) -> Result<Palette> {
    let content = fs::read_to_string(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read palette: {}", e),
    })?;
    serde_json::from_str(&content).map_err(|e| SwatchError::Parse {
        message: format!("Invalid palette file {}: {}", path.display(), e),
        help: Some("Palette files are written by `swatch generate --save`".to_string()),
    })
}

/// Write a palette as pretty JSON.
pub fn write_palette(path: &Path, palette: &Palette) -> Result<()> {
    let json = serde_json::to_string_pretty(palette).map_err(|e| SwatchError::Build {
        message: format!("Failed to serialize palette: {}", e),
        help: None,
    })?;
    fs::write(path, json + "\n").map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write palette: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PaletteEngine;
    use crate::strategy::{StrategyId, StrategyInput};
    use tempfile::tempdir;

    #[test]
    fn test_palette_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.json");
        let palette = PaletteEngine::new()
            .generate(
                StrategyId::Prompt,
                &StrategyInput::Prompt {
                    text: "zen".to_string(),
                },
                None,
            )
            .unwrap()
            .with_lock(0, true)
            .unwrap();

        write_palette(&path, &palette).unwrap();
        assert_eq!(read_palette(&path).unwrap(), palette);
    }

    #[test]
    fn test_read_palette_errors() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            read_palette(&dir.path().join("missing.json")),
            Err(SwatchError::Io { .. })
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{\"colours\": [\"#GGGGGG\"]}").unwrap();
        assert!(matches!(read_palette(&bad), Err(SwatchError::Parse { .. })));
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
