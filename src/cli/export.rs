//! Export command: render a saved palette in another format.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, SwatchError};
use crate::export::{export, ExportFormat};
use crate::output::{display_path, Printer};

use super::{load_config, read_palette};

/// Export a saved palette
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Palette file written by `swatch generate --save`
    pub file: PathBuf,

    /// Export format (default from config)
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    let format = match args.format {
        Some(format) => format,
        None => load_config(config)?.format,
    };
    let palette = read_palette(&args.file)?;
    let text = export(&palette, format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &text).map_err(|e| SwatchError::Io {
                path: path.clone(),
                message: format!("Failed to write export: {}", e),
            })?;
            printer.success("Exported", &format!("{} ({})", display_path(path), format));
        }
        None => print!("{}", text),
    }

    Ok(())
}
