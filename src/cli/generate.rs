//! Generate command implementation.
//!
//! Builds a strategy input from flags, runs the palette engine, prints a
//! summary to stderr and the export to stdout.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::accessibility::{Accessibility, WcagLevel};
use crate::config::{Config, MAX_COUNT};
use crate::engine::PaletteEngine;
use crate::error::{Result, SwatchError};
use crate::export::{export, ExportFormat};
use crate::output::{display_path, plural, Printer};
use crate::strategy::{HarmonyScheme, Role, StrategyId, StrategyInput};
use crate::types::{Palette, Rgb};

use super::{load_config, read_palette, write_palette};

/// Generate a palette
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Generation strategy
    #[arg(long, short, value_enum, default_value_t = StrategyId::Prompt)]
    pub strategy: StrategyId,

    /// Free-text prompt (prompt strategy)
    #[arg(long, short)]
    pub prompt: Option<String>,

    /// Base colour (harmony strategy)
    #[arg(long)]
    pub base: Option<Rgb>,

    /// Harmony scheme (default from config)
    #[arg(long, value_enum)]
    pub scheme: Option<HarmonyScheme>,

    /// Brand seed colour, repeatable (brand strategy)
    #[arg(long = "seed-colour", value_delimiter = ',')]
    pub seed_colours: Vec<Rgb>,

    /// Contrast role, repeatable (accessibility strategy)
    #[arg(long = "role", value_enum, value_delimiter = ',')]
    pub roles: Vec<Role>,

    /// WCAG level (accessibility strategy)
    #[arg(long, value_enum, default_value_t = WcagLevel::Aa)]
    pub level: WcagLevel,

    /// Number of colours (ignored with --previous)
    #[arg(long, short)]
    pub count: Option<usize>,

    /// RNG seed for random colours
    #[arg(long)]
    pub seed: Option<u64>,

    /// Palette file to regenerate; its locked slots are kept
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Lock slot N of the previous palette (1-based), repeatable
    #[arg(long, value_delimiter = ',')]
    pub lock: Vec<usize>,

    /// Unlock slot N of the previous palette (1-based), repeatable
    #[arg(long, value_delimiter = ',')]
    pub unlock: Vec<usize>,

    /// Export format written to stdout (default from config)
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// Save the palette as JSON for later --previous or export
    #[arg(long)]
    pub save: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    let config = load_config(config)?;
    let palette = generate(&args, &config)?;

    print_summary(&palette, printer);

    let format = args.format.unwrap_or(config.format);
    print!("{}", export(&palette, format)?);

    if let Some(path) = &args.save {
        write_palette(path, &palette)?;
        printer.success("Saved", &display_path(path));
    }

    Ok(())
}

/// Resolve flags against the config and run the engine.
pub fn generate(args: &GenerateArgs, config: &Config) -> Result<Palette> {
    let mut config = config.clone();
    if let Some(count) = args.count {
        if count == 0 || count > MAX_COUNT {
            return Err(SwatchError::Build {
                message: format!("--count must be between 1 and {}, got {}", MAX_COUNT, count),
                help: None,
            });
        }
        config.count = count;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let previous = match &args.previous {
        Some(path) => Some(apply_locks(read_palette(path)?, &args.lock, &args.unlock)?),
        None if !args.lock.is_empty() || !args.unlock.is_empty() => {
            return Err(SwatchError::Build {
                message: "--lock and --unlock need a palette to act on".to_string(),
                help: Some("Pass the palette file with --previous".to_string()),
            });
        }
        None => None,
    };

    let input = strategy_input(args, &config)?;
    PaletteEngine::from_config(&config).generate(args.strategy, &input, previous.as_ref())
}

fn strategy_input(args: &GenerateArgs, config: &Config) -> Result<StrategyInput> {
    let missing = |flag: &str| SwatchError::StrategyInputMismatch {
        strategy: args.strategy,
        given: "no".to_string(),
        help: Some(format!("Pass {} with --strategy {}", flag, args.strategy)),
    };

    Ok(match args.strategy {
        StrategyId::Prompt => StrategyInput::Prompt {
            text: args.prompt.clone().ok_or_else(|| missing("--prompt"))?,
        },
        StrategyId::Harmony => StrategyInput::Harmony {
            base: args.base.ok_or_else(|| missing("--base"))?,
            scheme: args.scheme.unwrap_or(config.scheme),
        },
        StrategyId::Brand => StrategyInput::Brand {
            seeds: args.seed_colours.clone(),
        },
        StrategyId::Accessibility => StrategyInput::Accessibility {
            roles: args.roles.clone(),
            level: args.level,
        },
        StrategyId::Random => StrategyInput::Random,
    })
}

/// Apply 1-based lock and unlock requests, locks first.
fn apply_locks(mut palette: Palette, lock: &[usize], unlock: &[usize]) -> Result<Palette> {
    let requests = lock
        .iter()
        .map(|&slot| (slot, true))
        .chain(unlock.iter().map(|&slot| (slot, false)));
    for (slot, locked) in requests {
        let index = slot.checked_sub(1).ok_or_else(|| SwatchError::Build {
            message: "Slot 0 does not exist".to_string(),
            help: Some("Slots are numbered from 1".to_string()),
        })?;
        palette = palette.with_lock(index, locked)?;
    }
    Ok(palette)
}

fn print_summary(palette: &Palette, printer: &Printer) {
    printer.status(
        "Generated",
        &format!("{} ({})", palette.name(), plural(palette.len(), "colour", "colours")),
    );

    for (i, colour) in palette.colours().iter().enumerate() {
        let access = colour.accessibility();
        let grade = if access.wcag_aaa {
            "AAA"
        } else if access.wcag_aa {
            "AA"
        } else {
            "-"
        };
        let text = if Accessibility::prefers_white_text(colour.rgb()) {
            "white text"
        } else {
            "black text"
        };
        let lock = if colour.is_locked() { " locked" } else { "" };
        printer.info(
            &format!("{}", i + 1),
            &format!(
                "{}{} {} {}{}",
                printer.chip(colour.rgb()),
                printer.bold(colour.hex()),
                colour.name(),
                printer.dim(&format!("{:.2}:1 {} with {}", access.contrast, grade, text)),
                printer.cyan(lock)
            ),
        );
    }

    let score = palette.score();
    printer.info(
        "Score",
        &format!(
            "overall {} (accessibility {}, harmony {}), mood {}",
            score.overall, score.accessibility, score.harmony, score.emotion
        ),
    );
    if score.accessibility < 100 {
        printer.warning(
            "Contrast",
            "some colours fall below WCAG AA against both black and white",
        );
    }
}
