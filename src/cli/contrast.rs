//! Contrast command: WCAG ratio between two colours.

use clap::Args;

use crate::accessibility::{contrast_ratio, AAA_THRESHOLD, AA_THRESHOLD};
use crate::error::Result;
use crate::output::Printer;
use crate::types::Rgb;

/// Contrast ratio between two colours
#[derive(Args, Debug)]
pub struct ContrastArgs {
    /// Foreground colour (#RRGGBB)
    pub foreground: Rgb,

    /// Background colour (#RRGGBB)
    pub background: Rgb,
}

pub fn run(args: ContrastArgs, printer: &Printer) -> Result<()> {
    let ratio = contrast_ratio(args.foreground, args.background);

    printer.info(
        "Contrast",
        &format!(
            "{}{} on {}{}",
            printer.chip(args.foreground),
            args.foreground,
            printer.chip(args.background),
            args.background
        ),
    );
    printer.check(ratio >= AA_THRESHOLD, &format!("WCAG AA ({}:1)", AA_THRESHOLD));
    printer.check(ratio >= AAA_THRESHOLD, &format!("WCAG AAA ({}:1)", AAA_THRESHOLD));

    println!("{}", format_ratio(ratio));
    Ok(())
}

/// Ratio rounded to two decimals, e.g. `4.48:1`.
fn format_ratio(ratio: f64) -> String {
    format!("{:.2}:1", ratio)
}
