//! Extract command: dominant colours of an image, usable as brand seeds.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use image::RgbaImage;

use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::types::{colour_name, rgb_to_hsl, Rgb};

/// Extract the most frequent colours from an image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Image file to extract colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Maximum number of colours to output
    #[arg(long, default_value_t = 5)]
    pub max: usize,
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;
    let display = display_path(path);

    let img = image::open(path)
        .map_err(|e| SwatchError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let colours = dominant_colours(&img, args.max);
    printer.status(
        "Sampled",
        &format!("{} from {}", plural(colours.len(), "colour", "colours"), display),
    );

    // Hex lines on stdout, ready for --seed-colour
    for (rgb, count) in &colours {
        printer.info(
            &rgb.to_string(),
            &format!(
                "{}{} {}",
                printer.chip(*rgb),
                colour_name(&rgb_to_hsl(*rgb)),
                printer.dim(&plural(*count, "pixel", "pixels"))
            ),
        );
        println!("{}", rgb);
    }

    Ok(())
}

/// Opaque colours by pixel count, most common first.
///
/// Fully transparent pixels are skipped; alpha is otherwise ignored. Ties
/// break by channel value so output is stable.
pub fn dominant_colours(img: &RgbaImage, max: usize) -> Vec<(Rgb, usize)> {
    let mut counts: HashMap<Rgb, usize> = HashMap::new();
    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        *counts.entry(Rgb::new(r, g, b)).or_insert(0) += 1;
    }

    let mut colours: Vec<(Rgb, usize)> = counts.into_iter().collect();
    colours.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| (a.0.r, a.0.g, a.0.b).cmp(&(b.0.r, b.0.g, b.0.b)))
    });
    colours.truncate(max);
    colours
}
