//! Hue harmony heuristic.
//!
//! Harmony is the better of two circular statistics over the chromatic hues:
//! cohesion (mean resultant length, high for analogous palettes) and evenness
//! (how uniform the gaps between distinct hues are, high for complementary,
//! triadic and tetradic palettes). Palettes with fewer than two chromatic
//! colours score 100.

use crate::types::Hsl;

/// Harmony score in `0..=100`.
pub fn harmony_score(colours: &[Hsl]) -> u8 {
    let hues: Vec<f64> = colours
        .iter()
        .filter(|hsl| hsl.is_chromatic())
        .map(|hsl| hsl.h)
        .collect();

    if hues.len() < 2 {
        return 100;
    }

    let best = cohesion(&hues).max(evenness(&hues));
    (best.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Mean resultant length of the hue angles, `0.0..=1.0`.
fn cohesion(hues: &[f64]) -> f64 {
    let (sin, cos) = hues.iter().fold((0.0, 0.0), |(s, c), h| {
        let rad = h.to_radians();
        (s + rad.sin(), c + rad.cos())
    });
    (sin * sin + cos * cos).sqrt() / hues.len() as f64
}

/// Hues closer than this (degrees) count as one hue for spacing purposes.
const SAME_HUE: f64 = 10.0;

/// Sorted hues with near-duplicates merged, including across 0/360.
fn distinct_hues(hues: &[f64]) -> Vec<f64> {
    let mut sorted = hues.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut distinct: Vec<f64> = Vec::with_capacity(sorted.len());
    for h in sorted {
        match distinct.last() {
            Some(&last) if h - last <= SAME_HUE => {}
            _ => distinct.push(h),
        }
    }
    if distinct.len() > 1 {
        if let (Some(&first), Some(&last)) = (distinct.first(), distinct.last()) {
            if first + 360.0 - last <= SAME_HUE {
                distinct.pop();
            }
        }
    }
    distinct
}

/// One minus the coefficient of variation of the circular gaps between distinct hues.
fn evenness(hues: &[f64]) -> f64 {
    let sorted = distinct_hues(hues);
    let n = sorted.len();
    if n < 2 {
        return 0.0;
    }

    let gaps: Vec<f64> = (0..n)
        .map(|i| {
            if i + 1 < n {
                sorted[i + 1] - sorted[i]
            } else {
                sorted[0] + 360.0 - sorted[i]
            }
        })
        .collect();

    let mean = 360.0 / n as f64;
    let variance = gaps.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / n as f64;
    (1.0 - variance.sqrt() / mean).clamp(0.0, 1.0)
}
