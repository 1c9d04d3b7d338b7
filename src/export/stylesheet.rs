//! Stylesheet exports: CSS custom properties, SCSS variables, Tailwind theme.

use std::fmt::Write;

use crate::types::Palette;

/// `:root` block of `--color-N` custom properties.
pub(super) fn css(palette: &Palette) -> String {
    let mut out = String::from(":root {\n");
    for (i, colour) in palette.colours().iter().enumerate() {
        let _ = writeln!(out, "  --color-{}: {};", i + 1, colour.hex());
    }
    out.push_str("}\n");
    out
}

/// `$color-N` variables, one per line.
pub(super) fn scss(palette: &Palette) -> String {
    let mut out = String::new();
    for (i, colour) in palette.colours().iter().enumerate() {
        let _ = writeln!(out, "$color-{}: {};", i + 1, colour.hex());
    }
    out
}

/// Tailwind config extending the theme with a `palette` colour group.
pub(super) fn tailwind(palette: &Palette) -> String {
    let mut out = String::from(
        "module.exports = {\n  theme: {\n    extend: {\n      colors: {\n        palette: {\n",
    );
    for (i, colour) in palette.colours().iter().enumerate() {
        let _ = writeln!(out, "          {}: '{}',", i + 1, colour.hex());
    }
    out.push_str("        },\n      },\n    },\n  },\n};\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyId;
    use crate::types::{Colour, Source};
    use pretty_assertions::assert_eq;

    fn palette() -> Palette {
        let colours = ["#FF6B35", "#06ffa5"]
            .iter()
            .map(|h| Colour::from_hex(h).unwrap())
            .collect();
        Palette::new(
            colours,
            Source {
                strategy: StrategyId::Random,
                input: String::new(),
            },
        )
    }

    #[test]
    fn test_css() {
        assert_eq!(
            css(&palette()),
            ":root {\n  --color-1: #FF6B35;\n  --color-2: #06FFA5;\n}\n"
        );
    }

    #[test]
    fn test_scss() {
        assert_eq!(scss(&palette()), "$color-1: #FF6B35;\n$color-2: #06FFA5;\n");
    }

    #[test]
    fn test_tailwind() {
        let out = tailwind(&palette());
        assert!(out.starts_with("module.exports = {"));
        assert!(out.contains("          1: '#FF6B35',\n"));
        assert!(out.contains("          2: '#06FFA5',\n"));
        assert!(out.ends_with("};\n"));
    }
}
