//! Keyword rule table for the prompt mapper.

use serde::{Deserialize, Serialize};

use crate::types::Rgb;

/// Maps any of `keywords` to a fixed palette.
///
/// Single-word keywords match whole prompt words; keywords containing spaces
/// match as a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub palette: Vec<Rgb>,
}

impl KeywordRule {
    /// Check the rule against a normalized prompt (lowercase words joined by single spaces).
    pub fn matches(&self, prompt: &str) -> bool {
        let padded = format!(" {} ", prompt);
        self.keywords.iter().any(|keyword| {
            let keyword = normalize(keyword);
            !keyword.is_empty() && padded.contains(&format!(" {} ", keyword))
        })
    }
}

/// Lowercase and collapse a prompt into space-separated alphanumeric words.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

const fn hex(v: u32) -> Rgb {
    Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Builtin rules, in match order.
const BUILTIN: &[(&[&str], [Rgb; 5])] = &[
    (
        &["fitness", "energetic", "workout", "gym", "sport", "sports"],
        [hex(0xFF6B35), hex(0xF7931E), hex(0xFFD23F), hex(0x06FFA5), hex(0x118AB2)],
    ),
    (
        &["zen", "meditation", "calm", "wellness", "yoga", "spa", "mindful"],
        [hex(0xE8F1F2), hex(0xA3C4BC), hex(0x7D9D9C), hex(0x576F72), hex(0x2F3E46)],
    ),
    (
        &["ocean", "sea", "beach", "marine", "water", "surf"],
        [hex(0x03045E), hex(0x0077B6), hex(0x00B4D8), hex(0x90E0EF), hex(0xCAF0F8)],
    ),
    (
        &["forest", "nature", "eco", "organic", "plant", "plants", "garden"],
        [hex(0x2D6A4F), hex(0x40916C), hex(0x52B788), hex(0x74C69D), hex(0xB7E4C7)],
    ),
    (
        &["sunset", "dusk", "autumn", "fall", "romantic"],
        [hex(0x355070), hex(0x6D597A), hex(0xB56576), hex(0xE56B6F), hex(0xEAAC8B)],
    ),
    (
        &["tech", "startup", "saas", "software", "digital", "ai", "developer"],
        [hex(0x0F172A), hex(0x3A86FF), hex(0x8338EC), hex(0x00F5D4), hex(0xF1F5F9)],
    ),
    (
        &["luxury", "elegant", "premium", "fashion", "jewelry"],
        [hex(0x0B0B0B), hex(0x1C1C1C), hex(0xBFA181), hex(0xD4AF37), hex(0xF5F5F0)],
    ),
    (
        &["food", "restaurant", "cafe", "coffee", "bakery", "kitchen"],
        [hex(0x6F4E37), hex(0xA67B5B), hex(0xECB176), hex(0xFED8B1), hex(0xF6EFE9)],
    ),
    (
        &["kids", "playful", "fun", "toy", "toys", "game", "games"],
        [hex(0xFF595E), hex(0xFFCA3A), hex(0x8AC926), hex(0x1982C4), hex(0x6A4C93)],
    ),
    (
        &["finance", "bank", "banking", "corporate", "business", "professional"],
        [hex(0x0A2342), hex(0x2CA58D), hex(0x84BC9C), hex(0xFFFDF7), hex(0xF46197)],
    ),
    (
        &["health", "medical", "clinic", "hospital", "care"],
        [hex(0xE3F2FD), hex(0x90CAF9), hex(0x42A5F5), hex(0x1E88E5), hex(0x0D47A1)],
    ),
];

/// The builtin rule table.
pub fn builtin_rules() -> Vec<KeywordRule> {
    BUILTIN
        .iter()
        .map(|(keywords, palette)| KeywordRule {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            palette: palette.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(keywords: &[&str]) -> KeywordRule {
        KeywordRule {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            palette: vec![Rgb::BLACK],
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Energetic, FITNESS-app! "), "energetic fitness app");
        assert_eq!(normalize("!!"), "");
    }

    #[test]
    fn test_whole_word_match() {
        let r = rule(&["ai"]);
        assert!(r.matches(&normalize("an AI assistant")));
        assert!(!r.matches(&normalize("rainy day painting")));
    }

    #[test]
    fn test_phrase_match() {
        let r = rule(&["dark mode"]);
        assert!(r.matches(&normalize("a Dark-Mode dashboard")));
        assert!(!r.matches(&normalize("mode dark")));
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        assert!(!rule(&["", "  "]).matches("anything"));
    }

    #[test]
    fn test_builtin_table_shape() {
        let rules = builtin_rules();
        assert!(rules.len() >= 10);
        assert!(rules.iter().all(|r| r.palette.len() == 5 && !r.keywords.is_empty()));
        assert_eq!(rules[0].palette[0].to_string(), "#FF6B35");
    }
}
