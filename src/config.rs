//! Project configuration (swatch.yaml) parsing.
//!
//! The config sets palette defaults and extends the prompt keyword table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::export::ExportFormat;
use crate::strategy::{HarmonyScheme, KeywordRule, DEFAULT_RETRY_BUDGET};

/// Config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "swatch.yaml";

/// Largest palette the engine will build.
pub const MAX_COUNT: usize = 32;

/// Engine and CLI configuration loaded from swatch.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of slots in a fresh palette.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Candidates the accessibility strategy may try per palette.
    #[serde(default = "default_retry_budget")]
    pub retry_budget: usize,

    /// Seed for random colours. Unseeded runs draw from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Default harmony scheme.
    #[serde(default)]
    pub scheme: HarmonyScheme,

    /// Default export format.
    #[serde(default)]
    pub format: ExportFormat,

    /// Prompt rules consulted before the builtin table.
    #[serde(default)]
    pub keywords: Vec<KeywordRule>,
}

fn default_count() -> usize {
    5
}

fn default_retry_budget() -> usize {
    DEFAULT_RETRY_BUDGET
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: default_count(),
            retry_budget: default_retry_budget(),
            seed: None,
            scheme: HarmonyScheme::default(),
            format: ExportFormat::default(),
            keywords: vec![],
        }
    }
}

impl Config {
    /// Load config from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `swatch.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(SwatchError::Parse {
                message: format!("count must be between 1 and {}, got {}", MAX_COUNT, self.count),
                help: None,
            });
        }

        for (i, rule) in self.keywords.iter().enumerate() {
            if rule.keywords.is_empty() || rule.palette.is_empty() {
                return Err(SwatchError::Parse {
                    message: format!("Keyword rule {} needs at least one keyword and one colour", i + 1),
                    help: Some("Example:\n  - keywords: [retro]\n    palette: [\"#F4A261\"]".to_string()),
                });
            }
        }

        Ok(())
    }

    /// Render this config as YAML, for `swatch init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SwatchError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}
