use miette::Diagnostic;
use thiserror::Error;

use crate::strategy::StrategyId;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("Invalid colour format: {input}")]
    #[diagnostic(code(swatch::invalid_format), help("Use 6-digit hex notation like #FF6B35"))]
    InvalidFormat { input: String },

    #[error("Found only {found} of {wanted} accessible colours within {budget} attempts")]
    #[diagnostic(code(swatch::accessibility))]
    AccessibilityUnsatisfiable {
        wanted: usize,
        found: usize,
        budget: usize,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown export format: {0}")]
    #[diagnostic(
        code(swatch::export),
        help("Available formats: css, scss, tailwind, json, figma, adobe")
    )]
    UnknownFormat(String),

    #[error("The {strategy} strategy cannot use {given} input")]
    #[diagnostic(code(swatch::strategy))]
    StrategyInputMismatch {
        strategy: StrategyId,
        given: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(swatch::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
