//! Error types for the tokenizer and theme pipelines
//!
//! The core transformations ([segmenting](super::segmenting) and
//! [normalization](super::theme::normalization)) never fail; every variant here comes from the
//! boundary: choosing a lexer, finding a theme, touching the filesystem or reading config.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum HighlightError {
    /// No lexer matched the given name, filename or content.
    ///
    /// Recoverable during automatic selection (the plain text lexer takes over).
    NoMatchingLexer { hint: String },
    /// The theme name is not in the catalog. `available` is sorted.
    UnknownTheme {
        name: String,
        available: Vec<String>,
    },
    /// Reading a source file, writing output, or scanning a theme directory failed.
    Io { path: PathBuf, source: io::Error },
    /// A theme file could not be parsed.
    ThemeParse { path: PathBuf, message: String },
    Config(config::ConfigError),
    Serialization(serde_json::Error),
}

impl HighlightError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HighlightError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighlightError::NoMatchingLexer { hint } => {
                write!(f, "No lexer found for '{}'", hint)
            }
            HighlightError::UnknownTheme { name, available } => {
                write!(
                    f,
                    "Unknown theme '{}'. Available themes: {}",
                    name,
                    available.join(", ")
                )
            }
            HighlightError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            HighlightError::ThemeParse { path, message } => {
                write!(f, "Invalid theme file {}: {}", path.display(), message)
            }
            HighlightError::Config(e) => write!(f, "Configuration error: {}", e),
            HighlightError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for HighlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HighlightError::Io { source, .. } => Some(source),
            HighlightError::Config(e) => Some(e),
            HighlightError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for HighlightError {
    fn from(e: config::ConfigError) -> Self {
        HighlightError::Config(e)
    }
}

impl From<serde_json::Error> for HighlightError {
    fn from(e: serde_json::Error) -> Self {
        HighlightError::Serialization(e)
    }
}
