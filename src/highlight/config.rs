//! Configuration for lexing, output and theme lookup
//!
//! Every key has a value in `defaults/hilite.default.toml`, which is compiled in. The CLI
//! stacks `./hilite.toml` and `--config <file>` over it with [`Loader`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/hilite.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub lexing: LexingConfig,
    pub output: OutputConfig,
    pub themes: ThemesConfig,
}

/// Source preprocessing applied before a lexer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LexingConfig {
    pub normalize_line_endings: bool,
    pub strip_newlines: bool,
    pub ensure_trailing_newline: bool,
    pub tab_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
    pub token_file_suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemesConfig {
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}

/// Builds a [HighlightConfig] from the embedded defaults plus any number of TOML layers.
///
/// Later layers win, and `set_override` wins over every file.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file that must exist (`--config`).
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a TOML file that is skipped when absent (`./hilite.toml`).
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Set one dotted key, e.g. `lexing.tab_size`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize. Type mismatches surface here.
    pub fn build(self) -> Result<HighlightConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with no user layers.
pub fn load_defaults() -> Result<HighlightConfig, ConfigError> {
    Loader::new().build()
}
