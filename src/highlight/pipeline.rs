//! Tokenizer and theme pipelines
//!
//! This module provides the primary entry point for both pipelines. The [Highlighter] owns the
//! lexer registry, the theme catalog and the configuration.
//!
//! # Architecture
//!
//! - String-based methods are the core functionality (process source text / theme names)
//! - File-based methods are thin wrappers (read file, then call string method)
//! - The two pipelines share no state
//!
//! # Examples
//!
//! ```rust,ignore
//! use hilite::highlight::pipeline::{Highlighter, LexerChoice};
//!
//! let highlighter = Highlighter::new(load_defaults()?)?;
//!
//! // Tokenize a string, picking the lexer from a filename hint
//! let lines = highlighter.tokenize("print(1)\n", LexerChoice::Filename("a.py".as_ref()))?;
//!
//! // Tokenize a file
//! let lines = highlighter.load_and_tokenize("src/main.py", None)?;
//!
//! // Normalize a theme
//! let theme = highlighter.theme("monokai")?;
//! ```

use super::config::HighlightConfig;
use super::error::HighlightError;
use super::lexing::plain::PlainTextLexer;
use super::lexing::{lex, Lexer, LexerRegistry};
use super::segmenting::segment_lines;
use super::theme::{NormalizedTheme, ThemeCatalog};
use super::token::LineTokenMatrix;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How the tokenizer pipeline picks a lexer.
#[derive(Debug, Clone, Copy)]
pub enum LexerChoice<'a> {
    /// A lexer name or alias. Unknown names are an error.
    Named(&'a str),
    /// Match the filename, then guess from content, then fall back to plain text.
    Filename(&'a Path),
    /// Guess from content, then fall back to plain text.
    Guess,
}

/// Primary API for both pipelines
pub struct Highlighter {
    lexers: LexerRegistry,
    themes: ThemeCatalog,
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a Highlighter with the built-in lexers and themes, plus any themes found in
    /// `config.themes.search_paths`.
    pub fn new(config: HighlightConfig) -> Result<Self, HighlightError> {
        let mut themes = ThemeCatalog::with_defaults();
        for dir in &config.themes.search_paths {
            let loaded = themes.load_dir(dir)?;
            info!(themes.dir = %dir.display(), themes.loaded = loaded, "Theme directory scanned");
        }
        Ok(Self::with_parts(LexerRegistry::with_defaults(), themes, config))
    }

    /// Create a Highlighter from explicit parts
    pub fn with_parts(lexers: LexerRegistry, themes: ThemeCatalog, config: HighlightConfig) -> Self {
        Self {
            lexers,
            themes,
            config,
        }
    }

    pub fn lexers(&self) -> &LexerRegistry {
        &self.lexers
    }

    pub fn themes(&self) -> &ThemeCatalog {
        &self.themes
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    // ===== TOKENIZER PIPELINE =====

    /// Choose a lexer for `source`.
    ///
    /// Only an explicit name can fail. Automatic selection falls back to plain text when
    /// neither the filename nor the content identifies a lexer.
    pub fn select_lexer<'s>(
        &'s self,
        source: &str,
        choice: LexerChoice<'_>,
    ) -> Result<&'s dyn Lexer, HighlightError> {
        let selected = match choice {
            LexerChoice::Named(name) => return self.lexers.get(name),
            LexerChoice::Filename(path) => self
                .lexers
                .for_filename(path)
                .or_else(|_| self.lexers.guess(source)),
            LexerChoice::Guess => self.lexers.guess(source),
        };

        match selected {
            Ok(lexer) => Ok(lexer),
            Err(err) => {
                warn!(error = %err, "Could not determine language, using plain text");
                Ok(&PlainTextLexer)
            }
        }
    }

    /// Tokenize source text into lines of tokens
    pub fn tokenize(
        &self,
        source: &str,
        choice: LexerChoice<'_>,
    ) -> Result<LineTokenMatrix, HighlightError> {
        let lexer = self.select_lexer(source, choice)?;
        debug!(lexer = lexer.name(), bytes = source.len(), "Tokenizing");

        let fragments = lex(lexer, source, &self.config.lexing);
        Ok(segment_lines(&fragments))
    }

    /// Read a file and tokenize it
    ///
    /// With no `lexer_name`, the lexer is picked from the file name and content.
    pub fn load_and_tokenize(
        &self,
        path: impl AsRef<Path>,
        lexer_name: Option<&str>,
    ) -> Result<LineTokenMatrix, HighlightError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| HighlightError::io(path, e))?;
        let choice = match lexer_name {
            Some(name) => LexerChoice::Named(name),
            None => LexerChoice::Filename(path),
        };
        self.tokenize(&source, choice)
    }

    /// Tokenize a file and write the JSON next to it (`<path><token_file_suffix>`).
    ///
    /// Returns the path written.
    pub fn tokenize_to_file(
        &self,
        path: impl AsRef<Path>,
        lexer_name: Option<&str>,
    ) -> Result<PathBuf, HighlightError> {
        let path = path.as_ref();
        let lines = self.load_and_tokenize(path, lexer_name)?;
        let output_path = self.token_file_path(path);
        let json = self.to_json(&lines)?;
        fs::write(&output_path, json).map_err(|e| HighlightError::io(&output_path, e))?;
        info!(output = %output_path.display(), lines = lines.len(), "Tokens written");
        Ok(output_path)
    }

    /// Where [Self::tokenize_to_file] writes the tokens for `path`
    pub fn token_file_path(&self, path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(&self.config.output.token_file_suffix);
        PathBuf::from(name)
    }

    // ===== THEME PIPELINE =====

    /// Look up a theme by name and normalize it
    pub fn theme(&self, name: &str) -> Result<NormalizedTheme, HighlightError> {
        self.themes.normalized(name)
    }

    // ===== OUTPUT =====

    /// Serialize pipeline output, honoring `output.pretty`
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String, HighlightError> {
        let json = if self.config.output.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}
