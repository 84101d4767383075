//! Lexer registry for lexer discovery and selection
//!
//! This module provides a centralized registry for all available lexers. Lexers can be
//! registered and retrieved by name or alias, matched against a filename, or guessed from
//! the source text itself.

use super::json::JsonLexer;
use super::plain::PlainTextLexer;
use super::python::PythonLexer;
use super::Lexer;
use crate::highlight::error::HighlightError;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

struct RegisteredLexer {
    lexer: Box<dyn Lexer>,
    patterns: Vec<Regex>,
}

/// Registry of source lexers
///
/// # Examples
///
/// ```ignore
/// let registry = LexerRegistry::with_defaults();
///
/// let lexer = registry.for_filename(Path::new("main.py"))?;
/// let fragments = lexer.fragments("print(1)\n");
/// ```
pub struct LexerRegistry {
    lexers: HashMap<String, RegisteredLexer>,
}

impl LexerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        LexerRegistry {
            lexers: HashMap::new(),
        }
    }

    /// Register a lexer
    ///
    /// If a lexer with the same name already exists, it will be replaced.
    pub fn register<L: Lexer + 'static>(&mut self, lexer: L) {
        let patterns = lexer.filenames().iter().map(|g| glob_to_regex(g)).collect();
        self.lexers.insert(
            lexer.name().to_string(),
            RegisteredLexer {
                lexer: Box::new(lexer),
                patterns,
            },
        );
    }

    /// Get a lexer by name or alias
    pub fn get(&self, name: &str) -> Result<&dyn Lexer, HighlightError> {
        let wanted = name.to_ascii_lowercase();
        if let Some(entry) = self.lexers.get(&wanted) {
            return Ok(entry.lexer.as_ref());
        }
        self.sorted()
            .find(|entry| entry.lexer.aliases().contains(&wanted.as_str()))
            .map(|entry| entry.lexer.as_ref())
            .ok_or_else(|| HighlightError::NoMatchingLexer {
                hint: name.to_string(),
            })
    }

    /// Check if a lexer exists under this name or alias
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Find the lexer whose filename patterns match the final component of `path`
    pub fn for_filename(&self, path: &Path) -> Result<&dyn Lexer, HighlightError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        self.sorted()
            .find(|entry| entry.patterns.iter().any(|p| p.is_match(file_name)))
            .map(|entry| entry.lexer.as_ref())
            .ok_or_else(|| HighlightError::NoMatchingLexer {
                hint: path.display().to_string(),
            })
    }

    /// Pick the lexer most confident about `source`
    ///
    /// Ties go to the lexer whose name sorts first. A lexer must report a confidence above
    /// zero to be picked.
    pub fn guess(&self, source: &str) -> Result<&dyn Lexer, HighlightError> {
        let mut best: Option<(&dyn Lexer, f32)> = None;
        for entry in self.sorted() {
            let score = entry.lexer.analyse_text(source);
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((entry.lexer.as_ref(), score));
            }
        }
        best.map(|(lexer, _)| lexer)
            .ok_or_else(|| HighlightError::NoMatchingLexer {
                hint: "<source text>".to_string(),
            })
    }

    /// List all available lexer names (sorted)
    pub fn list_lexers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.lexers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in lexers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(PlainTextLexer);
        registry.register(PythonLexer);
        registry.register(JsonLexer);

        registry
    }

    fn sorted(&self) -> impl Iterator<Item = &RegisteredLexer> + '_ {
        let mut entries: Vec<_> = self.lexers.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter().map(|(_, entry)| entry)
    }
}

impl Default for LexerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Translate a filename glob (`*` and `?` wildcards) into an anchored regex.
fn glob_to_regex(glob: &str) -> Regex {
    let pattern = regex::escape(glob)
        .replace(r"\*", ".*")
        .replace(r"\?", ".");
    Regex::new(&format!("^{}$", pattern)).expect("escaped glob is a valid regex")
}
