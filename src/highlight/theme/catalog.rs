//! Theme catalog
//!
//! Maps theme names to [RawTheme]s. The built-in themes are YAML files embedded at compile
//! time; more can be loaded from directories listed in `themes.search_paths`.
//!
//! A theme file looks like this (keys may be written with or without the `Token.` prefix):
//!
//! ```yaml
//! name: monokai
//! background_color: "#272822"
//! styles:
//!   Token: "#f8f8f2"
//!   Keyword: "#66d9ef"
//!   Comment: "#959077"
//! ```

use super::normalization::normalize_theme;
use super::{NormalizedTheme, RawTheme};
use crate::highlight::error::HighlightError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("default", include_str!("../../../themes/default.yaml")),
    ("monokai", include_str!("../../../themes/monokai.yaml")),
    ("bw", include_str!("../../../themes/bw.yaml")),
];

static BUILTIN_THEMES: Lazy<Vec<RawTheme>> = Lazy::new(|| {
    BUILTIN_SOURCES
        .iter()
        .map(|(name, source)| {
            parse_theme(source, name, Path::new(name)).expect("built-in theme is valid YAML")
        })
        .collect()
});

/// Parse a theme file. `fallback_name` is used when the file does not name itself.
pub fn parse_theme(
    source: &str,
    fallback_name: &str,
    origin: &Path,
) -> Result<RawTheme, HighlightError> {
    let mut theme: RawTheme =
        serde_yaml::from_str(source).map_err(|e| HighlightError::ThemeParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
    if theme.name.is_empty() {
        theme.name = fallback_name.to_string();
    }
    Ok(theme)
}

/// Registry of named themes
pub struct ThemeCatalog {
    themes: HashMap<String, RawTheme>,
}

impl ThemeCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        ThemeCatalog {
            themes: HashMap::new(),
        }
    }

    /// Register a theme
    ///
    /// If a theme with the same name already exists, it will be replaced.
    pub fn register(&mut self, theme: RawTheme) {
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name
    pub fn get(&self, name: &str) -> Result<&RawTheme, HighlightError> {
        self.themes
            .get(name)
            .ok_or_else(|| HighlightError::UnknownTheme {
                name: name.to_string(),
                available: self.list_themes(),
            })
    }

    /// Get a theme by name and normalize it
    pub fn normalized(&self, name: &str) -> Result<NormalizedTheme, HighlightError> {
        self.get(name).map(normalize_theme)
    }

    /// Check if a theme exists
    pub fn has(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// List all available theme names (sorted)
    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<_> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Load every `*.yaml` / `*.yml` file in `dir`. Returns how many themes were loaded.
    ///
    /// Files are read in name order, so when two files declare the same theme name the one
    /// sorting last wins.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, HighlightError> {
        let entries = fs::read_dir(dir).map_err(|e| HighlightError::io(dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| HighlightError::io(dir, e))?.path();
            let is_yaml = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if is_yaml && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            let source = fs::read_to_string(path).map_err(|e| HighlightError::io(path, e))?;
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            let theme = parse_theme(&source, stem, path)?;
            debug!(theme.name = %theme.name, theme.path = %path.display(), "Theme loaded");
            self.register(theme);
        }

        Ok(paths.len())
    }

    /// Create a catalog with the built-in themes
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for theme in BUILTIN_THEMES.iter() {
            catalog.register(theme.clone());
        }
        catalog
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
