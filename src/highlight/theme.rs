//! Color themes
//!
//!     A theme arrives as a [RawTheme]: a background color plus one style descriptor string per
//!     category, in the form theme authors write them (`"bold #008000"`,
//!     `"italic noinherit bg:#eeeeee"`). Renderers only care about color and weight, so the
//!     [normalization] module folds each descriptor into a [StyleEntry] and collects them into
//!     a [NormalizedTheme].
//!
//! Inheritance
//!
//!     Themes declare styles sparsely. A `Name.Builtin` token with no entry of its own takes its
//!     color from `Name`, and failing that from the root entry `""`. See
//!     [NormalizedTheme::resolve].
//!
//! Serialized shape
//!
//!     `{"backgroundColor": "#272822", "styles": {"Keyword": {"color": "#66d9ef", "bold": false}}}`

pub mod catalog;
pub mod descriptor;
pub mod normalization;

use super::category::CategoryPath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use catalog::ThemeCatalog;
pub use normalization::normalize;

/// Style descriptors as declared by a theme, keyed by category.
pub type RawStyleMap = BTreeMap<CategoryPath, String>;

/// A theme as loaded from a theme file. Keys other than these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTheme {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub styles: RawStyleMap,
}

/// Normalized color and weight for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    #[serde(skip)]
    pub category: CategoryPath,
    pub color: Option<String>,
    pub bold: bool,
}

impl StyleEntry {
    /// Re-encode as a descriptor string: `"<color> bold"`, either part optional.
    ///
    /// An entry with neither encodes as `"nobold"` so that it is not mistaken for an
    /// undeclared category.
    pub fn to_descriptor(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(color) = &self.color {
            parts.push(color);
        }
        if self.bold {
            parts.push("bold");
        }
        if parts.is_empty() {
            parts.push("nobold");
        }
        parts.join(" ")
    }
}

/// A style after inheritance has been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    pub color: Option<String>,
    pub bold: bool,
}

/// The simplified theme handed to renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTheme {
    pub background_color: Option<String>,
    pub styles: BTreeMap<String, StyleEntry>,
}

impl NormalizedTheme {
    /// The entry declared for exactly this category, if any.
    pub fn get(&self, category: &CategoryPath) -> Option<&StyleEntry> {
        self.styles.get(&category.to_key())
    }

    /// Effective style for `category`.
    ///
    /// The color comes from the closest category (itself first, the root last) whose entry
    /// has a color. Boldness comes from the closest category that has an entry at all.
    pub fn resolve(&self, category: &CategoryPath) -> ResolvedStyle {
        let mut color = None;
        let mut bold = None;

        for ancestor in category.ancestors() {
            if let Some(entry) = self.get(&ancestor) {
                if color.is_none() {
                    color = entry.color.clone();
                }
                if bold.is_none() {
                    bold = Some(entry.bold);
                }
            }
            if color.is_some() && bold.is_some() {
                break;
            }
        }

        ResolvedStyle {
            color,
            bold: bold.unwrap_or(false),
        }
    }

    /// The raw descriptors this theme re-encodes to. Normalizing them gives this theme back.
    pub fn to_raw_styles(&self) -> RawStyleMap {
        self.styles
            .iter()
            .map(|(key, entry)| (CategoryPath::parse(key), entry.to_descriptor()))
            .collect()
    }
}
