//! Theme normalization
//!
//! Turns raw per-category descriptors into the simplified color + weight schema. Categories
//! whose descriptor is the empty string are left out entirely, so renderers fall through to the
//! parent category. Any other descriptor yields an entry, even one that declares nothing the
//! schema keeps (`" "`, `"italic"`); such an entry still stops bold inheritance.

use super::descriptor::{fold_directives, parse_descriptor};
use super::{NormalizedTheme, RawStyleMap, RawTheme, StyleEntry};
use crate::highlight::category::CategoryPath;

/// Normalize a background color and raw style map.
pub fn normalize(background_color: Option<&str>, raw_styles: &RawStyleMap) -> NormalizedTheme {
    let styles = raw_styles
        .iter()
        .filter_map(|(category, descriptor)| normalize_entry(category, descriptor))
        .map(|entry| (entry.category.to_key(), entry))
        .collect();

    NormalizedTheme {
        background_color: background_color.map(str::to_string),
        styles,
    }
}

/// Normalize a theme loaded from the catalog.
pub fn normalize_theme(theme: &RawTheme) -> NormalizedTheme {
    normalize(theme.background_color.as_deref(), &theme.styles)
}

/// Fold one descriptor. `None` for the empty descriptor.
pub fn normalize_entry(category: &CategoryPath, descriptor: &str) -> Option<StyleEntry> {
    if descriptor.is_empty() {
        return None;
    }
    let folded = fold_directives(parse_descriptor(descriptor));
    Some(StyleEntry {
        category: category.clone(),
        color: folded.color,
        bold: folded.bold,
    })
}
