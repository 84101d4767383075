//! Style descriptor grammar
//!
//!     A descriptor is a whitespace-separated list of directives:
//!
//!         - `#rrggbb` (or any `#`-prefixed color): foreground color
//!         - `bold`
//!         - `italic`, `underline`: recognized, not carried into the normalized schema
//!         - `nobold`, `noitalic`, `nounderline`: recognized, not carried
//!         - `bg:<color>`, `border:<color>`: recognized, not carried
//!         - `inherit`, `noinherit`: recognized, not carried
//!
//!     Anything else is kept as [StyleDirective::Unknown] and ignored.
//!
//! Folding
//!
//!     [fold_directives] walks the directives left to right with a two-field state
//!     (`color`, `bold`). Only a color or `bold` changes the state, and a later color replaces an
//!     earlier one. Keeping the policy in one `match` makes each directive's effect visible in
//!     one place.

/// One parsed directive of a style descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDirective<'a> {
    Color(&'a str),
    Bold,
    NoBold,
    Italic,
    NoItalic,
    Underline,
    NoUnderline,
    Background(&'a str),
    Border(&'a str),
    Inherit,
    NoInherit,
    Unknown(&'a str),
}

impl<'a> StyleDirective<'a> {
    pub fn parse(word: &'a str) -> Self {
        if word.starts_with('#') {
            return StyleDirective::Color(word);
        }
        if let Some(color) = word.strip_prefix("bg:") {
            return StyleDirective::Background(color);
        }
        if let Some(color) = word.strip_prefix("border:") {
            return StyleDirective::Border(color);
        }
        match word {
            "bold" => StyleDirective::Bold,
            "nobold" => StyleDirective::NoBold,
            "italic" => StyleDirective::Italic,
            "noitalic" => StyleDirective::NoItalic,
            "underline" => StyleDirective::Underline,
            "nounderline" => StyleDirective::NoUnderline,
            "inherit" => StyleDirective::Inherit,
            "noinherit" => StyleDirective::NoInherit,
            other => StyleDirective::Unknown(other),
        }
    }
}

/// Split a descriptor into directives. Empty words between repeated spaces are skipped.
pub fn parse_descriptor(descriptor: &str) -> impl Iterator<Item = StyleDirective<'_>> {
    descriptor.split_whitespace().map(StyleDirective::parse)
}

/// Fold state: what the normalized schema keeps of a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldedStyle {
    pub color: Option<String>,
    pub bold: bool,
}

impl FoldedStyle {
    fn apply(mut self, directive: StyleDirective<'_>) -> Self {
        match directive {
            StyleDirective::Color(color) => self.color = Some(color.to_string()),
            StyleDirective::Bold => self.bold = true,
            StyleDirective::NoBold
            | StyleDirective::Italic
            | StyleDirective::NoItalic
            | StyleDirective::Underline
            | StyleDirective::NoUnderline
            | StyleDirective::Background(_)
            | StyleDirective::Border(_)
            | StyleDirective::Inherit
            | StyleDirective::NoInherit
            | StyleDirective::Unknown(_) => {}
        }
        self
    }
}

/// Fold directives left to right into a color and a weight.
pub fn fold_directives<'a, I>(directives: I) -> FoldedStyle
where
    I: IntoIterator<Item = StyleDirective<'a>>,
{
    directives
        .into_iter()
        .fold(FoldedStyle::default(), FoldedStyle::apply)
}
