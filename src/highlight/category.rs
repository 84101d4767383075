//! Hierarchical token categories
//!
//!     Every fragment a lexer produces carries a category such as `Keyword.Reserved` or
//!     `Literal.String.Double`. Categories form a tree: `Literal.String.Double` is a child of
//!     `Literal.String`, which is a child of `Literal`, which hangs off the implicit root.
//!
//!     The category is kept as an ordered list of segments rather than as a dotted string, and
//!     the dotted string is only a rendering of it. Walking up the tree (see
//!     [CategoryPath::ancestors]) is what themes use to inherit styles from less specific
//!     categories.
//!
//! Root
//!
//!     The root category is the empty path and renders as `""`. Theme files conventionally spell
//!     the root `Token` and prefix categories with it (`Token.Keyword`); [CategoryPath::parse]
//!     strips that prefix so both spellings name the same category.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Name theme files use for the root category.
const ROOT_NAME: &str = "Token";

/// A category in the token hierarchy, stored as its path from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryPath {
    segments: Vec<String>,
}

impl CategoryPath {
    /// The root category (empty path).
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from its segments. Empty segments are skipped.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .collect();
        CategoryPath { segments }
    }

    /// Parse a dotted category name.
    ///
    /// `""` and `"Token"` are the root; a leading `Token.` is dropped.
    pub fn parse(dotted: &str) -> Self {
        let mut segments = dotted.split('.').filter(|s| !s.is_empty()).peekable();
        if segments.peek() == Some(&ROOT_NAME) {
            segments.next();
        }
        Self::from_segments(segments)
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The enclosing category, or `None` for the root.
    pub fn parent(&self) -> Option<CategoryPath> {
        if self.is_root() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(CategoryPath { segments })
    }

    /// A sub-category of this one.
    pub fn child(&self, segment: &str) -> CategoryPath {
        let mut segments = self.segments.clone();
        if !segment.is_empty() {
            segments.push(segment.to_string());
        }
        CategoryPath { segments }
    }

    /// This category followed by each of its ancestors, ending with the root.
    pub fn ancestors(&self) -> impl Iterator<Item = CategoryPath> + '_ {
        (0..=self.segments.len()).rev().map(move |len| CategoryPath {
            segments: self.segments[..len].to_vec(),
        })
    }

    /// Whether `prefix` is this category or one of its ancestors.
    pub fn starts_with(&self, prefix: &CategoryPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// The dotted rendering used as a map key and in serialized output.
    pub fn to_key(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_key())
    }
}

impl From<&str> for CategoryPath {
    fn from(dotted: &str) -> Self {
        CategoryPath::parse(dotted)
    }
}

impl Serialize for CategoryPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_key())
    }
}

impl<'de> Deserialize<'de> for CategoryPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dotted = String::deserialize(deserializer)?;
        Ok(CategoryPath::parse(&dotted))
    }
}
