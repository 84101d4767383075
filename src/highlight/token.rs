//! Fragments, tokens and lines
//!
//!     A lexer produces a flat stream of [Fragment]s: classified runs of text that may be empty
//!     or span several source lines. Rendering wants something else: per-line arrays of
//!     non-empty [Token]s. The [segmenting](crate::highlight::segmenting) module converts one
//!     into the other; this module holds the types on both sides.
//!
//! Serialized shape
//!
//!     A [LineTokenMatrix] serializes as an array of lines, each line an array of
//!     `{"content": ..., "type": ...}` objects, where `type` is the dotted category name.

use super::category::CategoryPath;
use serde::{Deserialize, Serialize};

/// A classified run of raw lexer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub category: CategoryPath,
    pub text: String,
}

impl Fragment {
    pub fn new(category: impl Into<CategoryPath>, text: impl Into<String>) -> Self {
        Fragment {
            category: category.into(),
            text: text.into(),
        }
    }
}

/// A single-line, non-empty rendering unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub content: String,
    #[serde(rename = "type")]
    pub category: CategoryPath,
}

impl Token {
    pub fn new(content: impl Into<String>, category: impl Into<CategoryPath>) -> Self {
        Token {
            content: content.into(),
            category: category.into(),
        }
    }
}

/// The tokens of one source line, left to right. Blank lines have no tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line {
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(tokens: Vec<Token>) -> Self {
        Line { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The text of this line (tokens concatenated).
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.content.as_str()).collect()
    }
}

/// One [Line] per source line, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineTokenMatrix {
    lines: Vec<Line>,
}

impl LineTokenMatrix {
    pub fn new(lines: Vec<Line>) -> Self {
        LineTokenMatrix { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// All tokens in reading order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.lines.iter().flat_map(|line| line.tokens.iter())
    }

    /// Reconstruct the text: each line's content, lines joined by `\n`.
    ///
    /// A line break that ended the source is not represented in the matrix, so for sources
    /// ending in `\n` the result lacks that final newline.
    pub fn to_source(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
