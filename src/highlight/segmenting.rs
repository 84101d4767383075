//! Line segmentation of lexer output
//!
//!     Lexers classify text without caring about lines: one fragment may hold a triple-quoted
//!     string spanning ten lines, another may be a bare `\n`. This module regroups that flat
//!     fragment stream into a [LineTokenMatrix], one [Line] per source line, without adding,
//!     dropping or reordering characters.
//!
//! Logic
//!
//!     1. Keep an accumulator for the current line.
//!     2. Split each fragment's text on `\n`. Every segment before a line break is pushed as a
//!        token (if non-empty) and then the line is closed, even when the segment was empty.
//!     3. The segment after the last line break is pushed (if non-empty) but does not close the
//!        line; the next fragment continues it.
//!     4. At the end, a non-empty accumulator becomes the last line. A source ending in `\n`
//!        therefore gets no trailing empty line, and no fragments at all give no lines.
//!
//!     Adjacent fragments of the same category are never merged: each fragment yields at most
//!     one token per segment.

use super::token::{Fragment, Line, LineTokenMatrix, Token};

const LINE_BREAK: char = '\n';

/// Groups a flat fragment stream into lines of tokens.
#[derive(Debug, Default)]
pub struct LineSegmenter {
    lines: Vec<Line>,
    current: Line,
}

impl LineSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one fragment.
    pub fn push(&mut self, fragment: &Fragment) {
        let mut segments = fragment.text.split(LINE_BREAK).peekable();

        while let Some(segment) = segments.next() {
            if !segment.is_empty() {
                self.current
                    .push(Token::new(segment, fragment.category.clone()));
            }

            // Every segment but the last was followed by a line break
            if segments.peek().is_some() {
                self.close_line();
            }
        }
    }

    /// Flush the pending line (if it has tokens) and return the matrix.
    pub fn finish(mut self) -> LineTokenMatrix {
        if !self.current.is_empty() {
            self.close_line();
        }
        LineTokenMatrix::new(self.lines)
    }

    fn close_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }
}

/// Segment a complete fragment stream.
pub fn segment_lines<'a, I>(fragments: I) -> LineTokenMatrix
where
    I: IntoIterator<Item = &'a Fragment>,
{
    let mut segmenter = LineSegmenter::new();
    for fragment in fragments {
        segmenter.push(fragment);
    }
    segmenter.finish()
}
