//! Plain text lexer
//!
//! Classifies the whole input as a single `Text` fragment. Used whenever no other lexer
//! matches the file.

use super::Lexer;
use crate::highlight::token::Fragment;

pub const PLAIN_TEXT_CATEGORY: &str = "Text";

pub struct PlainTextLexer;

impl Lexer for PlainTextLexer {
    fn name(&self) -> &str {
        "text"
    }

    fn aliases(&self) -> &[&str] {
        &["plain", "txt"]
    }

    fn filenames(&self) -> &[&str] {
        &["*.txt"]
    }

    fn fragments(&self, source: &str) -> Vec<Fragment> {
        if source.is_empty() {
            return Vec::new();
        }
        vec![Fragment::new(PLAIN_TEXT_CATEGORY, source)]
    }
}
