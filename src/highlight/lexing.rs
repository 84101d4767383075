//! Lexers: source text to classified fragments
//!
//!     A [Lexer] turns source text into a flat stream of [Fragment]s. Lexers know nothing about
//!     lines; the [segmenting](super::segmenting) module regroups their output afterwards.
//!
//!     The only contract a lexer must honor is that concatenating the text of its fragments
//!     reproduces its input exactly. Characters a grammar does not recognize are emitted under
//!     the `Error` category rather than dropped.
//!
//! Preprocessing
//!
//!     Before a lexer sees the source, [lex] applies the [LexingConfig] knobs: line endings are
//!     normalized to `\n`, leading and trailing blank lines are dropped, tabs are optionally
//!     expanded, and a final `\n` is appended if missing. This is the only place where characters may change between the source file and
//!     the fragment stream.
//!
//! Built-in lexers
//!
//!     - [plain::PlainTextLexer] (`text`): the whole input as one `Text` fragment; the fallback.
//!     - [python::PythonLexer] (`python`)
//!     - [json::JsonLexer] (`json`)
//!
//!     See [registry::LexerRegistry] for lookup by name, filename and content.

pub mod json;
pub mod plain;
pub mod python;
pub mod registry;

use super::config::LexingConfig;
use super::token::Fragment;
use std::borrow::Cow;

pub use registry::LexerRegistry;

/// Trait for source lexers
///
/// Implementors classify text into fragments. Lexers must be stateless between calls so a
/// registry can share them.
pub trait Lexer: Send + Sync {
    /// Canonical name (e.g., "python")
    fn name(&self) -> &str;

    /// Alternative names accepted by [LexerRegistry::get]
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Filename globs this lexer handles (e.g., "*.py")
    fn filenames(&self) -> &[&str] {
        &[]
    }

    /// Confidence in `0.0..=1.0` that `source` is written in this lexer's language.
    fn analyse_text(&self, _source: &str) -> f32 {
        0.0
    }

    /// Classify `source`. The fragment texts concatenate to `source`.
    fn fragments(&self, source: &str) -> Vec<Fragment>;
}

/// Preprocess `source` per `options` and run `lexer` over it.
pub fn lex(lexer: &dyn Lexer, source: &str, options: &LexingConfig) -> Vec<Fragment> {
    let prepared = preprocess(source, options);
    lexer.fragments(&prepared)
}

/// Apply line ending normalization, blank line stripping, tab expansion and the trailing
/// newline rule, in that order.
pub fn preprocess<'a>(source: &'a str, options: &LexingConfig) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(source);

    if options.normalize_line_endings && text.contains('\r') {
        text = Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"));
    }

    if options.strip_newlines {
        text = match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches('\n')),
            Cow::Owned(s) => Cow::Owned(s.trim_matches('\n').to_string()),
        };
    }

    if options.tab_size > 0 && text.contains('\t') {
        text = Cow::Owned(text.replace('\t', &" ".repeat(options.tab_size)));
    }

    if options.ensure_trailing_newline && !text.ends_with('\n') {
        text.to_mut().push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(normalize: bool, ensure_nl: bool, tab_size: usize) -> LexingConfig {
        LexingConfig {
            normalize_line_endings: normalize,
            strip_newlines: false,
            ensure_trailing_newline: ensure_nl,
            tab_size,
        }
    }

    fn stripping() -> LexingConfig {
        LexingConfig {
            strip_newlines: true,
            ..options(true, true, 0)
        }
    }

    #[test]
    fn test_preprocess_untouched() {
        let text = preprocess("a\r\nb", &options(false, false, 0));
        assert!(matches!(text, Cow::Borrowed("a\r\nb")));
    }

    #[test]
    fn test_preprocess_line_endings() {
        let text = preprocess("a\r\nb\rc", &options(true, false, 0));
        assert_eq!(text, "a\nb\nc");
    }

    #[test]
    fn test_preprocess_trailing_newline() {
        assert_eq!(preprocess("x", &options(false, true, 0)), "x\n");
        assert_eq!(preprocess("x\n", &options(false, true, 0)), "x\n");
        assert_eq!(preprocess("", &options(false, true, 0)), "\n");
    }

    #[test]
    fn test_preprocess_strips_outer_blank_lines() {
        assert_eq!(preprocess("\n\nx\n\n", &stripping()), "x\n");
        assert_eq!(preprocess("\r\n\r\nx\r\n\r\n", &stripping()), "x\n");
        assert_eq!(preprocess("a\n\nb", &stripping()), "a\n\nb\n");
        assert_eq!(preprocess("\n\n", &stripping()), "\n");
    }

    #[test]
    fn test_preprocess_strip_keeps_indentation() {
        assert_eq!(preprocess("\n  x  \n", &stripping()), "  x  \n");
    }

    #[test]
    fn test_preprocess_tabs() {
        assert_eq!(preprocess("\tx", &options(false, false, 2)), "  x");
    }

    #[test]
    fn test_lex_uses_preprocessed_text() {
        let lexer = plain::PlainTextLexer;
        let fragments = lex(&lexer, "a\r\nb", &options(true, true, 0));
        assert_eq!(fragments, vec![Fragment::new("Text", "a\nb\n")]);
    }
}
