//! Python lexer
//!
//!     Raw tokenization is done by logos over the [PyToken] enum. A thin pass on top assigns
//!     categories and handles the one bit of context the grammar needs: the name following `def`
//!     or `class` is a function or class name, not a plain name.
//!
//!     Strings are matched by their opening quote only. A callback scans the remainder for the
//!     closing quote, which is also where single and triple quoting are told apart.

use super::Lexer;
use crate::highlight::token::Fragment;
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

static SHEBANG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#!.*\bpython[0-9.]*\b").expect("valid shebang regex"));

static PYTHON_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(import \w+|from [\w.]+ import |def \w+\(|class \w+[(:])")
        .expect("valid statement regex")
});

/// How much of the source `analyse_text` looks at.
const ANALYSE_WINDOW: usize = 1000;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyToken {
    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[token("\\\n")]
    LineContinuation,

    #[regex(r"#[^\n]*")]
    Comment,

    #[token("def")]
    Def,

    #[token("class")]
    Class,

    #[token("import")]
    #[token("from")]
    Namespace,

    #[token("and")]
    #[token("or")]
    #[token("not")]
    #[token("in")]
    #[token("is")]
    OperatorWord,

    #[token("as")]
    #[token("assert")]
    #[token("async")]
    #[token("await")]
    #[token("break")]
    #[token("continue")]
    #[token("del")]
    #[token("elif")]
    #[token("else")]
    #[token("except")]
    #[token("finally")]
    #[token("for")]
    #[token("global")]
    #[token("if")]
    #[token("lambda")]
    #[token("nonlocal")]
    #[token("pass")]
    #[token("raise")]
    #[token("return")]
    #[token("try")]
    #[token("while")]
    #[token("with")]
    #[token("yield")]
    Keyword,

    #[token("True")]
    #[token("False")]
    #[token("None")]
    Constant,

    #[token("abs")]
    #[token("all")]
    #[token("any")]
    #[token("bool")]
    #[token("dict")]
    #[token("enumerate")]
    #[token("filter")]
    #[token("float")]
    #[token("getattr")]
    #[token("hasattr")]
    #[token("int")]
    #[token("isinstance")]
    #[token("iter")]
    #[token("len")]
    #[token("list")]
    #[token("map")]
    #[token("max")]
    #[token("min")]
    #[token("next")]
    #[token("object")]
    #[token("open")]
    #[token("print")]
    #[token("range")]
    #[token("repr")]
    #[token("reversed")]
    #[token("set")]
    #[token("setattr")]
    #[token("sorted")]
    #[token("str")]
    #[token("sum")]
    #[token("super")]
    #[token("tuple")]
    #[token("type")]
    #[token("zip")]
    Builtin,

    #[token("self")]
    #[token("cls")]
    PseudoBuiltin,

    #[regex(r"@[A-Za-z_][A-Za-z0-9_.]*")]
    Decorator,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    #[regex(r#"[rRbBuUfF]?[rRbBuUfF]?["']"#, string_literal)]
    StringLiteral(StringKind),

    #[regex(r"0[xX][0-9a-fA-F_]+")]
    Hex,

    #[regex(r"[0-9][0-9_]*")]
    Integer,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"[-+*/%=<>!&|^~]+")]
    #[token("@")]
    Operator,

    #[regex(r"[()\[\]{}:;,.]")]
    Punctuation,
}

impl PyToken {
    pub fn category(&self) -> &'static str {
        match self {
            PyToken::Whitespace | PyToken::Newline => "Text.Whitespace",
            PyToken::LineContinuation => "Text",
            PyToken::Comment => "Comment.Single",
            PyToken::Def | PyToken::Class | PyToken::Keyword => "Keyword",
            PyToken::Namespace => "Keyword.Namespace",
            PyToken::OperatorWord => "Operator.Word",
            PyToken::Constant => "Keyword.Constant",
            PyToken::Builtin => "Name.Builtin",
            PyToken::PseudoBuiltin => "Name.Builtin.Pseudo",
            PyToken::Decorator => "Name.Decorator",
            PyToken::Name => "Name",
            PyToken::StringLiteral(StringKind::Doc) => "Literal.String.Doc",
            PyToken::StringLiteral(StringKind::Double) => "Literal.String.Double",
            PyToken::StringLiteral(StringKind::Single) => "Literal.String.Single",
            PyToken::Hex => "Literal.Number.Hex",
            PyToken::Integer => "Literal.Number.Integer",
            PyToken::Float => "Literal.Number.Float",
            PyToken::Operator => "Operator",
            PyToken::Punctuation => "Punctuation",
        }
    }

    fn is_name_like(&self) -> bool {
        matches!(
            self,
            PyToken::Name | PyToken::Builtin | PyToken::PseudoBuiltin
        )
    }
}

/// Quoting style of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    Single,
    Double,
    /// Triple-quoted, with either quote character
    Doc,
}

/// Extend a string match from its opening quote to its closing quote.
///
/// Three quotes in a row open a triple-quoted string, which may span lines and runs to the end
/// of the input when unterminated. Any other string ends at its closing quote, or before the
/// line break when unterminated.
fn string_literal(lex: &mut logos::Lexer<PyToken>) -> StringKind {
    let quote = if lex.slice().ends_with('\'') {
        b'\''
    } else {
        b'"'
    };
    let rest = lex.remainder().as_bytes();

    if rest.starts_with(&[quote, quote]) {
        let body = &rest[2..];
        let end = find_closing(body, &[quote; 3])
            .map(|pos| pos + 3)
            .unwrap_or(body.len());
        lex.bump(2 + end);
        return StringKind::Doc;
    }

    lex.bump(single_line_end(rest, quote));
    if quote == b'\'' {
        StringKind::Single
    } else {
        StringKind::Double
    }
}

fn find_closing(haystack: &[u8], quote: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i] == b'\\' {
            i += 2;
            continue;
        }
        if haystack[i..].starts_with(quote) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Length of a single-line string body, closing quote included.
fn single_line_end(haystack: &[u8], quote: u8) -> usize {
    let mut i = 0;
    while i < haystack.len() {
        match haystack[i] {
            b'\n' => return i,
            b'\\' => i += 2,
            byte if byte == quote => return i + 1,
            _ => i += 1,
        }
    }
    haystack.len()
}

/// Slice `source` to at most `max` bytes on a char boundary.
fn head(source: &str, max: usize) -> &str {
    if source.len() <= max {
        return source;
    }
    let mut end = max;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}

pub struct PythonLexer;

impl Lexer for PythonLexer {
    fn name(&self) -> &str {
        "python"
    }

    fn aliases(&self) -> &[&str] {
        &["py", "python3", "py3"]
    }

    fn filenames(&self) -> &[&str] {
        &["*.py", "*.pyw", "*.pyi", "SConstruct", "SConscript"]
    }

    fn analyse_text(&self, source: &str) -> f32 {
        let window = head(source, ANALYSE_WINDOW);
        if SHEBANG.is_match(window) {
            1.0
        } else if PYTHON_STATEMENT.is_match(window) {
            0.4
        } else {
            0.0
        }
    }

    fn fragments(&self, source: &str) -> Vec<Fragment> {
        let mut lexer = PyToken::lexer(source);
        let mut fragments = Vec::new();
        // Category for the next name after `def` / `class`
        let mut definition: Option<&'static str> = None;

        while let Some(result) = lexer.next() {
            let category = match result {
                Ok(token) => {
                    let category = match definition {
                        Some(defined) if token.is_name_like() => defined,
                        _ => token.category(),
                    };
                    definition = match token {
                        PyToken::Def => Some("Name.Function"),
                        PyToken::Class => Some("Name.Class"),
                        PyToken::Whitespace => definition,
                        _ => None,
                    };
                    category
                }
                Err(()) => {
                    definition = None;
                    "Error"
                }
            };
            fragments.push(Fragment::new(category, lexer.slice()));
        }

        fragments
    }
}
