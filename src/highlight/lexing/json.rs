//! JSON lexer
//!
//! Object keys are told apart from string values by looking past whitespace for a `:`.

use super::Lexer;
use crate::highlight::token::Fragment;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,

    #[regex(r"-?(0|[1-9][0-9]*)")]
    Integer,

    #[regex(r"-?(0|[1-9][0-9]*)\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"-?(0|[1-9][0-9]*)[eE][+-]?[0-9]+")]
    Float,

    #[token("true")]
    #[token("false")]
    #[token("null")]
    Constant,

    #[token(":")]
    Colon,

    #[regex(r"[{}\[\],]")]
    Punctuation,
}

impl JsonToken {
    pub fn category(&self) -> &'static str {
        match self {
            JsonToken::Whitespace => "Text.Whitespace",
            JsonToken::StringLiteral => "Literal.String.Double",
            JsonToken::Integer => "Literal.Number.Integer",
            JsonToken::Float => "Literal.Number.Float",
            JsonToken::Constant => "Keyword.Constant",
            JsonToken::Colon | JsonToken::Punctuation => "Punctuation",
        }
    }
}

pub struct JsonLexer;

impl Lexer for JsonLexer {
    fn name(&self) -> &str {
        "json"
    }

    fn filenames(&self) -> &[&str] {
        &["*.json", "*.jsonl", "*.geojson", "Pipfile.lock"]
    }

    fn analyse_text(&self, source: &str) -> f32 {
        let trimmed = source.trim_start();
        if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
            return 0.0;
        }
        match serde_json::from_str::<serde_json::Value>(source) {
            Ok(_) => 0.9,
            Err(_) => 0.2,
        }
    }

    fn fragments(&self, source: &str) -> Vec<Fragment> {
        let mut lexer = JsonToken::lexer(source);
        let mut raw: Vec<(Option<JsonToken>, &str)> = Vec::new();
        while let Some(result) = lexer.next() {
            raw.push((result.ok(), lexer.slice()));
        }

        raw.iter()
            .enumerate()
            .map(|(i, (token, text))| {
                let category = match token {
                    Some(JsonToken::StringLiteral) if is_key(&raw[i + 1..]) => "Name.Tag",
                    Some(token) => token.category(),
                    None => "Error",
                };
                Fragment::new(category, *text)
            })
            .collect()
    }
}

/// Whether the next non-whitespace token is a colon.
fn is_key(following: &[(Option<JsonToken>, &str)]) -> bool {
    following
        .iter()
        .find(|(token, _)| *token != Some(JsonToken::Whitespace))
        .map_or(false, |(token, _)| *token == Some(JsonToken::Colon))
}
