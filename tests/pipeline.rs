//! End-to-end tests for the tokenizer pipeline over fixture files

use hilite::highlight::config::{load_defaults, Loader};
use hilite::highlight::pipeline::{Highlighter, LexerChoice};
use hilite::highlight::token::{LineTokenMatrix, Token};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn highlighter() -> Highlighter {
    Highlighter::new(load_defaults().unwrap()).unwrap()
}

fn tokenize_fixture(name: &str) -> LineTokenMatrix {
    highlighter()
        .load_and_tokenize(fixture_path(name), None)
        .unwrap()
}

#[test]
fn python_fixture_lines() {
    let lines = tokenize_fixture("sample.py");
    assert_eq!(lines.len(), 14);

    assert_eq!(
        lines.lines()[0].tokens(),
        &[Token::new("#!/usr/bin/env python3", "Comment.Single")]
    );
    assert_eq!(
        lines.lines()[1].tokens(),
        &[Token::new("\"\"\"Greeting helpers.\"\"\"", "Literal.String.Doc")]
    );
    assert!(lines.lines()[2].is_empty());
    assert_eq!(
        lines.lines()[6].tokens(),
        &[
            Token::new("class", "Keyword"),
            Token::new(" ", "Text.Whitespace"),
            Token::new("Greeter", "Name.Class"),
            Token::new(":", "Punctuation"),
        ]
    );

    let def_line = lines.lines()[7].tokens();
    assert_eq!(def_line[0], Token::new("    ", "Text.Whitespace"));
    assert_eq!(def_line[1], Token::new("def", "Keyword"));
    assert_eq!(def_line[3], Token::new("greet", "Name.Function"));
}

#[test]
fn python_fixture_round_trips() {
    let source = std::fs::read_to_string(fixture_path("sample.py")).unwrap();
    let lines = tokenize_fixture("sample.py");
    assert_eq!(format!("{}\n", lines.to_source()), source);
}

#[test]
fn json_fixture_detected_by_extension() {
    let lines = tokenize_fixture("sample.json");
    assert_eq!(lines.len(), 5);
    assert_eq!(lines.lines()[1].tokens()[1], Token::new("\"name\"", "Name.Tag"));
    assert!(lines
        .tokens()
        .any(|token| *token == Token::new("null", "Keyword.Constant")));
}

#[test]
fn unknown_extension_falls_back_to_text() {
    let lines = tokenize_fixture("notes.unknown");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.lines()[0].tokens(), &[Token::new("first line", "Text")]);
    assert!(lines.lines()[1].is_empty());
    assert_eq!(lines.lines()[2].tokens(), &[Token::new("third line", "Text")]);
}

#[test]
fn explicit_lexer_overrides_extension() {
    let lines = highlighter()
        .load_and_tokenize(fixture_path("sample.py"), Some("text"))
        .unwrap();
    assert_eq!(lines.len(), 14);
    for line in lines.lines() {
        assert!(line.len() <= 1);
        assert!(line.tokens().iter().all(|t| t.category.to_key() == "Text"));
    }
}

#[test]
fn matrix_json_shape() {
    let config = Loader::new()
        .set_override("output.pretty", false)
        .unwrap()
        .build()
        .unwrap();
    let highlighter = Highlighter::new(config).unwrap();
    let lines = highlighter
        .tokenize("def\n\nreturn", LexerChoice::Named("python"))
        .unwrap();

    insta::assert_snapshot!(
        highlighter.to_json(&lines).unwrap(),
        @r###"[[{"content":"def","type":"Keyword"}],[],[{"content":"return","type":"Keyword"}]]"###
    );
}
