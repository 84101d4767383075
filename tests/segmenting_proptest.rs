//! Property-based tests for line segmentation
//!
//! These tests check the laws every token matrix obeys, whatever the lexer produced: no empty
//! tokens, no line breaks inside tokens, and the source text can be rebuilt from the lines.

use hilite::highlight::lexing::json::JsonLexer;
use hilite::highlight::lexing::python::PythonLexer;
use hilite::highlight::lexing::Lexer;
use hilite::highlight::segmenting::{segment_lines, LineSegmenter};
use hilite::highlight::token::Fragment;
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["Text", "Keyword", "Name.Builtin", "Comment.Single", ""];

/// Generate fragments whose text is heavy on line breaks
fn fragments_strategy() -> impl Strategy<Value = Vec<Fragment>> {
    prop::collection::vec(
        (prop::sample::select(CATEGORIES), "[ab \n]{0,6}"),
        0..12,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(category, text)| Fragment::new(category, text))
            .collect()
    })
}

fn joined(fragments: &[Fragment]) -> String {
    fragments.iter().map(|f| f.text.as_str()).collect()
}

/// Text a matrix rebuilds: one final line break is not represented
fn expected_source(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

proptest! {
    #[test]
    fn tokens_are_never_empty(fragments in fragments_strategy()) {
        let lines = segment_lines(&fragments);
        for token in lines.tokens() {
            prop_assert!(!token.content.is_empty());
            prop_assert!(!token.content.contains('\n'));
        }
    }

    #[test]
    fn lines_rebuild_the_source(fragments in fragments_strategy()) {
        let text = joined(&fragments);
        let lines = segment_lines(&fragments);
        prop_assert_eq!(lines.to_source(), expected_source(&text));
    }

    #[test]
    fn line_count_follows_breaks(fragments in fragments_strategy()) {
        let text = joined(&fragments);
        let breaks = text.matches('\n').count();
        let open_tail = usize::from(!text.is_empty() && !text.ends_with('\n'));
        prop_assert_eq!(segment_lines(&fragments).len(), breaks + open_tail);
    }

    #[test]
    fn categories_survive_segmentation(fragments in fragments_strategy()) {
        let lines = segment_lines(&fragments);
        let mut from_fragments = fragments.iter().flat_map(|f| {
            f.text
                .split('\n')
                .filter(|segment| !segment.is_empty())
                .map(move |_| f.category.clone())
        });
        for token in lines.tokens() {
            prop_assert_eq!(Some(token.category.clone()), from_fragments.next());
        }
        prop_assert_eq!(from_fragments.next(), None);
    }

    #[test]
    fn incremental_push_matches_batch(fragments in fragments_strategy()) {
        let mut segmenter = LineSegmenter::new();
        for fragment in &fragments {
            segmenter.push(fragment);
        }
        prop_assert_eq!(segmenter.finish(), segment_lines(&fragments));
    }

    #[test]
    fn python_lexer_rebuilds_arbitrary_text(text in "(\\PC|\n){0,80}") {
        let fragments = PythonLexer.fragments(&text);
        prop_assert_eq!(joined(&fragments), text.clone());
        prop_assert_eq!(segment_lines(&fragments).to_source(), expected_source(&text));
    }

    #[test]
    fn json_lexer_rebuilds_arbitrary_text(text in "[{}\\[\\]:,\"a-z0-9 \n.-]{0,60}") {
        let fragments = JsonLexer.fragments(&text);
        prop_assert_eq!(joined(&fragments), text.clone());
    }
}
