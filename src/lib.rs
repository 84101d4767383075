//! # hilite
//!
//! Splits source code into per-line token lists for renderers and extracts simplified color
//! themes from style sheets.
//!
//! ```rust,ignore
//! use hilite::highlight::config::load_defaults;
//! use hilite::highlight::pipeline::{Highlighter, LexerChoice};
//!
//! let highlighter = Highlighter::new(load_defaults()?)?;
//! let lines = highlighter.tokenize("x = 1\n", LexerChoice::Named("python"))?;
//! let theme = highlighter.theme("monokai")?;
//! ```

pub mod highlight;
