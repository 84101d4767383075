//! Main module for hilite library functionality
//!
//!     Two independent pipelines live here:
//!
//!         source text -> lexer fragments -> lines of tokens ([segmenting])
//!         theme name  -> raw style map   -> normalized theme ([theme])
//!
//!     [pipeline::Highlighter] wires both to the lexer registry, theme catalog and
//!     configuration.

pub mod category;
pub mod config;
pub mod error;
pub mod lexing;
pub mod pipeline;
pub mod segmenting;
pub mod theme;
pub mod token;
