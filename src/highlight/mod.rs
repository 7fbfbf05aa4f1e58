//! Highlighting engine
//!
//! This module provides block-level highlighting for the document
//! dialect:
//! - Style names and the visual attributes they resolve to
//! - The built-in, ordered rule catalog
//! - The per-block highlighter and a session wrapper for hosts

mod style;
mod names;
mod rules;
mod builtin;
mod highlighter;
mod session;

pub use style::{FontSlant, FontWeight, Rgba, Span, StyleAttributes};
pub use names::{StyleCatalog, StyleName};
pub use rules::{BlockState, PatternRule, RuleSet};
pub use builtin::compile;
pub use highlighter::{highlight, BlockHighlight, StyleRange};
pub use session::{Compiled, HighlightSession};
