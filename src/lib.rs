//! quillmark - block highlighting for novel-style Markdown
//!
//! Headers, `@key: value` meta lines, `%` comments, emphasis and
//! dialogue quotes are painted one block at a time from an ordered,
//! immutable rule set.

pub mod config;
pub mod error;
pub mod highlight;

pub use config::{Config, QuoteConfig, QuotePair};
pub use error::{Error, QuoteKind, Result};
pub use highlight::{
    highlight, BlockHighlight, BlockState, HighlightSession, RuleSet, StyleAttributes,
    StyleCatalog, StyleName, StyleRange,
};
