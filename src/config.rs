//! Highlighter configuration
//!
//! The highlighter reads three values once, when its rules are built:
//! the double and single quote pairs used for dialogue, and the base
//! text size that header sizes scale from.
//!
//! Format: TOML, every key optional
//!
//! Example:
//! ```toml
//! text-size = 12.0
//!
//! [quotes]
//! double = ["“", "”"]
//! single = ["‘", "’"]
//! ```
//!
//! Changing the configuration does not affect rules that were already
//! built. Hosts rebuild through `HighlightSession::reconfigure`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, QuoteKind, Result};

/// An opening and closing quote delimiter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "[String; 2]")]
pub struct QuotePair {
    pub open: String,
    pub close: String,
}

impl QuotePair {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.open.is_empty() && !self.close.is_empty()
    }
}

impl From<[String; 2]> for QuotePair {
    fn from([open, close]: [String; 2]) -> Self {
        Self { open, close }
    }
}

/// Quote pairs for dialogue highlighting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Double quote pair, highlighted as `dialogue2`
    pub double: QuotePair,
    /// Single quote pair, highlighted as `dialogue3`
    pub single: QuotePair,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            double: QuotePair::new("\u{201c}", "\u{201d}"),
            single: QuotePair::new("\u{2018}", "\u{2019}"),
        }
    }
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Dialogue quote pairs
    pub quotes: QuoteConfig,
    /// Base text size in points
    pub text_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quotes: QuoteConfig::default(),
            text_size: 12.0,
        }
    }
}

impl Config {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value can be turned into rules and styles
    pub fn validate(&self) -> Result<()> {
        if !self.quotes.double.is_complete() {
            return Err(Error::EmptyQuote {
                which: QuoteKind::Double,
            });
        }
        if !self.quotes.single.is_complete() {
            return Err(Error::EmptyQuote {
                which: QuoteKind::Single,
            });
        }
        if !self.text_size.is_finite() || self.text_size <= 0.0 {
            return Err(Error::InvalidTextSize(self.text_size));
        }
        Ok(())
    }
}
