//! Highlighting session
//!
//! A session owns the compiled rules and styles for one configuration
//! and hands them out to whoever highlights blocks. Compiled state is
//! shared through an `Arc`, so blocks can be highlighted from several
//! threads and a reconfiguration never disturbs calls already running
//! against the previous rules.

use std::sync::Arc;

use tracing::{debug, info};

use super::builtin;
use super::highlighter::{self, BlockHighlight};
use super::names::StyleCatalog;
use super::rules::RuleSet;
use crate::config::Config;
use crate::error::Result;

/// Rules and styles built from one configuration
#[derive(Debug)]
pub struct Compiled {
    catalog: StyleCatalog,
    rules: RuleSet,
}

impl Compiled {
    /// Validate the configuration and compile its rules and styles
    pub fn build(config: &Config) -> Result<Self> {
        config.validate()?;
        let rules = builtin::compile(&config.quotes.double, &config.quotes.single)?;
        let catalog = StyleCatalog::new(config.text_size);
        Ok(Self { catalog, rules })
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Highlight one block
    pub fn highlight(&self, text: &str) -> BlockHighlight {
        highlighter::highlight(&self.rules, &self.catalog, text)
    }
}

/// Main highlighting entry point for a host
pub struct HighlightSession {
    compiled: Arc<Compiled>,
}

impl HighlightSession {
    /// Create a session for the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        let compiled = Compiled::build(config)?;
        debug!(
            rules = compiled.rules.len(),
            text_size = config.text_size,
            "highlight session ready"
        );
        Ok(Self {
            compiled: Arc::new(compiled),
        })
    }

    /// Rebuild rules and styles for a new configuration
    ///
    /// Configuration changes are never picked up on their own; the host
    /// calls this and re-highlights the blocks it cares about. On error
    /// the previous rules stay active.
    pub fn reconfigure(&mut self, config: &Config) -> Result<()> {
        let compiled = Compiled::build(config)?;
        self.compiled = Arc::new(compiled);
        info!(text_size = config.text_size, "highlight rules rebuilt");
        Ok(())
    }

    /// Shared handle to the active rules and styles
    pub fn compiled(&self) -> Arc<Compiled> {
        Arc::clone(&self.compiled)
    }

    /// Highlight a single block
    pub fn highlight_block(&self, text: &str) -> BlockHighlight {
        self.compiled.highlight(text)
    }

    /// Highlight a whole document, one block per line
    pub fn highlight_text(&self, text: &str) -> Vec<BlockHighlight> {
        text.lines().map(|line| self.highlight_block(line)).collect()
    }
}
