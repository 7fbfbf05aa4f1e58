//! Pattern rules for block highlighting
//!
//! A rule is a compiled pattern plus a mapping from capture group to
//! style name. Rules live in a [`RuleSet`] whose order is the paint
//! order: later rules overwrite earlier ones where they overlap.

use fancy_regex::Regex;

use super::names::StyleName;
use crate::error::{Error, Result};

/// A single pattern rule
///
/// Group 0 is the whole match, groups 1.. are the pattern's capture
/// groups in declaration order.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for diagnostics
    name: &'static str,
    /// Compiled pattern
    pattern: Regex,
    /// Capture group to style, sorted by group index
    groups: Vec<(usize, StyleName)>,
}

impl PatternRule {
    /// Compile a new pattern rule
    ///
    /// The group map is sorted by group index so that narrower, higher
    /// numbered groups are painted over the ones before them.
    pub fn new(name: &'static str, pattern: &str, groups: &[(usize, StyleName)]) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| Error::Pattern {
            rule: name,
            source: Box::new(source),
        })?;

        let mut groups = groups.to_vec();
        groups.sort_by_key(|&(group, _)| group);
        groups.dedup_by_key(|&mut (group, _)| group);

        Ok(Self {
            name,
            pattern,
            groups,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Mapped groups in ascending group order
    pub fn groups(&self) -> &[(usize, StyleName)] {
        &self.groups
    }
}

/// An ordered, immutable list of pattern rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
}

impl RuleSet {
    /// Build a rule set; the given order is the paint order
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find a rule by name
    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a PatternRule;
    type IntoIter = std::slice::Iter<'a, PatternRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// State handed from one block to the next
///
/// Every rule is self-contained within a block, so highlighting always
/// ends in [`BlockState::NO_CONTINUATION`]. Stateful rules spanning
/// several blocks would carry their id here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockState(pub i32);

impl BlockState {
    /// The block does not continue into the next one
    pub const NO_CONTINUATION: BlockState = BlockState(0);

    pub fn value(&self) -> i32 {
        self.0
    }
}
