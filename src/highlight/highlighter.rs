//! Block highlighting
//!
//! Each block is highlighted on its own. Every rule is scanned over
//! the whole block in rule-set order, and every mapped group of every
//! match becomes a [`StyleRange`]. Ranges are meant to be applied in
//! the order they are returned, each one overwriting whatever style
//! the characters had before:
//!
//! - a later rule wins over an earlier one,
//! - within one match a higher group wins over a lower one, which is
//!   how a header's `#` marker stands out from the header text.

use tracing::{trace, warn};

use super::names::{StyleCatalog, StyleName};
use super::rules::{BlockState, RuleSet};
use super::style::{Span, StyleAttributes};

/// A style to apply to a byte range of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRange {
    /// Byte offset where this range starts
    pub offset: usize,
    /// Length in bytes, never zero
    pub length: usize,
    /// Semantic style
    pub name: StyleName,
    /// Resolved visual attributes for `name`
    pub style: StyleAttributes,
}

impl StyleRange {
    /// Byte offset one past the end of this range
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.offset && pos < self.end()
    }
}

/// Result of highlighting a single block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHighlight {
    /// Ranges in application order
    pub ranges: Vec<StyleRange>,
    /// State at the end of the block
    pub state: BlockState,
    /// Length of the highlighted block in bytes
    len: usize,
}

impl BlockHighlight {
    /// Length of the block these ranges belong to
    pub fn block_len(&self) -> usize {
        self.len
    }

    /// The style a byte ends up with once all ranges are applied
    pub fn style_at(&self, pos: usize) -> Option<StyleName> {
        self.ranges
            .iter()
            .rev()
            .find(|range| range.contains(pos))
            .map(|range| range.name)
    }

    /// Apply every range to a per-byte buffer, last writer wins
    pub fn paint(&self) -> Vec<Option<StyleName>> {
        self.owners()
            .into_iter()
            .map(|owner| owner.map(|idx| self.ranges[idx].name))
            .collect()
    }

    /// Collapse the painted buffer into sorted, non-overlapping spans
    ///
    /// Unstyled gaps produce no span.
    pub fn spans(&self) -> Vec<Span> {
        let mut spans = Vec::new();
        // (start, owning range) of the run being collected
        let mut run: Option<(usize, usize)> = None;

        for (pos, owner) in self.owners().into_iter().enumerate() {
            if let Some((start, idx)) = run {
                let same = owner.is_some_and(|o| self.ranges[o].name == self.ranges[idx].name);
                if same {
                    continue;
                }
                spans.push(Span::new(start, pos, self.ranges[idx].style));
            }
            run = owner.map(|idx| (pos, idx));
        }
        if let Some((start, idx)) = run {
            spans.push(Span::new(start, self.len, self.ranges[idx].style));
        }

        spans
    }

    /// Index of the range owning each byte after painting
    fn owners(&self) -> Vec<Option<usize>> {
        let mut owners = vec![None; self.len];
        for (idx, range) in self.ranges.iter().enumerate() {
            let end = range.end().min(self.len);
            for owner in &mut owners[range.offset.min(end)..end] {
                *owner = Some(idx);
            }
        }
        owners
    }
}

/// Highlight one block of text
///
/// Never fails: text that no rule matches simply produces no ranges.
/// A rule whose scan hits a matcher limit stops contributing for this
/// block and the remaining rules still run.
pub fn highlight(rules: &RuleSet, catalog: &StyleCatalog, text: &str) -> BlockHighlight {
    let mut ranges = Vec::new();

    for rule in rules {
        for captures in rule.pattern().captures_iter(text) {
            let captures = match captures {
                Ok(captures) => captures,
                Err(err) => {
                    warn!(rule = rule.name(), error = %err, "pattern scan aborted");
                    break;
                }
            };

            for &(group, name) in rule.groups() {
                // Groups that did not take part in this match are skipped
                let Some(m) = captures.get(group) else {
                    continue;
                };
                if m.start() >= m.end() {
                    continue;
                }
                trace!(
                    rule = rule.name(),
                    style = name.key(),
                    start = m.start(),
                    end = m.end(),
                    "style range"
                );
                ranges.push(StyleRange {
                    offset: m.start(),
                    length: m.end() - m.start(),
                    name,
                    style: catalog.get(name),
                });
            }
        }
    }

    BlockHighlight {
        ranges,
        state: BlockState::NO_CONTINUATION,
        len: text.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuotePair;
    use crate::highlight::builtin;
    use crate::highlight::rules::PatternRule;

    fn setup() -> (RuleSet, StyleCatalog) {
        let rules = builtin::compile(
            &QuotePair::new("\u{201c}", "\u{201d}"),
            &QuotePair::new("\u{2018}", "\u{2019}"),
        )
        .unwrap();
        (rules, StyleCatalog::new(12.0))
    }

    fn summary(result: &BlockHighlight) -> Vec<(usize, usize, StyleName)> {
        result
            .ranges
            .iter()
            .map(|r| (r.offset, r.length, r.name))
            .collect()
    }

    #[test]
    fn test_header_marker_over_content() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "# Title");

        assert_eq!(
            summary(&result),
            vec![(0, 7, StyleName::Header1), (0, 1, StyleName::Header1Marker)]
        );
        assert_eq!(result.style_at(0), Some(StyleName::Header1Marker));
        for pos in 1..7 {
            assert_eq!(result.style_at(pos), Some(StyleName::Header1));
        }
        assert_eq!(result.state, BlockState::NO_CONTINUATION);
    }

    #[test]
    fn test_header_levels() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "### Scene");
        assert_eq!(
            summary(&result),
            vec![(0, 9, StyleName::Header3), (0, 3, StyleName::Header3Marker)]
        );

        let result = highlight(&rules, &catalog, "##### Too deep");
        assert!(result.ranges.is_empty());
    }

    #[test]
    fn test_bold() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "**bold**");
        assert_eq!(
            summary(&result),
            vec![
                (0, 2, StyleName::Hidden),
                (2, 4, StyleName::Bold),
                (6, 2, StyleName::Hidden),
            ]
        );
        assert!(result.ranges[1].style.is_bold());
    }

    #[test]
    fn test_italic_rejects_leading_space() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "_ italic_");
        assert!(result.ranges.is_empty());
    }

    #[test]
    fn test_italic() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "_italic_ text");
        assert_eq!(
            summary(&result),
            vec![
                (0, 1, StyleName::Hidden),
                (1, 6, StyleName::Italic),
                (7, 1, StyleName::Hidden),
            ]
        );
    }

    #[test]
    fn test_underline_is_not_italic() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "__under__");
        assert_eq!(
            summary(&result),
            vec![
                (0, 2, StyleName::Hidden),
                (2, 5, StyleName::Underline),
                (7, 2, StyleName::Hidden),
            ]
        );
    }

    #[test]
    fn test_escaped_delimiter() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, r"\**not bold**");
        assert!(result.ranges.is_empty());
    }

    #[test]
    fn test_delimiter_inside_word_is_plain() {
        let (rules, catalog) = setup();
        for text in ["a**b**", "**a**b", "snake_case_name", "__x_", "x__y__", "a_b_"] {
            let result = highlight(&rules, &catalog, text);
            assert!(result.ranges.is_empty(), "{text:?} was painted");
        }
    }

    #[test]
    fn test_non_ascii_letters_do_not_block_emphasis() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "ü**x**");
        assert_eq!(
            summary(&result),
            vec![
                (2, 2, StyleName::Hidden),
                (4, 1, StyleName::Bold),
                (5, 2, StyleName::Hidden),
            ]
        );

        let result = highlight(&rules, &catalog, "_x_é");
        assert_eq!(
            summary(&result),
            vec![
                (0, 1, StyleName::Hidden),
                (1, 1, StyleName::Italic),
                (2, 1, StyleName::Hidden),
            ]
        );
    }

    #[test]
    fn test_every_match_is_found() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "**a** and **b**");
        let bold: Vec<(usize, usize)> = result
            .ranges
            .iter()
            .filter(|r| r.name == StyleName::Bold)
            .map(|r| (r.offset, r.length))
            .collect();
        assert_eq!(bold, vec![(2, 1), (12, 1)]);
        assert_eq!(result.ranges.len(), 6);
    }

    #[test]
    fn test_keyword_value() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "@author: Jane Doe");
        assert_eq!(
            summary(&result),
            vec![(0, 7, StyleName::Keyword), (9, 8, StyleName::Value)]
        );
    }

    #[test]
    fn test_comment() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "%draft note");
        assert_eq!(summary(&result), vec![(0, 11, StyleName::Hidden)]);
    }

    #[test]
    fn test_configured_single_quotes() {
        let (rules, catalog) = setup();
        let text = "He said \u{2018}hi\u{2019}.";
        let result = highlight(&rules, &catalog, text);

        let start = text.find('\u{2018}').unwrap();
        let end = text.find('\u{2019}').unwrap() + '\u{2019}'.len_utf8();
        assert_eq!(summary(&result), vec![(start, end - start, StyleName::Dialogue3)]);
    }

    #[test]
    fn test_plain_and_double_dialogue() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "\"one\" and \u{201c}two\u{201d}");
        let names: Vec<StyleName> = result.ranges.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![StyleName::Dialogue1, StyleName::Dialogue2]);
        assert_eq!((result.ranges[0].offset, result.ranges[0].length), (0, 5));
    }

    #[test]
    fn test_later_rule_wins() {
        let (rules, catalog) = setup();
        let text = "# Say \u{201c}hello\u{201d} now";
        let result = highlight(&rules, &catalog, text);
        let quote = text.find('\u{201c}').unwrap();

        assert_eq!(result.style_at(0), Some(StyleName::Header1Marker));
        assert_eq!(result.style_at(2), Some(StyleName::Header1));
        assert_eq!(result.style_at(quote), Some(StyleName::Dialogue2));
        assert_eq!(result.style_at(text.len() - 1), Some(StyleName::Header1));

        let result = highlight(&rules, &catalog, "%**x**");
        assert_eq!(result.style_at(0), Some(StyleName::Hidden));
        assert_eq!(result.style_at(3), Some(StyleName::Bold));
    }

    #[test]
    fn test_non_participating_group_is_skipped() {
        let rule = PatternRule::new(
            "optional",
            r"(a)(b)?",
            &[(1, StyleName::Keyword), (2, StyleName::Value)],
        )
        .unwrap();
        let rules = RuleSet::new(vec![rule]);
        let catalog = StyleCatalog::new(12.0);

        let result = highlight(&rules, &catalog, "a ab");
        assert_eq!(
            summary(&result),
            vec![
                (0, 1, StyleName::Keyword),
                (2, 1, StyleName::Keyword),
                (3, 1, StyleName::Value),
            ]
        );
    }

    #[test]
    fn test_ranges_stay_in_bounds() {
        let (rules, catalog) = setup();
        let blocks = [
            "",
            "plain text",
            "# Ünïcödé “quote” and ‘single’",
            "@kéy : välue",
            "**ß** _é_ __ü__ \"ö\"",
            "%",
            "#",
        ];
        for text in blocks {
            let result = highlight(&rules, &catalog, text);
            for range in &result.ranges {
                assert!(range.length > 0);
                assert!(range.end() <= text.len());
                assert!(text.is_char_boundary(range.offset));
                assert!(text.is_char_boundary(range.end()));
            }
        }
    }

    #[test]
    fn test_highlight_is_deterministic() {
        let (rules, catalog) = setup();
        let text = "## A **bold** “claim” with _style_";
        let first = highlight(&rules, &catalog, text);
        let second = highlight(&rules, &catalog, text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_paint_and_spans() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "a **b** c");
        assert_eq!(result.block_len(), 9);

        let painted = result.paint();
        assert_eq!(painted[0], None);
        assert_eq!(painted[2], Some(StyleName::Hidden));
        assert_eq!(painted[4], Some(StyleName::Bold));
        assert_eq!(painted[8], None);

        let spans = result.spans();
        let bounds: Vec<(usize, usize)> = spans.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(bounds, vec![(2, 4), (4, 5), (5, 7)]);
        assert_eq!(spans[1].style, catalog.get(StyleName::Bold));
    }

    #[test]
    fn test_spans_split_header() {
        let (rules, catalog) = setup();
        let result = highlight(&rules, &catalog, "# Title");
        let spans = result.spans();
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start, spans[0].end), (0, 1));
        assert_eq!(spans[0].style, catalog.get(StyleName::Header1Marker));
        assert_eq!((spans[1].start, spans[1].end), (1, 7));
        assert_eq!(spans[1].style, catalog.get(StyleName::Header1));
    }
}
