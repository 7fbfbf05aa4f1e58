//! Built-in rule catalog
//!
//! The document dialect has four header levels, `@key: value` meta
//! lines, `%` comments, `**bold**`, `_italic_`, `__underline__` and
//! three kinds of dialogue quotes. The emphasis rules use a
//! backreference so the closing delimiter is always the same run as
//! the opening one.

use tracing::debug;

use super::names::StyleName;
use super::rules::{PatternRule, RuleSet};
use crate::config::QuotePair;
use crate::error::Result;

const HEADERS: [(&str, usize, StyleName, StyleName); 4] = [
    ("header1", 1, StyleName::Header1, StyleName::Header1Marker),
    ("header2", 2, StyleName::Header2, StyleName::Header2Marker),
    ("header3", 3, StyleName::Header3, StyleName::Header3Marker),
    ("header4", 4, StyleName::Header4, StyleName::Header4Marker),
];

const KEYWORD_VALUE: &str = r"^(@.+?)\s*:\s*(.+?)$";
const COMMENT: &str = r"^%.*$";

// Delimiter boundaries only look at ASCII word and space characters,
// so `ü**x**` still opens bold.
const WORD: &str = "A-Za-z0-9_";
const SPACE: &str = r" \t\n\x0B\x0C\r";

/// Pattern for text between two identical emphasis delimiters
///
/// `open_guard` lists what may not directly follow the opening
/// delimiter. The closing delimiter is a backreference to the opening
/// one.
fn emphasis_pattern(delimiter: &str, open_guard: &str) -> String {
    format!(
        r"(?<![{WORD}\\])({delimiter})(?!{open_guard})(?m:(.+?))(?<![{SPACE}\\])(\1)(?![{WORD}])"
    )
}

/// Pattern for a header of exactly `level` `#` characters
fn header_pattern(level: usize) -> String {
    format!(r"^(#{{{level}}})[^#](.*)[^\n]")
}

/// Pattern for text between a pair of quote delimiters
///
/// The delimiters are inserted as pattern fragments, so a malformed
/// pair surfaces as a compile error here.
fn quote_pattern(open: &str, close: &str) -> String {
    format!("{open}(.+?){close}")
}

/// Compile the full rule set
///
/// Order matters: headers, meta lines and comments are painted first,
/// then emphasis, then dialogue on top of everything else.
pub fn compile(double: &QuotePair, single: &QuotePair) -> Result<RuleSet> {
    let mut rules = Vec::with_capacity(12);

    for (name, level, content, marker) in HEADERS {
        rules.push(PatternRule::new(
            name,
            &header_pattern(level),
            &[(0, content), (1, marker)],
        )?);
    }

    rules.push(PatternRule::new(
        "keyword_value",
        KEYWORD_VALUE,
        &[(1, StyleName::Keyword), (2, StyleName::Value)],
    )?);
    rules.push(PatternRule::new("comment", COMMENT, &[(0, StyleName::Hidden)])?);

    let space = format!("[{SPACE}]");
    for (name, pattern, style) in [
        ("bold", emphasis_pattern(r"\*{2}", &space), StyleName::Bold),
        ("italic", emphasis_pattern("_", &format!(r"{space}|\1")), StyleName::Italic),
        ("underline", emphasis_pattern("_{2}", &space), StyleName::Underline),
    ] {
        rules.push(PatternRule::new(
            name,
            &pattern,
            &[(1, StyleName::Hidden), (2, style), (3, StyleName::Hidden)],
        )?);
    }

    rules.push(PatternRule::new(
        "dialogue_plain",
        &quote_pattern("\"", "\""),
        &[(0, StyleName::Dialogue1)],
    )?);
    rules.push(PatternRule::new(
        "dialogue_double",
        &quote_pattern(&double.open, &double.close),
        &[(0, StyleName::Dialogue2)],
    )?);
    rules.push(PatternRule::new(
        "dialogue_single",
        &quote_pattern(&single.open, &single.close),
        &[(0, StyleName::Dialogue3)],
    )?);

    debug!(rules = rules.len(), "compiled highlight rules");

    Ok(RuleSet::new(rules))
}
