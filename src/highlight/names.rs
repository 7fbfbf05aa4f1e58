//! Semantic style names
//!
//! This module defines the closed set of styles the highlighter can
//! paint and the visual attributes each one resolves to.

use super::style::{Rgba, StyleAttributes};

const HEADER: Rgba = Rgba::opaque(0, 155, 200);
const HEADER_MARKER: Rgba = Rgba::opaque(0, 105, 135);
const EMPHASIS: Rgba = Rgba::opaque(200, 120, 0);
const DIALOGUE_PLAIN: Rgba = Rgba::opaque(200, 46, 0);
const DIALOGUE_DOUBLE: Rgba = Rgba::opaque(184, 200, 0);
const DIALOGUE_SINGLE: Rgba = Rgba::opaque(136, 200, 0);
const COMMENT: Rgba = Rgba::opaque(150, 150, 150);
const KEYWORD: Rgba = Rgba::opaque(200, 46, 0);
const VALUE: Rgba = Rgba::opaque(184, 200, 0);

/// Number of style names
pub const STYLE_COUNT: usize = 18;

/// Semantic style names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleName {
    /// Header text, levels 1-4
    Header1,
    Header2,
    Header3,
    Header4,
    /// The `#` run of a header, levels 1-4
    Header1Marker,
    Header2Marker,
    Header3Marker,
    Header4Marker,
    Bold,
    Italic,
    Strike,
    Underline,
    /// Plain `"..."` quotes
    Dialogue1,
    /// Configured double quotes
    Dialogue2,
    /// Configured single quotes
    Dialogue3,
    /// Comments and emphasis delimiters
    Hidden,
    /// Key of an `@key: value` line
    Keyword,
    /// Value of an `@key: value` line
    Value,
}

impl StyleName {
    /// Every style name, in declaration order
    pub const ALL: [StyleName; STYLE_COUNT] = [
        StyleName::Header1,
        StyleName::Header2,
        StyleName::Header3,
        StyleName::Header4,
        StyleName::Header1Marker,
        StyleName::Header2Marker,
        StyleName::Header3Marker,
        StyleName::Header4Marker,
        StyleName::Bold,
        StyleName::Italic,
        StyleName::Strike,
        StyleName::Underline,
        StyleName::Dialogue1,
        StyleName::Dialogue2,
        StyleName::Dialogue3,
        StyleName::Hidden,
        StyleName::Keyword,
        StyleName::Value,
    ];

    /// Resolve this name to visual attributes for the given base text size
    pub fn attributes(self, base_size: f32) -> StyleAttributes {
        match self {
            StyleName::Header1 => StyleAttributes::fg(HEADER).with_bold().with_size(1.8, base_size),
            StyleName::Header2 => StyleAttributes::fg(HEADER).with_bold().with_size(1.6, base_size),
            StyleName::Header3 => StyleAttributes::fg(HEADER).with_bold().with_size(1.4, base_size),
            StyleName::Header4 => StyleAttributes::fg(HEADER).with_bold().with_size(1.2, base_size),
            StyleName::Header1Marker => {
                StyleAttributes::fg(HEADER_MARKER).with_bold().with_size(1.8, base_size)
            }
            StyleName::Header2Marker => {
                StyleAttributes::fg(HEADER_MARKER).with_bold().with_size(1.6, base_size)
            }
            StyleName::Header3Marker => {
                StyleAttributes::fg(HEADER_MARKER).with_bold().with_size(1.4, base_size)
            }
            StyleName::Header4Marker => {
                StyleAttributes::fg(HEADER_MARKER).with_bold().with_size(1.2, base_size)
            }
            StyleName::Bold => StyleAttributes::fg(EMPHASIS).with_bold(),
            StyleName::Italic => StyleAttributes::fg(EMPHASIS).with_italic(),
            StyleName::Strike => StyleAttributes::fg(EMPHASIS).with_strikethrough(),
            StyleName::Underline => StyleAttributes::fg(EMPHASIS).with_underline(),
            StyleName::Dialogue1 => StyleAttributes::fg(DIALOGUE_PLAIN),
            StyleName::Dialogue2 => StyleAttributes::fg(DIALOGUE_DOUBLE),
            StyleName::Dialogue3 => StyleAttributes::fg(DIALOGUE_SINGLE),
            StyleName::Hidden => StyleAttributes::fg(COMMENT),
            StyleName::Keyword => StyleAttributes::fg(KEYWORD),
            StyleName::Value => StyleAttributes::fg(VALUE),
        }
    }

    /// Get the short key for this style name
    pub fn key(&self) -> &'static str {
        match self {
            StyleName::Header1 => "header1",
            StyleName::Header2 => "header2",
            StyleName::Header3 => "header3",
            StyleName::Header4 => "header4",
            StyleName::Header1Marker => "header1h",
            StyleName::Header2Marker => "header2h",
            StyleName::Header3Marker => "header3h",
            StyleName::Header4Marker => "header4h",
            StyleName::Bold => "bold",
            StyleName::Italic => "italic",
            StyleName::Strike => "strike",
            StyleName::Underline => "underline",
            StyleName::Dialogue1 => "dialogue1",
            StyleName::Dialogue2 => "dialogue2",
            StyleName::Dialogue3 => "dialogue3",
            StyleName::Hidden => "hidden",
            StyleName::Keyword => "keyword",
            StyleName::Value => "value",
        }
    }
}

/// Resolved attributes for every style name at one base text size
///
/// Built once per configuration and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleCatalog {
    base_size: f32,
    styles: [StyleAttributes; STYLE_COUNT],
}

impl StyleCatalog {
    /// Build the catalog for a base text size in points
    pub fn new(base_size: f32) -> Self {
        Self {
            base_size,
            styles: StyleName::ALL.map(|name| name.attributes(base_size)),
        }
    }

    /// Look up the attributes for a style name
    pub fn get(&self, name: StyleName) -> StyleAttributes {
        self.styles[name as usize]
    }

    /// The base text size this catalog was built for
    pub fn base_size(&self) -> f32 {
        self.base_size
    }
}
