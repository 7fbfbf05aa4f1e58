//! Visual attributes for highlighted text
//!
//! These are the concrete values a rendering host applies to a range
//! of characters. They are plain `Copy` data and never change once a
//! catalog has been built.

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font slant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleAttributes {
    /// Foreground color
    pub color: Rgba,
    /// Font weight
    pub weight: FontWeight,
    /// Font slant
    pub slant: FontSlant,
    /// Struck-through text
    pub strikethrough: bool,
    /// Underlined text
    pub underline: bool,
    /// Point size, if this style changes the text size
    pub point_size: Option<u32>,
}

impl StyleAttributes {
    /// Create a style with just a foreground color
    pub fn fg(color: Rgba) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.slant = FontSlant::Italic;
        self
    }

    /// Builder: set strikethrough
    pub fn with_strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Builder: scale the base text size by `multiplier`, rounded to whole points
    pub fn with_size(mut self, multiplier: f32, base: f32) -> Self {
        self.point_size = Some((multiplier * base).round() as u32);
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.slant == FontSlant::Italic
    }
}

/// A styled run of text within a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Style to apply to this span
    pub style: StyleAttributes,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, style: StyleAttributes) -> Self {
        Self { start, end, style }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = StyleAttributes::default();
        assert_eq!(style.color, Rgba::default());
        assert!(!style.is_bold());
        assert!(!style.is_italic());
        assert_eq!(style.point_size, None);
    }

    #[test]
    fn test_style_builders() {
        let style = StyleAttributes::fg(Rgba::opaque(1, 2, 3))
            .with_bold()
            .with_underline();
        assert_eq!(style.color, Rgba::new(1, 2, 3, 255));
        assert!(style.is_bold());
        assert!(style.underline);
        assert!(!style.strikethrough);
    }

    #[test]
    fn test_size_rounds_to_nearest_point() {
        let style = StyleAttributes::default().with_size(1.8, 12.0);
        assert_eq!(style.point_size, Some(22));
        let style = StyleAttributes::default().with_size(1.2, 10.0);
        assert_eq!(style.point_size, Some(12));
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10, StyleAttributes::default());
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }
}
