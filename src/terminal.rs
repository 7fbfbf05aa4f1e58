//! Terminal output using crossterm
//!
//! Writes highlighted blocks as styled text. Point sizes have no
//! terminal equivalent and are ignored.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use quillmark::{BlockHighlight, Result, StyleAttributes};

/// Convert style attributes to crossterm commands and queue them
fn set_style<W: Write>(out: &mut W, style: &StyleAttributes) -> Result<()> {
    let color = style.color;
    queue!(
        out,
        SetForegroundColor(Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        })
    )?;
    if style.is_bold() {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.is_italic() {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.strikethrough {
        queue!(out, SetAttribute(Attribute::CrossedOut))?;
    }
    Ok(())
}

fn reset_style<W: Write>(out: &mut W) -> Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    Ok(())
}

/// Write one highlighted block followed by a newline
pub fn write_block<W: Write>(out: &mut W, text: &str, highlight: &BlockHighlight) -> Result<()> {
    let mut pos = 0;

    for span in highlight.spans() {
        if span.start > pos {
            queue!(out, Print(&text[pos..span.start]))?;
        }
        set_style(out, &span.style)?;
        queue!(out, Print(&text[span.start..span.end]))?;
        reset_style(out)?;
        pos = span.end;
    }
    if pos < text.len() {
        queue!(out, Print(&text[pos..]))?;
    }
    queue!(out, Print("\n"))?;

    Ok(())
}
