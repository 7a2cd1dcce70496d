//! Markup-aware label.

use horizon_textra_font::Font;
use horizon_textra_render::{Color, Size};

use crate::markup::{self, Segment};

/// A label whose text may contain `{...}` tokens.
///
/// The label keeps the scanned segments so a renderer can play tokens back;
/// measurement only counts the literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextraLabel {
    text: String,
    segments: Vec<Segment>,
    font: Font,
    color: Color,
}

impl TextraLabel {
    /// Create a label drawn with `font`.
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        let text = text.into();
        Self {
            segments: markup::scan(&text),
            text,
            font,
            color: Color::WHITE,
        }
    }

    /// Set the color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// The text as given, tokens included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Returns `false` if it was unchanged.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.text == text {
            return false;
        }
        self.segments = markup::scan(&text);
        self.text = text;
        true
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The text with every token removed.
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Width of the widest line by one cell of height per line.
    pub fn pref_size(&self) -> Size {
        let plain = self.plain_text();
        let mut lines = 0usize;
        let mut width: f32 = 0.0;
        for line in plain.split('\n') {
            lines += 1;
            width = width.max(self.font.measure(line));
        }
        Size::new(width, self.font.cell_height() * lines as f32)
    }
}
