//! Glyph records.

use horizon_textra_render::PixelRect;

/// One entry in a font's glyph table.
///
/// Offsets are in font pixels relative to the pen position on the baseline;
/// `offset_y` is the distance from the baseline up to the bottom of the
/// glyph's image.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Index into the owning font's pages.
    pub page: usize,
    /// Pixel bounds within the page. Empty for whitespace.
    pub region: PixelRect,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Horizontal pen advance after drawing this glyph.
    pub x_advance: f32,
}

impl Glyph {
    /// A glyph with no image, only an advance (e.g. a space).
    pub fn blank(x_advance: f32) -> Self {
        Self {
            page: 0,
            region: PixelRect::default(),
            offset_x: 0.0,
            offset_y: 0.0,
            x_advance,
        }
    }

    /// Whether the glyph has no visible pixels.
    pub fn is_blank(&self) -> bool {
        self.region.width == 0 || self.region.height == 0
    }
}
