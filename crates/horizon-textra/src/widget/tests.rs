//! Fixtures shared by the widget tests.

use horizon_textra_font::glyph::Glyph;
use horizon_textra_font::{DistanceFieldType, Font};
use horizon_textra_render::{Drawable, Size};

/// A 6x10 font with a glyph for every lowercase letter and the space.
pub(crate) fn test_font() -> Font {
    let mut font = Font::new("Test", DistanceFieldType::Standard, Vec::new(), 6.0, 10.0);
    for ch in ('a'..='z').chain(std::iter::once(' ')) {
        font.insert_glyph(ch, Glyph::blank(6.0));
    }
    font
}

pub(crate) fn drawable(name: &str) -> Drawable {
    Drawable::named(name, Size::new(4.0, 4.0))
}

#[test]
fn test_font_measures_cells() {
    assert_eq!(test_font().measure("ab c"), 24.0);
}
