//! Drawables: named, sized images that widgets paint.

use crate::atlas::AtlasRegion;
use crate::types::{Color, PixelRect, Size};

/// Something a widget can draw: an atlas region, optionally tinted.
///
/// Widgets only compare and measure drawables; the renderer resolves
/// `name` against the atlas it was created from.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    name: String,
    region: Option<PixelRect>,
    min_size: Size,
    tint: Color,
}

impl Drawable {
    /// A drawable with no backing region, e.g. a solid placeholder.
    pub fn named(name: impl Into<String>, min_size: Size) -> Self {
        Self {
            name: name.into(),
            region: None,
            min_size,
            tint: Color::WHITE,
        }
    }

    /// A drawable for a packed atlas region, sized to the region's original
    /// (unstripped) dimensions.
    pub fn from_region(region: &AtlasRegion) -> Self {
        Self {
            name: region.name.clone(),
            region: Some(region.bounds),
            min_size: Size::new(region.original_width as f32, region.original_height as f32),
            tint: Color::WHITE,
        }
    }

    /// The same drawable multiplied by `tint`.
    #[must_use]
    pub fn tinted(&self, tint: Color) -> Self {
        Self {
            tint,
            ..self.clone()
        }
    }

    /// The region or placeholder name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixel bounds within the page, if backed by an atlas region.
    pub fn region(&self) -> Option<PixelRect> {
        self.region
    }

    /// Minimum layout size.
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// Tint color.
    pub fn tint(&self) -> Color {
        self.tint
    }
}
