//! Image widget.

use horizon_textra_render::{Color, Drawable, Size};

/// Displays one drawable, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    drawable: Option<Drawable>,
    color: Color,
}

impl Default for Image {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Image {
    pub fn new(drawable: Option<Drawable>) -> Self {
        Self {
            drawable,
            color: Color::WHITE,
        }
    }

    pub fn drawable(&self) -> Option<&Drawable> {
        self.drawable.as_ref()
    }

    /// Swap the drawable. Returns `false` if it was unchanged.
    pub fn set_drawable(&mut self, drawable: Option<Drawable>) -> bool {
        if self.drawable == drawable {
            return false;
        }
        self.drawable = drawable;
        true
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The drawable's minimum size, or zero.
    pub fn pref_size(&self) -> Size {
        self.drawable.as_ref().map_or(Size::ZERO, Drawable::min_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pref_size_follows_drawable() {
        let mut image = Image::default();
        assert_eq!(image.pref_size(), Size::ZERO);
        assert!(image.set_drawable(Some(Drawable::named("icon", Size::new(12.0, 8.0)))));
        assert!(!image.set_drawable(Some(Drawable::named("icon", Size::new(12.0, 8.0)))));
        assert_eq!(image.pref_size(), Size::new(12.0, 8.0));
    }
}
