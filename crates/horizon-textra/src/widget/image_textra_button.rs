//! A button with an image beside a markup label.
//!
//! # Example
//!
//! ```ignore
//! use horizon_textra::widget::{ImageTextraButton, ImageTextButtonStyle, TextButtonStyle};
//!
//! let style = ImageTextButtonStyle::new(TextButtonStyle::new(fonts.gentium()?));
//! let mut button = ImageTextraButton::new("{FAST}Go!", style);
//! button.core.clicked.connect(|checked| println!("clicked: {checked}"));
//! button.click();
//! ```

use horizon_textra_render::{Color, Drawable, Size};

use super::button::ButtonCore;
use super::image::Image;
use super::label::TextraLabel;
use super::style::ImageTextButtonStyle;

/// Gap between the image and the label.
pub const IMAGE_SPACING: f32 = 3.0;

/// An [`Image`] followed by a [`TextraLabel`], laid out in one row.
#[derive(Debug)]
pub struct ImageTextraButton {
    style: ImageTextButtonStyle,
    image: Image,
    label: TextraLabel,
    /// Interaction state and the `changed`/`clicked` signals.
    pub core: ButtonCore,
}

impl ImageTextraButton {
    pub fn new(text: impl Into<String>, style: ImageTextButtonStyle) -> Self {
        let label = TextraLabel::new(text, style.text.font.clone());
        let mut button = Self {
            style,
            image: Image::default(),
            label,
            core: ButtonCore::new(),
        };
        button.update_image();
        button
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn style(&self) -> &ImageTextButtonStyle {
        &self.style
    }

    /// Replace the style. The label switches to the style's font.
    pub fn set_style(&mut self, style: ImageTextButtonStyle) {
        self.label.set_font(style.text.font.clone());
        self.style = style;
        self.update_image();
    }

    /// Refresh the image drawable and label color from the current state.
    pub fn update_image(&mut self) {
        let state = self.core.state();
        self.image.set_drawable(self.style.image(state).cloned());
        let color = self.style.text.font_color(state).unwrap_or(Color::WHITE);
        self.label.set_color(color);
    }

    /// The background the current state selects.
    pub fn background(&self) -> Option<&Drawable> {
        self.style.text.button.background(self.core.state())
    }

    /// How far the content is shifted in the current state.
    pub fn content_offset(&self) -> (f32, f32) {
        self.style.text.button.content_offset(self.core.state())
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn label(&self) -> &TextraLabel {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut TextraLabel {
        &mut self.label
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    /// Image and label side by side, over the background's minimum size.
    pub fn pref_size(&self) -> Size {
        let image = self.image.pref_size();
        let label = self.label.pref_size();
        let spacing = if image.width > 0.0 { IMAGE_SPACING } else { 0.0 };
        let content = Size::new(image.width + spacing + label.width, image.height.max(label.height));
        match self.background() {
            Some(bg) => {
                let min = bg.min_size();
                Size::new(content.width.max(min.width), content.height.max(min.height))
            }
            None => content,
        }
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    pub fn is_checked(&self) -> bool {
        self.core.is_checked()
    }

    pub fn set_checked(&mut self, checked: bool) {
        if self.core.set_checked(checked) {
            self.update_image();
        }
    }

    /// Act on a user click. Does nothing while disabled.
    pub fn click(&mut self) {
        if self.core.click() {
            self.update_image();
        }
    }

    /// Whether `set_checked` notifies `changed` listeners.
    pub fn set_programmatic_change_events(&mut self, enabled: bool) {
        self.core.set_programmatic_change_events(enabled);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.core.set_disabled(disabled) {
            self.update_image();
        }
    }

    pub fn set_over(&mut self, over: bool) {
        if self.core.set_over(over) {
            self.update_image();
        }
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        if self.core.set_pressed(pressed) {
            self.update_image();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.core.set_focused(focused) {
            self.update_image();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::style::TextButtonStyle;
    use crate::widget::tests::{drawable, test_font};

    fn style() -> ImageTextButtonStyle {
        let mut text = TextButtonStyle::new(test_font()).with_font_color(Color::WHITE);
        text.over_font_color = Some(Color::RED);
        text.checked_font_color = Some(Color::GREEN);
        text.button.up = Some(Drawable::named("up", Size::new(10.0, 30.0)));
        let mut style = ImageTextButtonStyle::new(text);
        style.image_up = Some(Drawable::named("image_up", Size::new(8.0, 8.0)));
        style.image_checked = Some(drawable("image_checked"));
        style
    }

    #[test]
    fn test_new_selects_resting_image() {
        let button = ImageTextraButton::new("abc", style());
        assert_eq!(button.image().drawable().map(Drawable::name), Some("image_up"));
        assert_eq!(button.label().color(), Color::WHITE);
        assert_eq!(button.text(), "abc");
    }

    #[test]
    fn test_state_changes_refresh_children() {
        let mut button = ImageTextraButton::new("abc", style());
        button.set_over(true);
        assert_eq!(button.label().color(), Color::RED);
        button.click();
        assert!(button.is_checked());
        assert_eq!(button.label().color(), Color::GREEN);
        assert_eq!(button.image().drawable().map(Drawable::name), Some("image_checked"));
    }

    #[test]
    fn test_label_color_falls_back_to_resting_color() {
        let mut text = TextButtonStyle::new(test_font()).with_font_color(Color::BLUE);
        text.down_font_color = Some(Color::RED);
        let mut button = ImageTextraButton::new("abc", ImageTextButtonStyle::new(text));
        button.set_over(true);
        button.set_focused(true);
        assert_eq!(button.label().color(), Color::BLUE);
        button.set_pressed(true);
        assert_eq!(button.label().color(), Color::RED);

        let mut bare = ImageTextraButton::new("abc", ImageTextButtonStyle::new(TextButtonStyle::new(test_font())));
        bare.set_over(true);
        assert_eq!(bare.label().color(), Color::WHITE);
    }

    #[test]
    fn test_pref_size() {
        let button = ImageTextraButton::new("abc", style());
        // 8 image + 3 spacing + 18 label, height from the background
        assert_eq!(button.pref_size(), Size::new(29.0, 30.0));
    }

    #[test]
    fn test_set_style_swaps_font() {
        let mut button = ImageTextraButton::new("abc", style());
        let mut other = style();
        let mut font = test_font();
        font.set_name("Other");
        other.text.font = font;
        other.image_up = None;
        button.set_style(other);
        assert_eq!(button.label().font().name(), "Other");
        assert!(button.image().drawable().is_none());
    }
}
