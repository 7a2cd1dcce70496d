//! A check box whose label understands markup.

use horizon_textra_render::{Color, Drawable, Size};

use super::button::ButtonCore;
use super::image::Image;
use super::label::TextraLabel;
use super::style::CheckBoxStyle;

/// A check indicator followed by a [`TextraLabel`].
///
/// The indicator sits flush against the label; add spacing through the
/// indicator drawables' minimum size.
#[derive(Debug)]
pub struct TextraCheckBox {
    style: CheckBoxStyle,
    image: Image,
    label: TextraLabel,
    pub core: ButtonCore,
}

impl TextraCheckBox {
    pub fn new(text: impl Into<String>, style: CheckBoxStyle) -> Self {
        let label = TextraLabel::new(text, style.text.font.clone());
        let mut check_box = Self {
            style,
            image: Image::default(),
            label,
            core: ButtonCore::new(),
        };
        check_box.update_image();
        check_box
    }

    /// Start checked without notifying listeners.
    pub fn with_checked(mut self, checked: bool) -> Self {
        let events = self.core.programmatic_change_events();
        self.core.set_programmatic_change_events(false);
        self.core.set_checked(checked);
        self.core.set_programmatic_change_events(events);
        self.update_image();
        self
    }

    pub fn style(&self) -> &CheckBoxStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: CheckBoxStyle) {
        self.label.set_font(style.text.font.clone());
        self.style = style;
        self.update_image();
    }

    /// Refresh the indicator and label color from the current state.
    pub fn update_image(&mut self) {
        let state = self.core.state();
        self.image.set_drawable(self.style.indicator(state).cloned());
        let color = self.style.text.font_color(state).unwrap_or(Color::WHITE);
        self.label.set_color(color);
    }

    pub fn background(&self) -> Option<&Drawable> {
        self.style.text.button.background(self.core.state())
    }

    /// The indicator image.
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

    pub fn pref_size(&self) -> Size {
        let image = self.image.pref_size();
        let label = self.label.pref_size();
        Size::new(image.width + label.width, image.height.max(label.height))
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

    /// Toggle as a user click would. Does nothing while disabled.
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
