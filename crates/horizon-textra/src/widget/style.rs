//! Button styles and their state lookups.
//!
//! Each lookup walks a fixed priority order over [`ButtonState`]: disabled
//! first, then pressed, then hovered, then checked, then focused, then the
//! resting value. A missing entry falls through to the next rule.

use horizon_textra_font::Font;
use horizon_textra_render::{Color, Drawable};

use super::state::ButtonState;

/// Backgrounds and content offsets shared by every button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonStyle {
    pub up: Option<Drawable>,
    pub down: Option<Drawable>,
    pub over: Option<Drawable>,
    pub focused: Option<Drawable>,
    pub disabled: Option<Drawable>,
    pub checked: Option<Drawable>,
    pub checked_over: Option<Drawable>,
    pub checked_down: Option<Drawable>,
    pub checked_focused: Option<Drawable>,
    pub pressed_offset_x: f32,
    pub pressed_offset_y: f32,
    pub unpressed_offset_x: f32,
    pub unpressed_offset_y: f32,
    pub checked_offset_x: f32,
    pub checked_offset_y: f32,
}

impl ButtonStyle {
    /// The background for a state.
    pub fn background(&self, state: ButtonState) -> Option<&Drawable> {
        if state.disabled && self.disabled.is_some() {
            return self.disabled.as_ref();
        }
        if state.pressed {
            if state.checked && self.checked_down.is_some() {
                return self.checked_down.as_ref();
            }
            if self.down.is_some() {
                return self.down.as_ref();
            }
        }
        if state.over {
            if state.checked {
                if self.checked_over.is_some() {
                    return self.checked_over.as_ref();
                }
            } else if self.over.is_some() {
                return self.over.as_ref();
            }
        }
        if state.checked {
            if state.focused && self.checked_focused.is_some() {
                return self.checked_focused.as_ref();
            }
            if self.checked.is_some() {
                return self.checked.as_ref();
            }
            if state.over && self.over.is_some() {
                return self.over.as_ref();
            }
        }
        if state.focused && self.focused.is_some() {
            return self.focused.as_ref();
        }
        self.up.as_ref()
    }

    /// How far content shifts for a state.
    pub fn content_offset(&self, state: ButtonState) -> (f32, f32) {
        if state.pressed && !state.disabled {
            (self.pressed_offset_x, self.pressed_offset_y)
        } else if state.checked && !state.disabled {
            (self.checked_offset_x, self.checked_offset_y)
        } else {
            (self.unpressed_offset_x, self.unpressed_offset_y)
        }
    }
}

/// A button with a markup label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextButtonStyle {
    pub button: ButtonStyle,
    pub font: Font,
    pub font_color: Option<Color>,
    pub down_font_color: Option<Color>,
    pub over_font_color: Option<Color>,
    pub focused_font_color: Option<Color>,
    pub disabled_font_color: Option<Color>,
    pub checked_font_color: Option<Color>,
    pub checked_down_font_color: Option<Color>,
    pub checked_over_font_color: Option<Color>,
    pub checked_focused_font_color: Option<Color>,
}

impl TextButtonStyle {
    pub fn new(font: Font) -> Self {
        Self {
            button: ButtonStyle::default(),
            font,
            font_color: None,
            down_font_color: None,
            over_font_color: None,
            focused_font_color: None,
            disabled_font_color: None,
            checked_font_color: None,
            checked_down_font_color: None,
            checked_over_font_color: None,
            checked_focused_font_color: None,
        }
    }

    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// The label color for a state.
    pub fn font_color(&self, state: ButtonState) -> Option<Color> {
        if state.disabled && self.disabled_font_color.is_some() {
            return self.disabled_font_color;
        }
        if state.pressed {
            if state.checked && self.checked_down_font_color.is_some() {
                return self.checked_down_font_color;
            }
            if self.down_font_color.is_some() {
                return self.down_font_color;
            }
        }
        if state.over {
            if state.checked {
                if self.checked_over_font_color.is_some() {
                    return self.checked_over_font_color;
                }
            } else if self.over_font_color.is_some() {
                return self.over_font_color;
            }
        }
        if state.checked {
            if state.focused && self.checked_focused_font_color.is_some() {
                return self.checked_focused_font_color;
            }
            if self.checked_font_color.is_some() {
                return self.checked_font_color;
            }
            if state.over && self.over_font_color.is_some() {
                return self.over_font_color;
            }
        }
        if state.focused && self.focused_font_color.is_some() {
            return self.focused_font_color;
        }
        self.font_color
    }
}

/// A text button with an image beside the label.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTextButtonStyle {
    pub text: TextButtonStyle,
    pub image_up: Option<Drawable>,
    pub image_down: Option<Drawable>,
    pub image_over: Option<Drawable>,
    pub image_disabled: Option<Drawable>,
    pub image_checked: Option<Drawable>,
    pub image_checked_down: Option<Drawable>,
    pub image_checked_over: Option<Drawable>,
}

impl ImageTextButtonStyle {
    pub fn new(text: TextButtonStyle) -> Self {
        Self {
            text,
            image_up: None,
            image_down: None,
            image_over: None,
            image_disabled: None,
            image_checked: None,
            image_checked_down: None,
            image_checked_over: None,
        }
    }

    /// The image for a state. Focus does not change the image.
    pub fn image(&self, state: ButtonState) -> Option<&Drawable> {
        if state.disabled && self.image_disabled.is_some() {
            return self.image_disabled.as_ref();
        }
        if state.pressed {
            if state.checked && self.image_checked_down.is_some() {
                return self.image_checked_down.as_ref();
            }
            if self.image_down.is_some() {
                return self.image_down.as_ref();
            }
        }
        if state.over {
            if state.checked {
                if self.image_checked_over.is_some() {
                    return self.image_checked_over.as_ref();
                }
            } else if self.image_over.is_some() {
                return self.image_over.as_ref();
            }
        }
        if state.checked {
            if self.image_checked.is_some() {
                return self.image_checked.as_ref();
            }
            if state.over && self.image_over.is_some() {
                return self.image_over.as_ref();
            }
        }
        self.image_up.as_ref()
    }
}

/// A text button whose image is an on/off indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckBoxStyle {
    pub text: TextButtonStyle,
    pub checkbox_on: Option<Drawable>,
    pub checkbox_off: Option<Drawable>,
    pub checkbox_on_over: Option<Drawable>,
    pub checkbox_over: Option<Drawable>,
    pub checkbox_on_disabled: Option<Drawable>,
    pub checkbox_off_disabled: Option<Drawable>,
}

impl CheckBoxStyle {
    pub fn new(text: TextButtonStyle, checkbox_off: Drawable, checkbox_on: Drawable) -> Self {
        Self {
            text,
            checkbox_on: Some(checkbox_on),
            checkbox_off: Some(checkbox_off),
            checkbox_on_over: None,
            checkbox_over: None,
            checkbox_on_disabled: None,
            checkbox_off_disabled: None,
        }
    }

    /// The indicator for a state. Hover is ignored while disabled.
    pub fn indicator(&self, state: ButtonState) -> Option<&Drawable> {
        if state.disabled {
            if state.checked && self.checkbox_on_disabled.is_some() {
                return self.checkbox_on_disabled.as_ref();
            }
            if self.checkbox_off_disabled.is_some() {
                return self.checkbox_off_disabled.as_ref();
            }
        }
        let over = state.over && !state.disabled;
        if state.checked && self.checkbox_on.is_some() {
            if over && self.checkbox_on_over.is_some() {
                return self.checkbox_on_over.as_ref();
            }
            return self.checkbox_on.as_ref();
        }
        if over && self.checkbox_over.is_some() {
            return self.checkbox_over.as_ref();
        }
        self.checkbox_off.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::tests::{drawable, test_font};

    fn name(d: Option<&Drawable>) -> Option<&str> {
        d.map(Drawable::name)
    }

    fn full_button() -> ButtonStyle {
        ButtonStyle {
            up: Some(drawable("up")),
            down: Some(drawable("down")),
            over: Some(drawable("over")),
            focused: Some(drawable("focused")),
            disabled: Some(drawable("disabled")),
            checked: Some(drawable("checked")),
            checked_over: Some(drawable("checked_over")),
            checked_down: Some(drawable("checked_down")),
            checked_focused: Some(drawable("checked_focused")),
            pressed_offset_y: -1.0,
            checked_offset_x: 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_background_priority() {
        let style = full_button();
        let s = ButtonState::new();
        assert_eq!(name(style.background(s)), Some("up"));
        assert_eq!(name(style.background(s.with_focused(true))), Some("focused"));
        assert_eq!(name(style.background(s.with_over(true))), Some("over"));
        assert_eq!(name(style.background(s.with_checked(true))), Some("checked"));
        assert_eq!(
            name(style.background(s.with_checked(true).with_focused(true))),
            Some("checked_focused")
        );
        assert_eq!(
            name(style.background(s.with_checked(true).with_over(true))),
            Some("checked_over")
        );
        assert_eq!(
            name(style.background(s.with_checked(true).with_pressed(true))),
            Some("checked_down")
        );
        assert_eq!(name(style.background(s.with_pressed(true).with_over(true))), Some("down"));
        assert_eq!(
            name(style.background(s.with_disabled(true).with_pressed(true))),
            Some("disabled")
        );
    }

    #[test]
    fn test_background_fallbacks() {
        let style = ButtonStyle {
            up: Some(drawable("up")),
            over: Some(drawable("over")),
            ..Default::default()
        };
        let s = ButtonState::new();
        assert_eq!(name(style.background(s.with_disabled(true))), Some("up"));
        assert_eq!(name(style.background(s.with_pressed(true))), Some("up"));
        // checked and hovered with no checked drawables falls back to over
        assert_eq!(name(style.background(s.with_checked(true).with_over(true))), Some("over"));
        assert_eq!(name(style.background(s.with_checked(true))), Some("up"));
    }

    #[test]
    fn test_content_offset() {
        let style = full_button();
        let s = ButtonState::new();
        assert_eq!(style.content_offset(s.with_pressed(true)), (0.0, -1.0));
        assert_eq!(style.content_offset(s.with_checked(true)), (2.0, 0.0));
        assert_eq!(style.content_offset(s.with_checked(true).with_disabled(true)), (0.0, 0.0));
    }

    #[test]
    fn test_font_color_priority() {
        let mut style = TextButtonStyle::new(test_font()).with_font_color(Color::WHITE);
        style.over_font_color = Some(Color::RED);
        style.checked_font_color = Some(Color::GREEN);
        style.disabled_font_color = Some(Color::GRAY);
        let s = ButtonState::new();
        assert_eq!(style.font_color(s), Some(Color::WHITE));
        assert_eq!(style.font_color(s.with_over(true)), Some(Color::RED));
        assert_eq!(style.font_color(s.with_checked(true)), Some(Color::GREEN));
        assert_eq!(style.font_color(s.with_checked(true).with_over(true)), Some(Color::GREEN));
        assert_eq!(style.font_color(s.with_disabled(true).with_over(true)), Some(Color::GRAY));
        assert_eq!(style.font_color(s.with_focused(true)), Some(Color::WHITE));
    }

    #[test]
    fn test_image_priority() {
        let mut style = ImageTextButtonStyle::new(TextButtonStyle::new(test_font()));
        style.image_up = Some(drawable("image_up"));
        style.image_over = Some(drawable("image_over"));
        style.image_checked_over = Some(drawable("image_checked_over"));
        style.image_down = Some(drawable("image_down"));
        let s = ButtonState::new();
        assert_eq!(name(style.image(s.with_focused(true))), Some("image_up"));
        assert_eq!(name(style.image(s.with_over(true))), Some("image_over"));
        assert_eq!(name(style.image(s.with_checked(true).with_over(true))), Some("image_checked_over"));
        assert_eq!(name(style.image(s.with_checked(true))), Some("image_up"));
        assert_eq!(name(style.image(s.with_pressed(true).with_checked(true))), Some("image_down"));
        assert_eq!(name(style.image(s.with_disabled(true))), Some("image_up"));
    }

    #[test]
    fn test_indicator() {
        let mut style = CheckBoxStyle::new(
            TextButtonStyle::new(test_font()),
            drawable("off"),
            drawable("on"),
        );
        style.checkbox_on_over = Some(drawable("on_over"));
        style.checkbox_over = Some(drawable("over"));
        style.checkbox_off_disabled = Some(drawable("off_disabled"));
        let s = ButtonState::new();
        assert_eq!(name(style.indicator(s)), Some("off"));
        assert_eq!(name(style.indicator(s.with_over(true))), Some("over"));
        assert_eq!(name(style.indicator(s.with_checked(true))), Some("on"));
        assert_eq!(name(style.indicator(s.with_checked(true).with_over(true))), Some("on_over"));
        assert_eq!(name(style.indicator(s.with_disabled(true).with_over(true))), Some("off_disabled"));
        // no on_disabled: checked and disabled uses off_disabled
        assert_eq!(
            name(style.indicator(s.with_disabled(true).with_checked(true))),
            Some("off_disabled")
        );
    }
}
