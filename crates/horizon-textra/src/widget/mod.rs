//! Scene-graph-free widget adapters.
//!
//! These widgets hold state and select drawables; drawing is left to the
//! host renderer. [`ImageTextraButton`] and [`TextraCheckBox`] pair an
//! [`Image`] with a [`TextraLabel`] and pick their drawables and label color
//! from a style according to the current [`ButtonState`].

mod button;
mod image;
mod image_textra_button;
mod label;
mod state;
mod style;
mod textra_check_box;

#[cfg(test)]
pub(crate) mod tests;

pub use button::ButtonCore;
pub use image::Image;
pub use image_textra_button::{IMAGE_SPACING, ImageTextraButton};
pub use label::TextraLabel;
pub use state::ButtonState;
pub use style::{ButtonStyle, CheckBoxStyle, ImageTextButtonStyle, TextButtonStyle};
pub use textra_check_box::TextraCheckBox;
