//! Horizon Textra - pre-tuned fonts and markup-aware widgets.
//!
//! This is the umbrella crate. It re-exports the core, render and font
//! crates and adds the markup scanner and widget adapters.
//!
//! # Example
//!
//! ```no_run
//! use horizon_textra::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fonts = KnownFonts::new(KnownFontsConfig::default())?;
//!     let gentium = fonts.add_emoji(fonts.gentium()?)?;
//!
//!     let style = ImageTextButtonStyle::new(TextButtonStyle::new(gentium));
//!     let mut button = ImageTextraButton::new("[+saxophone] {WAVE}Play{ENDWAVE}", style);
//!     button.click();
//!     Ok(())
//! }
//! ```

pub use horizon_textra_core::*;

/// Textures, atlases and drawables.
pub mod render {
    pub use horizon_textra_render::*;
}

/// Font registry, loaders and families.
pub mod font {
    pub use horizon_textra_font::*;
}

pub mod markup;
pub mod widget;

/// Common imports.
pub mod prelude {
    pub use crate::markup::{InternalToken, Segment, TokenCategory};
    pub use crate::widget::{
        ButtonState, CheckBoxStyle, Image, ImageTextButtonStyle, ImageTextraButton,
        TextButtonStyle, TextraCheckBox, TextraLabel,
    };
    pub use horizon_textra_core::{Lifecycle, LifecycleListener, Signal};
    pub use horizon_textra_font::prelude::*;
    pub use horizon_textra_render::{Color, Drawable, Size};
}
