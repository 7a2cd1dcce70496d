//! Texture and atlas layer for Horizon Textra.
//!
//! This crate owns the CPU-side resources fonts are built from:
//!
//! - [`Texture`]: a decoded RGBA page with a sampling [`FilterPair`]
//! - [`TextureAtlas`]: the `.atlas` page/region format used by emoji and icon sets
//! - [`Drawable`]: a named, sized image used by widget styles
//! - Geometry and [`Color`] types
//!
//! # Loading an atlas
//!
//! ```no_run
//! use horizon_textra_render::TextureAtlas;
//!
//! # fn example() -> horizon_textra_render::RenderResult<()> {
//! let atlas = TextureAtlas::load("assets/Twemoji.atlas")?;
//! if let Some(region) = atlas.find_region("grinning face") {
//!     println!("{} at {:?}", region.name, region.bounds);
//! }
//! # Ok(())
//! # }
//! ```

pub mod atlas;
mod drawable;
mod error;
mod texture;
mod types;

pub use atlas::{AtlasPage, AtlasRegion, PageField, RegionField, TextureAtlas};
pub use drawable::Drawable;
pub use error::{RenderError, RenderResult};
pub use texture::{FilterPair, Texture, TextureFilter};
pub use types::{Color, PixelRect, Size};
