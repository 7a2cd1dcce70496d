//! Font catalog for Horizon Textra.
//!
//! This crate turns font asset files into configured [`Font`] values:
//!
//! - **Formats**: msdf-atlas-gen JSON, AngelCode BMFont and SadConsole grids
//! - **Metrics**: per-font tuning from a TOML table, applied once at load
//! - **Registry**: [`KnownFonts`] loads lazily and caches one font per name
//!   and distance-field variant
//! - **Atlases**: emoji and icon sets merged into a font's glyph table
//! - **Families**: alias tables for `[@Name]` font switching
//!
//! # Example
//!
//! ```no_run
//! use horizon_textra_font::prelude::*;
//!
//! let fonts = KnownFonts::new(KnownFontsConfig::default().with_asset_prefix("fonts"))?;
//! let mut font = fonts.get_font_with(names::GENTIUM, DistanceFieldType::Sdf)?;
//! font.scale(0.5, 0.5);
//!
//! let family = fonts.standard_family()?;
//! assert!(family.family_font("Mono").is_some());
//! # Ok::<(), FontError>(())
//! ```

pub mod assets;
pub mod config;
pub mod distance_field;
pub mod family;
pub mod font;
pub mod format;
pub mod glyph;
pub mod known;
pub mod metrics;
pub mod names;
pub mod overlay;

mod error;

pub use assets::AssetSource;
pub use config::KnownFontsConfig;
pub use distance_field::DistanceFieldType;
pub use error::{FontError, Result};
pub use family::{FontFamily, MAX_FAMILY_SIZE};
pub use font::{Font, InlineImageMetrics, LineMetrics};
pub use format::{FontFormat, FontLoader};
pub use glyph::Glyph;
pub use known::KnownFonts;
pub use metrics::{FontMetrics, MetricsTable};
pub use overlay::{AtlasOffsets, AtlasSet};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::names;
    pub use crate::{
        AtlasOffsets, AtlasSet, DistanceFieldType, Font, FontError, FontFamily, KnownFonts,
        KnownFontsConfig,
    };
}
