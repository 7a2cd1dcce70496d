//! Font file formats.
//!
//! Each on-disk format has one [`FontLoader`] implementation. The registry
//! picks a loader through the [`FontFormat`] tag recorded for every name in
//! the catalog, so adding a format means adding a loader and a tag.

mod bmfont;
mod sad_console;
mod structured;

use std::collections::HashMap;
use std::fmt;

pub use bmfont::BmFontLoader;
pub use sad_console::SadConsoleLoader;
pub use structured::StructuredLoader;

use crate::assets::AssetSource;
use crate::distance_field::DistanceFieldType;
use crate::error::Result;
use crate::font::Font;

/// The file format a catalog font is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    /// msdf-atlas-gen JSON (`.json`, or gzip-compressed `.dat`) plus a page.
    Structured,
    /// AngelCode BMFont text `.fnt` plus pages.
    BmFont,
    /// SadConsole `.font` JSON plus a fixed grid page.
    SadConsole,
}

impl FontFormat {
    /// Distance-field variants this format can provide.
    pub fn supports(self, distance_field: DistanceFieldType) -> bool {
        match self {
            Self::Structured => true,
            Self::BmFont | Self::SadConsole => distance_field == DistanceFieldType::Standard,
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Structured => "structured JSON",
            Self::BmFont => "BMFont",
            Self::SadConsole => "SadConsole",
        })
    }
}

/// Loads one file format into a [`Font`].
///
/// Loaders only read files and build the glyph table; per-font tuning is
/// applied afterwards from the metrics table.
pub trait FontLoader: Send + Sync {
    /// The format this loader reads.
    fn format(&self) -> FontFormat;

    /// Whether this loader can produce the given variant.
    fn supports(&self, distance_field: DistanceFieldType) -> bool {
        self.format().supports(distance_field)
    }

    /// Load a font.
    fn load(&self, name: &str, distance_field: DistanceFieldType, assets: &AssetSource) -> Result<Font>;
}

/// The file stem for a font's assets: spaces become hyphens and the variant's
/// file part is appended (`"Cascadia Mono"` + SDF is `"Cascadia-Mono-sdf"`).
pub fn asset_stem(name: &str, distance_field: DistanceFieldType) -> String {
    format!("{}{}", name.replace(' ', "-"), distance_field.file_part())
}

/// One loader per format.
pub fn default_loaders() -> HashMap<FontFormat, Box<dyn FontLoader>> {
    let loaders: [Box<dyn FontLoader>; 3] = [
        Box::new(StructuredLoader),
        Box::new(BmFontLoader),
        Box::new(SadConsoleLoader),
    ];
    loaders.into_iter().map(|l| (l.format(), l)).collect()
}

/// Record whether every visible glyph shares one advance.
pub(crate) fn detect_mono(font: &mut Font) {
    let mut advances = font
        .glyphs
        .values()
        .filter(|g| !g.is_blank())
        .map(|g| g.x_advance);
    font.is_mono = match advances.next() {
        Some(first) => advances.all(|a| (a - first).abs() < f32::EPSILON),
        None => false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_stem() {
        assert_eq!(asset_stem("Gentium", DistanceFieldType::Standard), "Gentium-standard");
        assert_eq!(asset_stem("Cascadia Mono", DistanceFieldType::SdfOutline), "Cascadia-Mono-sdf");
    }

    #[test]
    fn test_default_loaders_cover_every_format() {
        let loaders = default_loaders();
        for format in [FontFormat::Structured, FontFormat::BmFont, FontFormat::SadConsole] {
            assert_eq!(loaders[&format].format(), format);
        }
    }

    #[test]
    fn test_bitmap_formats_are_standard_only() {
        assert!(FontFormat::Structured.supports(DistanceFieldType::Msdf));
        assert!(!FontFormat::BmFont.supports(DistanceFieldType::Sdf));
        assert!(!FontFormat::SadConsole.supports(DistanceFieldType::SdfOutline));
        assert!(FontFormat::SadConsole.supports(DistanceFieldType::Standard));
    }
}
