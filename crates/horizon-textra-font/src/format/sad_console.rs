//! SadConsole `.font` grids.

use std::path::Path;
use std::sync::Arc;

use horizon_textra_render::{PixelRect, Texture};
use serde::Deserialize;

use super::{FontFormat, FontLoader, asset_stem, detect_mono};
use crate::assets::AssetSource;
use crate::distance_field::DistanceFieldType;
use crate::error::{FontError, Result};
use crate::font::Font;
use crate::glyph::Glyph;

/// The JSON description of a SadConsole font.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SadConsoleDescription {
    #[serde(default)]
    pub name: String,
    pub file_path: String,
    pub glyph_height: u32,
    pub glyph_width: u32,
    #[serde(default)]
    pub glyph_padding: u32,
    pub columns: u32,
    #[serde(default = "default_solid")]
    pub solid_glyph_index: u32,
}

fn default_solid() -> u32 {
    219
}

impl SadConsoleDescription {
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let desc: Self = serde_json::from_str(text).map_err(|source| FontError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if desc.glyph_width == 0 || desc.glyph_height == 0 || desc.columns == 0 {
            return Err(FontError::parse(path, None, "glyph size and column count must be positive"));
        }
        Ok(desc)
    }
}

/// Reads `<stem>.font` and the page it names. Glyph `i` is codepoint `i`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SadConsoleLoader;

impl SadConsoleLoader {
    /// Cut a loaded page into a grid of glyphs.
    pub fn build(&self, name: &str, desc: &SadConsoleDescription, page: Arc<Texture>) -> Font {
        let pad = desc.glyph_padding;
        let step_x = desc.glyph_width.saturating_add(pad);
        let step_y = desc.glyph_height.saturating_add(pad);
        let rows = page.height().saturating_sub(pad) / step_y;
        let columns = desc.columns.min(page.width().saturating_sub(pad) / step_x);

        let (w, h) = (desc.glyph_width as f32, desc.glyph_height as f32);
        let mut font = Font::new(name, DistanceFieldType::Standard, vec![page], w, h);
        for row in 0..rows {
            for col in 0..columns {
                let Some(ch) = row
                    .checked_mul(desc.columns)
                    .and_then(|start| start.checked_add(col))
                    .and_then(char::from_u32)
                else {
                    continue;
                };
                font.insert_glyph(
                    ch,
                    Glyph {
                        page: 0,
                        region: PixelRect::new(
                            pad + col * step_x,
                            pad + row * step_y,
                            desc.glyph_width,
                            desc.glyph_height,
                        ),
                        offset_x: 0.0,
                        offset_y: 0.0,
                        x_advance: w,
                    },
                );
            }
        }
        if let Some(solid) = char::from_u32(desc.solid_glyph_index).filter(|c| font.has_glyph(*c)) {
            font.solid_block = solid;
        }
        detect_mono(&mut font);
        font
    }
}

impl FontLoader for SadConsoleLoader {
    fn format(&self) -> FontFormat {
        FontFormat::SadConsole
    }

    fn load(&self, name: &str, distance_field: DistanceFieldType, assets: &AssetSource) -> Result<Font> {
        if !self.supports(distance_field) {
            return Err(FontError::UnsupportedVariant {
                name: name.to_string(),
                variant: distance_field,
            });
        }
        let (path, text) = assets.read_to_string(&format!("{}.font", asset_stem(name, distance_field)))?;
        let desc = SadConsoleDescription::parse(&text, &path)?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let page = Arc::new(Texture::from_file(dir.join(&desc.file_path))?);
        Ok(self.build(name, &desc, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"Name": "IBM 8x16", "FilePath": "IBM-8x16-standard.png",
        "GlyphHeight": 16, "GlyphPadding": 0, "GlyphWidth": 8, "SolidGlyphIndex": 219, "Columns": 16}"#;

    #[test]
    fn test_grid_maps_index_to_codepoint() {
        let desc = SadConsoleDescription::parse(SAMPLE, Path::new("ibm.font")).unwrap();
        let page = Arc::new(Texture::from_image("p", image::RgbaImage::new(128, 256)).unwrap());
        let font = SadConsoleLoader.build("IBM 8x16", &desc, page);

        assert_eq!(font.glyph_count(), 256);
        assert_eq!(font.glyph('A').unwrap().region, PixelRect::new(8, 64, 8, 16));
        assert_eq!(font.solid_block(), '\u{DB}');
        assert!(font.is_mono());
    }

    #[test]
    fn test_padding() {
        let text = SAMPLE.replace("\"GlyphPadding\": 0", "\"GlyphPadding\": 1");
        let desc = SadConsoleDescription::parse(&text, Path::new("ibm.font")).unwrap();
        let page = Arc::new(Texture::from_image("p", image::RgbaImage::new(145, 289)).unwrap());
        let font = SadConsoleLoader.build("IBM 8x16", &desc, page);
        assert_eq!(font.glyph_count(), 256);
        assert_eq!(font.glyph('\u{1}').unwrap().region, PixelRect::new(10, 1, 8, 16));
    }

    #[test]
    fn test_huge_column_count_skips_unreachable_rows() {
        let text = SAMPLE.replace("\"Columns\": 16", "\"Columns\": 4294967295");
        let desc = SadConsoleDescription::parse(&text, Path::new("ibm.font")).unwrap();
        let page = Arc::new(Texture::from_image("p", image::RgbaImage::new(16, 32)).unwrap());
        let font = SadConsoleLoader.build("IBM 8x16", &desc, page);
        assert_eq!(font.glyph_count(), 2);
        assert!(font.has_glyph('\u{1}'));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let text = SAMPLE.replace("\"Columns\": 16", "\"Columns\": 0");
        assert!(SadConsoleDescription::parse(&text, Path::new("ibm.font")).is_err());
    }
}
