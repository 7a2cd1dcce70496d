//! msdf-atlas-gen structured JSON fonts.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use flate2::read::GzDecoder;
use horizon_textra_core::logging::targets;
use horizon_textra_render::{PixelRect, Texture};
use serde::Deserialize;

use super::{FontFormat, FontLoader, asset_stem, detect_mono};
use crate::assets::AssetSource;
use crate::distance_field::DistanceFieldType;
use crate::error::{FontError, Result};
use crate::font::{Font, LineMetrics};
use crate::glyph::Glyph;

#[derive(Debug, Deserialize)]
struct StructuredFile {
    atlas: AtlasInfo,
    metrics: MetricsInfo,
    glyphs: Vec<GlyphInfo>,
    #[serde(default)]
    kerning: Vec<KerningInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AtlasInfo {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    distance_range: f32,
    size: f32,
    width: u32,
    height: u32,
    #[serde(default = "default_y_origin")]
    y_origin: String,
}

fn default_y_origin() -> String {
    "bottom".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetricsInfo {
    #[serde(default = "one")]
    em_size: f32,
    line_height: f32,
    #[serde(default)]
    ascender: f32,
    #[serde(default)]
    descender: f32,
    #[serde(default)]
    underline_y: f32,
    #[serde(default)]
    underline_thickness: f32,
}

fn one() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlyphInfo {
    unicode: u32,
    advance: f32,
    plane_bounds: Option<Bounds>,
    atlas_bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Bounds {
    left: f32,
    bottom: f32,
    right: f32,
    top: f32,
}

#[derive(Debug, Deserialize)]
struct KerningInfo {
    unicode1: u32,
    unicode2: u32,
    advance: f32,
}

/// Reads `<stem>.dat` (gzip-compressed JSON) or `<stem>.json`, plus
/// `<stem>.png`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredLoader;

impl StructuredLoader {
    fn read_description(&self, stem: &str, assets: &AssetSource) -> Result<(std::path::PathBuf, String)> {
        match assets.resolve(&format!("{stem}.dat")) {
            Ok(path) => {
                let file = std::fs::File::open(&path).map_err(|e| FontError::io(&path, e))?;
                let mut text = String::new();
                GzDecoder::new(file)
                    .read_to_string(&mut text)
                    .map_err(|e| FontError::io(&path, e))?;
                Ok((path, text))
            }
            Err(err) if err.is_missing_asset() => assets.read_to_string(&format!("{stem}.json")),
            Err(err) => Err(err),
        }
    }

    /// Build a font from JSON text and an already-loaded page.
    pub fn parse(
        &self,
        name: &str,
        distance_field: DistanceFieldType,
        text: &str,
        path: &Path,
        page: Arc<Texture>,
    ) -> Result<Font> {
        let file: StructuredFile = serde_json::from_str(text).map_err(|source| FontError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if file.glyphs.is_empty() {
            return Err(FontError::parse(path, None, "font has no glyphs"));
        }
        let kind_is_field = matches!(file.atlas.kind.as_str(), "sdf" | "psdf" | "msdf" | "mtsdf");
        if kind_is_field != distance_field.is_distance_field() {
            tracing::warn!(
                target: targets::FONT,
                font = name,
                atlas_type = %file.atlas.kind,
                requested = %distance_field,
                "atlas type does not match requested variant"
            );
        }

        let size = file.atlas.size;
        let metrics = &file.metrics;
        let em = if metrics.em_size > 0.0 { metrics.em_size } else { 1.0 };
        let line_height = metrics.line_height * size / em;
        let flip = file.atlas.y_origin.eq_ignore_ascii_case("bottom");

        let mut font = Font::new(name, distance_field, vec![page], 0.0, line_height);
        font.distance_range = file.atlas.distance_range;
        font.descent = metrics.descender * size / em;

        let mut max_advance: f32 = 0.0;
        for info in &file.glyphs {
            let Some(ch) = char::from_u32(info.unicode) else {
                return Err(FontError::parse(
                    path,
                    None,
                    format!("invalid codepoint {}", info.unicode),
                ));
            };
            let x_advance = info.advance * size / em;
            max_advance = max_advance.max(x_advance);
            let glyph = match (info.plane_bounds, info.atlas_bounds) {
                (Some(plane), Some(atlas)) => {
                    let top = if flip {
                        file.atlas.height as f32 - atlas.top
                    } else {
                        atlas.top.min(atlas.bottom)
                    };
                    Glyph {
                        page: 0,
                        region: PixelRect::new(
                            atlas.left.max(0.0) as u32,
                            top.max(0.0) as u32,
                            (atlas.right - atlas.left).abs().round() as u32,
                            (atlas.top - atlas.bottom).abs().round() as u32,
                        ),
                        offset_x: plane.left * size / em,
                        offset_y: plane.bottom * size / em,
                        x_advance,
                    }
                }
                _ => Glyph::blank(x_advance),
            };
            if !glyph.region.fits_within(file.atlas.width, file.atlas.height) {
                return Err(FontError::parse(
                    path,
                    None,
                    format!("glyph U+{:04X} lies outside the atlas", info.unicode),
                ));
            }
            font.insert_glyph(ch, glyph);
        }
        font.cell_width = max_advance;
        font.original_cell_width = max_advance;

        for pair in &file.kerning {
            match (char::from_u32(pair.unicode1), char::from_u32(pair.unicode2)) {
                (Some(a), Some(b)) if font.has_glyph(a) && font.has_glyph(b) => {
                    font.insert_kerning(a, b, pair.advance * size / em);
                }
                _ => tracing::warn!(
                    target: targets::FONT,
                    font = name,
                    first = pair.unicode1,
                    second = pair.unicode2,
                    "kerning pair refers to a missing glyph"
                ),
            }
        }

        if metrics.line_height > 0.0 {
            font.underline = LineMetrics {
                x: 0.0,
                y: metrics.underline_y / metrics.line_height,
                length: 0.0,
                breadth: metrics.underline_thickness / metrics.line_height,
            };
            font.strikethrough.y = metrics.ascender * 0.5 / metrics.line_height;
        }
        detect_mono(&mut font);
        Ok(font)
    }
}

impl FontLoader for StructuredLoader {
    fn format(&self) -> FontFormat {
        FontFormat::Structured
    }

    fn load(&self, name: &str, distance_field: DistanceFieldType, assets: &AssetSource) -> Result<Font> {
        let stem = asset_stem(name, distance_field);
        let (path, text) = self.read_description(&stem, assets)?;
        let png = assets.resolve(&format!("{stem}.png"))?;
        let page = Arc::new(Texture::from_file(png)?);
        self.parse(name, distance_field, &text, &path, page)
    }
}
