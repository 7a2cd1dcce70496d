//! AngelCode BMFont text format.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use horizon_textra_core::logging::targets;
use horizon_textra_render::{PixelRect, Texture};

use super::{FontFormat, FontLoader, asset_stem, detect_mono};
use crate::assets::AssetSource;
use crate::distance_field::DistanceFieldType;
use crate::error::{FontError, Result};
use crate::font::Font;
use crate::glyph::Glyph;

/// One `tag key=value ...` line.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    tag: String,
    values: HashMap<String, String>,
}

/// Split a line into whitespace-separated words, keeping quoted runs whole.
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn parse_entry(line: &str) -> Option<Entry> {
    let mut words = split_words(line).into_iter();
    let tag = words.next()?;
    let values = words
        .filter_map(|w| w.split_once('=').map(|(k, v)| (k.to_string(), v.to_string())))
        .collect();
    Some(Entry { tag, values })
}

impl Entry {
    fn int(&self, key: &str, path: &Path, line: usize) -> Result<i64> {
        let raw = self
            .values
            .get(key)
            .ok_or_else(|| FontError::parse(path, Some(line), format!("'{}' is missing '{key}'", self.tag)))?;
        raw.parse().map_err(|_| {
            FontError::parse(path, Some(line), format!("'{key}={raw}' is not an integer"))
        })
    }

    fn int_or(&self, key: &str, default: i64, path: &Path, line: usize) -> Result<i64> {
        if self.values.contains_key(key) {
            self.int(key, path, line)
        } else {
            Ok(default)
        }
    }
}

/// Parsed `.fnt` contents before page images are attached.
#[derive(Debug, Clone, Default)]
pub struct BmFontDescription {
    pub line_height: f32,
    pub base: f32,
    pub page_files: Vec<String>,
    pub glyphs: Vec<(char, Glyph)>,
    pub kerning: Vec<(char, char, f32)>,
}

/// Parse BMFont text.
pub fn parse_description(text: &str, path: &Path) -> Result<BmFontDescription> {
    let mut desc = BmFontDescription::default();
    let mut saw_common = false;
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let Some(entry) = parse_entry(line) else {
            continue;
        };
        match entry.tag.as_str() {
            "common" => {
                desc.line_height = entry.int("lineHeight", path, line_no)? as f32;
                desc.base = entry.int("base", path, line_no)? as f32;
                saw_common = true;
            }
            "page" => {
                let id = entry.int("id", path, line_no)? as usize;
                let file = entry
                    .values
                    .get("file")
                    .cloned()
                    .ok_or_else(|| FontError::parse(path, Some(line_no), "page has no file"))?;
                if desc.page_files.len() <= id {
                    desc.page_files.resize(id + 1, String::new());
                }
                desc.page_files[id] = file;
            }
            "char" => {
                if !saw_common {
                    return Err(FontError::parse(path, Some(line_no), "'char' before 'common'"));
                }
                let id = entry.int("id", path, line_no)?;
                let ch = u32::try_from(id)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| FontError::parse(path, Some(line_no), format!("invalid char id {id}")))?;
                let width = entry.int("width", path, line_no)?.max(0) as u32;
                let height = entry.int("height", path, line_no)?.max(0) as u32;
                let yoffset = entry.int_or("yoffset", 0, path, line_no)? as f32;
                let glyph = Glyph {
                    page: entry.int_or("page", 0, path, line_no)?.max(0) as usize,
                    region: PixelRect::new(
                        entry.int("x", path, line_no)?.max(0) as u32,
                        entry.int("y", path, line_no)?.max(0) as u32,
                        width,
                        height,
                    ),
                    offset_x: entry.int_or("xoffset", 0, path, line_no)? as f32,
                    // BMFont measures down from the top of the line.
                    offset_y: desc.base - yoffset - height as f32,
                    x_advance: entry.int("xadvance", path, line_no)? as f32,
                };
                desc.glyphs.push((ch, glyph));
            }
            "kerning" => {
                let first = entry.int("first", path, line_no)?;
                let second = entry.int("second", path, line_no)?;
                let amount = entry.int("amount", path, line_no)? as f32;
                let pair = (
                    u32::try_from(first).ok().and_then(char::from_u32),
                    u32::try_from(second).ok().and_then(char::from_u32),
                );
                if let (Some(a), Some(b)) = pair {
                    desc.kerning.push((a, b, amount));
                }
            }
            "info" | "chars" | "kernings" => {}
            other => {
                tracing::warn!(
                    target: targets::FONT,
                    path = %path.display(),
                    line = line_no,
                    tag = other,
                    "unknown BMFont line"
                );
            }
        }
    }
    if !saw_common {
        return Err(FontError::parse(path, None, "missing 'common' line"));
    }
    if desc.page_files.is_empty() || desc.page_files.iter().any(String::is_empty) {
        return Err(FontError::parse(path, None, "missing 'page' line"));
    }
    Ok(desc)
}

/// Reads `<stem>.fnt` and the pages it names.
#[derive(Debug, Default, Clone, Copy)]
pub struct BmFontLoader;

impl BmFontLoader {
    /// Build a font from a parsed description and its loaded pages.
    pub fn build(
        &self,
        name: &str,
        desc: BmFontDescription,
        pages: Vec<Arc<Texture>>,
        path: &Path,
    ) -> Result<Font> {
        let mut font = Font::new(name, DistanceFieldType::Standard, pages, 0.0, desc.line_height);
        font.descent = desc.base - desc.line_height;
        let mut max_advance: f32 = 0.0;
        for (ch, glyph) in desc.glyphs {
            let Some(page) = font.pages.get(glyph.page) else {
                return Err(FontError::parse(
                    path,
                    None,
                    format!("glyph '{ch}' uses missing page {}", glyph.page),
                ));
            };
            if !glyph.region.fits_within(page.width(), page.height()) {
                return Err(FontError::parse(
                    path,
                    None,
                    format!("glyph '{ch}' lies outside page {}", glyph.page),
                ));
            }
            max_advance = max_advance.max(glyph.x_advance);
            font.insert_glyph(ch, glyph);
        }
        for (a, b, amount) in desc.kerning {
            font.insert_kerning(a, b, amount);
        }
        font.cell_width = max_advance;
        font.original_cell_width = max_advance;
        detect_mono(&mut font);
        Ok(font)
    }
}

impl FontLoader for BmFontLoader {
    fn format(&self) -> FontFormat {
        FontFormat::BmFont
    }

    fn load(&self, name: &str, distance_field: DistanceFieldType, assets: &AssetSource) -> Result<Font> {
        if !self.supports(distance_field) {
            return Err(FontError::UnsupportedVariant {
                name: name.to_string(),
                variant: distance_field,
            });
        }
        let (path, text) = assets.read_to_string(&format!("{}.fnt", asset_stem(name, distance_field)))?;
        let desc = parse_description(&text, &path)?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let pages = desc
            .page_files
            .iter()
            .map(|file| Texture::from_file(dir.join(file)).map(Arc::new))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.build(name, desc, pages, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"info face="Tiny Font" size=12 bold=0 italic=0 padding=0,0,0,0
common lineHeight=12 base=10 scaleW=32 scaleH=32 pages=1 packed=0
page id=0 file="Tiny-standard.png"
chars count=2
char id=65 x=0 y=0 width=6 height=8 xoffset=0 yoffset=2 xadvance=7 page=0 chnl=15
char id=66 x=6 y=0 width=6 height=8 xoffset=1 yoffset=2 xadvance=7 page=0 chnl=15
kernings count=1
kerning first=65 second=66 amount=-1
"#;

    #[test]
    fn test_split_words_keeps_quotes() {
        assert_eq!(
            split_words(r#"info face="Tiny Font" size=12"#),
            vec!["info", "face=Tiny Font", "size=12"]
        );
    }

    #[test]
    fn test_parse_description() {
        let desc = parse_description(SAMPLE, Path::new("tiny.fnt")).unwrap();
        assert_eq!(desc.line_height, 12.0);
        assert_eq!(desc.page_files, vec!["Tiny-standard.png"]);
        assert_eq!(desc.glyphs.len(), 2);
        let (ch, a) = &desc.glyphs[0];
        assert_eq!(*ch, 'A');
        assert_eq!(a.offset_y, 0.0);
        assert_eq!(a.region, PixelRect::new(0, 0, 6, 8));
        assert_eq!(desc.kerning, vec![('A', 'B', -1.0)]);
    }

    #[test]
    fn test_build_font() {
        let desc = parse_description(SAMPLE, Path::new("tiny.fnt")).unwrap();
        let page = Arc::new(Texture::from_image("p", image::RgbaImage::new(32, 32)).unwrap());
        let font = BmFontLoader
            .build("Tiny", desc, vec![page], Path::new("tiny.fnt"))
            .unwrap();
        assert_eq!(font.descent(), -2.0);
        assert_eq!(font.cell_width(), 7.0);
        assert!(font.is_mono());
        assert_eq!(font.measure("AB"), 13.0);
    }

    #[test]
    fn test_bad_integer_reports_line() {
        let text = SAMPLE.replace("x=6", "x=six");
        let err = parse_description(&text, Path::new("tiny.fnt")).unwrap_err();
        assert!(err.to_string().contains("line 6"), "{err}");
    }

    #[test]
    fn test_missing_common() {
        let err = parse_description("page id=0 file=\"a.png\"\n", Path::new("a.fnt")).unwrap_err();
        assert!(matches!(err, FontError::Parse { line: None, .. }));
    }

    #[test]
    fn test_glyph_outside_page() {
        let desc = parse_description(SAMPLE, Path::new("tiny.fnt")).unwrap();
        let page = Arc::new(Texture::from_image("p", image::RgbaImage::new(8, 8)).unwrap());
        assert!(BmFontLoader.build("Tiny", desc, vec![page], Path::new("tiny.fnt")).is_err());
    }
}
