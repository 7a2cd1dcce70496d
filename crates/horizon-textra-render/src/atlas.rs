//! Texture atlas (`.atlas`) files.
//!
//! An atlas file describes one or more texture pages and the named regions
//! packed into each page. Emoji and icon sets ship as an `.atlas` file plus
//! one `.png` per page.
//!
//! ```text
//!
//! twemoji.png
//! size: 2048, 2048
//! format: RGBA8888
//! filter: Linear, Linear
//! repeat: none
//! grinning face
//!   bounds: 2, 2, 32, 32
//!   offsets: 0, 0, 32, 32
//!   index: -1
//! ```
//!
//! Lines containing a `:` are fields; any other non-blank line starts a page
//! (directly after a blank line or at the start) or a region. Both the older
//! `xy`/`size`/`orig`/`offset` fields and the newer `bounds`/`offsets` fields
//! are accepted. Each field is parsed into a [`PageField`] or [`RegionField`]
//! variant chosen by its key.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{RenderError, RenderResult};
use crate::texture::{FilterPair, Texture, TextureFilter};
use crate::types::PixelRect;

/// A field of a page header.
#[derive(Debug, Clone, PartialEq)]
pub enum PageField {
    Size(u32, u32),
    Format(String),
    Filter(FilterPair),
    Repeat(String),
    Pma(bool),
    /// A key this parser does not interpret; kept for round-tripping.
    Other(String, Vec<String>),
}

/// A field of a region entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionField {
    Xy(u32, u32),
    Size(u32, u32),
    Bounds(PixelRect),
    Offset(f32, f32),
    Orig(u32, u32),
    /// offset x, offset y, original width, original height
    Offsets(f32, f32, u32, u32),
    /// Rotation in degrees; `true` means 90.
    Rotate(i32),
    Index(i32),
    Split([i32; 4]),
    Pad([i32; 4]),
    Other(String, Vec<String>),
}

fn ints<T: std::str::FromStr>(values: &[String], want: usize) -> Result<Vec<T>, String> {
    if values.len() < want {
        return Err(format!("expected {want} values, found {}", values.len()));
    }
    values[..want]
        .iter()
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| format!("'{v}' is not a valid number"))
        })
        .collect()
}

fn parse_bool(value: Option<&String>) -> Result<bool, String> {
    match value.map(|v| v.to_ascii_lowercase()) {
        Some(v) if v == "true" => Ok(true),
        Some(v) if v == "false" => Ok(false),
        Some(v) => Err(format!("'{v}' is not a boolean")),
        None => Err("missing value".into()),
    }
}

impl PageField {
    /// Interpret one `key: values` entry of a page header.
    pub fn parse(key: &str, values: &[String]) -> Result<Self, String> {
        Ok(match key {
            "size" => {
                let v = ints::<u32>(values, 2)?;
                Self::Size(v[0], v[1])
            }
            "format" => Self::Format(values.first().cloned().unwrap_or_default()),
            "filter" => {
                let min = values
                    .first()
                    .ok_or("missing filter")?
                    .parse::<TextureFilter>()?;
                let mag = match values.get(1) {
                    Some(v) => v.parse::<TextureFilter>()?,
                    None => min,
                };
                Self::Filter(FilterPair { min, mag })
            }
            "repeat" => Self::Repeat(values.first().cloned().unwrap_or_default()),
            "pma" => Self::Pma(parse_bool(values.first())?),
            other => Self::Other(other.to_string(), values.to_vec()),
        })
    }
}

impl RegionField {
    /// Interpret one `key: values` entry of a region.
    pub fn parse(key: &str, values: &[String]) -> Result<Self, String> {
        Ok(match key {
            "xy" => {
                let v = ints::<u32>(values, 2)?;
                Self::Xy(v[0], v[1])
            }
            "size" => {
                let v = ints::<u32>(values, 2)?;
                Self::Size(v[0], v[1])
            }
            "bounds" => {
                let v = ints::<u32>(values, 4)?;
                Self::Bounds(PixelRect::new(v[0], v[1], v[2], v[3]))
            }
            "offset" => {
                let v = ints::<f32>(values, 2)?;
                Self::Offset(v[0], v[1])
            }
            "orig" => {
                let v = ints::<u32>(values, 2)?;
                Self::Orig(v[0], v[1])
            }
            "offsets" => {
                let offs = ints::<f32>(values, 2)?;
                let orig = ints::<u32>(&values[2.min(values.len())..], 2)?;
                Self::Offsets(offs[0], offs[1], orig[0], orig[1])
            }
            "rotate" => match values.first().map(String::as_str) {
                Some("true") => Self::Rotate(90),
                Some("false") => Self::Rotate(0),
                _ => Self::Rotate(ints::<i32>(values, 1)?[0]),
            },
            "index" => Self::Index(ints::<i32>(values, 1)?[0]),
            "split" => {
                let v = ints::<i32>(values, 4)?;
                Self::Split([v[0], v[1], v[2], v[3]])
            }
            "pad" => {
                let v = ints::<i32>(values, 4)?;
                Self::Pad([v[0], v[1], v[2], v[3]])
            }
            other => Self::Other(other.to_string(), values.to_vec()),
        })
    }
}

/// One texture page of an atlas.
#[derive(Debug, Clone, Default)]
pub struct AtlasPage {
    /// Image file name, relative to the atlas file.
    pub file: String,
    /// Declared page size, if present.
    pub size: Option<(u32, u32)>,
    pub format: Option<String>,
    pub filter: FilterPair,
    pub repeat: Option<String>,
    pub pma: bool,
    /// The decoded page, once loaded.
    pub texture: Option<Arc<Texture>>,
}

impl AtlasPage {
    fn apply(&mut self, field: PageField) {
        match field {
            PageField::Size(w, h) => self.size = Some((w, h)),
            PageField::Format(f) => self.format = Some(f),
            PageField::Filter(f) => self.filter = f,
            PageField::Repeat(r) => self.repeat = Some(r),
            PageField::Pma(p) => self.pma = p,
            PageField::Other(key, _) => {
                tracing::warn!(target: "horizon_textra_render", key = %key, "unknown atlas page field");
            }
        }
    }

    /// Effective page dimensions: the loaded texture's, else the declared size.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.texture
            .as_ref()
            .map(|t| (t.width(), t.height()))
            .or(self.size)
    }
}

/// A named rectangle inside an atlas page.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasRegion {
    pub name: String,
    /// Index into [`TextureAtlas::pages`].
    pub page: usize,
    pub bounds: PixelRect,
    /// Whitespace stripped from the left when packed.
    pub offset_x: f32,
    /// Whitespace stripped from the bottom when packed.
    pub offset_y: f32,
    pub original_width: u32,
    pub original_height: u32,
    pub degrees: i32,
    pub index: i32,
    pub splits: Option<[i32; 4]>,
    pub pads: Option<[i32; 4]>,
    /// Fields without a dedicated variant.
    pub extra: Vec<(String, Vec<String>)>,
}

impl AtlasRegion {
    fn new(name: String, page: usize) -> Self {
        Self {
            name,
            page,
            bounds: PixelRect::default(),
            offset_x: 0.0,
            offset_y: 0.0,
            original_width: 0,
            original_height: 0,
            degrees: 0,
            index: -1,
            splits: None,
            pads: None,
            extra: Vec::new(),
        }
    }

    fn apply(&mut self, field: RegionField) {
        match field {
            RegionField::Xy(x, y) => {
                self.bounds.x = x;
                self.bounds.y = y;
            }
            RegionField::Size(w, h) => {
                self.bounds.width = w;
                self.bounds.height = h;
            }
            RegionField::Bounds(b) => self.bounds = b,
            RegionField::Offset(x, y) => {
                self.offset_x = x;
                self.offset_y = y;
            }
            RegionField::Orig(w, h) => {
                self.original_width = w;
                self.original_height = h;
            }
            RegionField::Offsets(x, y, w, h) => {
                self.offset_x = x;
                self.offset_y = y;
                self.original_width = w;
                self.original_height = h;
            }
            RegionField::Rotate(d) => self.degrees = d,
            RegionField::Index(i) => self.index = i,
            RegionField::Split(s) => self.splits = Some(s),
            RegionField::Pad(p) => self.pads = Some(p),
            RegionField::Other(key, values) => self.extra.push((key, values)),
        }
    }

    /// Whether the region is stored rotated in its page.
    pub fn is_rotated(&self) -> bool {
        self.degrees != 0
    }

    fn finish(&mut self) {
        if self.original_width == 0 && self.original_height == 0 {
            self.original_width = self.bounds.width;
            self.original_height = self.bounds.height;
        }
    }
}

/// A parsed texture atlas.
#[derive(Debug, Clone, Default)]
pub struct TextureAtlas {
    pages: Vec<AtlasPage>,
    regions: Vec<AtlasRegion>,
    source: Option<PathBuf>,
}

fn split_entry(line: &str) -> Option<(String, Vec<String>)> {
    let (key, rest) = line.trim().split_once(':')?;
    let values = rest
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    Some((key.trim().to_string(), values))
}

impl TextureAtlas {
    /// Parse atlas text without loading any page images.
    ///
    /// `path` is only used for error messages.
    pub fn parse(text: &str, path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut atlas = TextureAtlas {
            source: Some(path.to_path_buf()),
            ..Default::default()
        };
        let mut page: Option<usize> = None;
        let mut region: Option<AtlasRegion> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            if raw.trim().is_empty() {
                if let Some(mut r) = region.take() {
                    r.finish();
                    atlas.regions.push(r);
                }
                page = None;
                continue;
            }

            match (split_entry(raw), page) {
                (None, None) => {
                    atlas.pages.push(AtlasPage {
                        file: raw.trim().to_string(),
                        ..Default::default()
                    });
                    page = Some(atlas.pages.len() - 1);
                }
                (None, Some(page_idx)) => {
                    if let Some(mut r) = region.take() {
                        r.finish();
                        atlas.regions.push(r);
                    }
                    region = Some(AtlasRegion::new(raw.trim().to_string(), page_idx));
                }
                (Some((key, values)), Some(page_idx)) => match region.as_mut() {
                    Some(r) => {
                        let field = RegionField::parse(&key, &values)
                            .map_err(|msg| RenderError::atlas_parse(path, line_no, msg))?;
                        r.apply(field);
                    }
                    None => {
                        let field = PageField::parse(&key, &values)
                            .map_err(|msg| RenderError::atlas_parse(path, line_no, msg))?;
                        atlas.pages[page_idx].apply(field);
                    }
                },
                (Some((key, _)), None) => {
                    return Err(RenderError::atlas_parse(
                        path,
                        line_no,
                        format!("field '{key}' appears before any page"),
                    ));
                }
            }
        }
        if let Some(mut r) = region.take() {
            r.finish();
            atlas.regions.push(r);
        }

        tracing::debug!(
            target: "horizon_textra_render",
            path = %path.display(),
            pages = atlas.pages.len(),
            regions = atlas.regions.len(),
            "atlas parsed"
        );
        Ok(atlas)
    }

    /// Read an atlas file as UTF-8, parse it, and load every page image from
    /// the atlas file's directory.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::load_with_page_dir(path, dir)
    }

    /// Like [`load`](Self::load), but page images are read from `page_dir`.
    pub fn load_with_page_dir(
        path: impl AsRef<Path>,
        page_dir: impl AsRef<Path>,
    ) -> RenderResult<Self> {
        let path = path.as_ref();
        let page_dir = page_dir.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
        let mut atlas = Self::parse(&text, path)?;
        for page in &mut atlas.pages {
            let texture = Texture::from_file(page_dir.join(&page.file))?;
            texture.set_filter(page.filter);
            page.texture = Some(Arc::new(texture));
        }
        atlas.validate()?;
        Ok(atlas)
    }

    /// Check every region against its page dimensions.
    pub fn validate(&self) -> RenderResult<()> {
        for region in &self.regions {
            let Some((w, h)) = self.pages.get(region.page).and_then(AtlasPage::dimensions) else {
                continue;
            };
            if !region.bounds.fits_within(w, h) {
                return Err(RenderError::RegionOutOfBounds {
                    path: self.source.clone().unwrap_or_default(),
                    name: region.name.clone(),
                    page_width: w,
                    page_height: h,
                });
            }
        }
        Ok(())
    }

    /// All pages.
    pub fn pages(&self) -> &[AtlasPage] {
        &self.pages
    }

    /// All regions in file order.
    pub fn regions(&self) -> &[AtlasRegion] {
        &self.regions
    }

    /// The first region with this exact name.
    pub fn find_region(&self, name: &str) -> Option<&AtlasRegion> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// The texture backing a region, if pages are loaded.
    pub fn region_texture(&self, region: &AtlasRegion) -> Option<&Arc<Texture>> {
        self.pages.get(region.page)?.texture.as_ref()
    }

    /// The file this atlas was parsed from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Dispose every loaded page texture.
    pub fn dispose(&self) {
        for texture in self.pages.iter().filter_map(|p| p.texture.as_ref()) {
            texture.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_FORMAT: &str = "
icons.png
size: 64, 32
format: RGBA8888
filter: Linear, Linear
repeat: none
pma: false
heart
  bounds: 0, 0, 16, 16
  offsets: 1, 2, 18, 18
  rotate: false
  index: -1
star
  bounds: 16, 0, 16, 16
  index: 3
  split: 1, 2, 3, 4
";

    const OLD_FORMAT: &str = "icons.png
size: 64,32
format: RGBA8888
filter: Nearest,Nearest
repeat: none
heart
  rotate: true
  xy: 0, 0
  size: 16, 16
  orig: 16, 16
  offset: 0, 0
  index: -1
";

    #[test]
    fn test_parse_new_format() {
        let atlas = TextureAtlas::parse(NEW_FORMAT, "icons.atlas").unwrap();
        assert_eq!(atlas.pages().len(), 1);
        let page = &atlas.pages()[0];
        assert_eq!(page.file, "icons.png");
        assert_eq!(page.size, Some((64, 32)));
        assert_eq!(page.filter, FilterPair::LINEAR);
        assert!(!page.pma);

        assert_eq!(atlas.regions().len(), 2);
        let heart = atlas.find_region("heart").unwrap();
        assert_eq!(heart.bounds, PixelRect::new(0, 0, 16, 16));
        assert_eq!((heart.offset_x, heart.offset_y), (1.0, 2.0));
        assert_eq!((heart.original_width, heart.original_height), (18, 18));

        let star = atlas.find_region("star").unwrap();
        assert_eq!(star.index, 3);
        assert_eq!(star.splits, Some([1, 2, 3, 4]));
        assert_eq!((star.original_width, star.original_height), (16, 16));
        atlas.validate().unwrap();
    }

    #[test]
    fn test_parse_old_format() {
        let atlas = TextureAtlas::parse(OLD_FORMAT, "icons.atlas").unwrap();
        assert_eq!(atlas.pages()[0].filter.min, TextureFilter::Nearest);
        let heart = atlas.find_region("heart").unwrap();
        assert!(heart.is_rotated());
        assert_eq!(heart.degrees, 90);
        assert_eq!(heart.bounds, PixelRect::new(0, 0, 16, 16));
    }

    #[test]
    fn test_multiple_pages() {
        let text = "a.png\nsize: 8, 8\none\n  bounds: 0, 0, 8, 8\n\nb.png\nsize: 8, 8\ntwo\n  bounds: 0, 0, 4, 4\n";
        let atlas = TextureAtlas::parse(text, "multi.atlas").unwrap();
        assert_eq!(atlas.pages().len(), 2);
        assert_eq!(atlas.find_region("one").unwrap().page, 0);
        assert_eq!(atlas.find_region("two").unwrap().page, 1);
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let text = "a.png\nsize: 8, 8\none\n  bounds: 0, 0, 8, 8\n  color: red\n";
        let atlas = TextureAtlas::parse(text, "extra.atlas").unwrap();
        let one = atlas.find_region("one").unwrap();
        assert_eq!(one.extra, vec![("color".to_string(), vec!["red".to_string()])]);
    }

    #[test]
    fn test_bad_number_reports_path_and_line() {
        let text = "a.png\nsize: 8, 8\none\n  bounds: 0, zero, 8, 8\n";
        let err = TextureAtlas::parse(text, "broken.atlas").unwrap_err();
        match err {
            RenderError::AtlasParse { path, line, .. } => {
                assert_eq!(path, PathBuf::from("broken.atlas"));
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_region_out_of_bounds() {
        let text = "a.png\nsize: 8, 8\nwide\n  bounds: 4, 0, 8, 8\n";
        let atlas = TextureAtlas::parse(text, "oob.atlas").unwrap();
        assert!(matches!(
            atlas.validate(),
            Err(RenderError::RegionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_overflowing_bounds_are_out_of_bounds() {
        let text = "a.png\nsize: 8, 8\nhuge\n  bounds: 4294967295, 0, 8, 8\n";
        let atlas = TextureAtlas::parse(text, "huge.atlas").unwrap();
        match atlas.validate() {
            Err(RenderError::RegionOutOfBounds { path, name, .. }) => {
                assert_eq!(path, PathBuf::from("huge.atlas"));
                assert_eq!(name, "huge");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_load_with_separate_page_dir() {
        let atlas_dir = tempfile::tempdir().unwrap();
        let page_dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(64, 32)
            .save(page_dir.path().join("icons.png"))
            .unwrap();
        std::fs::write(atlas_dir.path().join("icons.atlas"), NEW_FORMAT).unwrap();

        assert!(matches!(
            TextureAtlas::load(atlas_dir.path().join("icons.atlas")),
            Err(RenderError::Io { .. })
        ));
        let atlas =
            TextureAtlas::load_with_page_dir(atlas_dir.path().join("icons.atlas"), page_dir.path())
                .unwrap();
        assert!(atlas.pages()[0].texture.is_some());
    }

    #[test]
    fn test_load_reads_pages() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(64, 32)
            .save(dir.path().join("icons.png"))
            .unwrap();
        std::fs::write(dir.path().join("icons.atlas"), NEW_FORMAT).unwrap();

        let atlas = TextureAtlas::load(dir.path().join("icons.atlas")).unwrap();
        let heart = atlas.find_region("heart").unwrap();
        let texture = atlas.region_texture(heart).unwrap();
        assert_eq!(texture.filter(), FilterPair::LINEAR);

        atlas.dispose();
        assert!(texture.is_disposed());
    }
}
