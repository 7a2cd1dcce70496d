//! The configured font object.
//!
//! A [`Font`] is a glyph table over one or more shared texture pages plus the
//! metrics markup rendering needs: cell size, scale, descent, underline and
//! strikethrough placement, inline-image placement, sampling filter and
//! distance-field settings. Fonts are cheap to clone; pages are shared through
//! `Arc` and everything else is copied, so a clone can be re-tuned freely.

use std::collections::HashMap;
use std::sync::Arc;

use horizon_textra_render::{FilterPair, Texture};

use crate::distance_field::DistanceFieldType;
use crate::family::FontFamily;
use crate::glyph::Glyph;

/// First codepoint handed out to atlas glyphs.
pub const PRIVATE_USE_START: u32 = 0xE000;
/// Last codepoint of the Basic Multilingual Plane private-use area.
pub const PRIVATE_USE_END: u32 = 0xF8FF;

/// Placement of a decoration line, in fractions of the cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineMetrics {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub breadth: f32,
}

/// Adjustments applied when drawing inline images such as emoji.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InlineImageMetrics {
    pub offset_x: f32,
    pub offset_y: f32,
    pub x_advance: f32,
}

/// A configured bitmap or distance-field font.
#[derive(Debug, Clone)]
pub struct Font {
    pub(crate) name: String,
    pub(crate) distance_field: DistanceFieldType,
    pub(crate) pages: Vec<Arc<Texture>>,
    pub(crate) glyphs: HashMap<char, Glyph>,
    pub(crate) kerning: HashMap<(char, char), f32>,
    /// Lower-cased inline image names to their codepoints.
    pub(crate) name_lookup: HashMap<String, char>,
    pub(crate) names_by_char: HashMap<char, String>,
    pub(crate) next_private_use: u32,
    pub(crate) cell_width: f32,
    pub(crate) cell_height: f32,
    pub(crate) original_cell_width: f32,
    pub(crate) original_cell_height: f32,
    pub(crate) scale_x: f32,
    pub(crate) scale_y: f32,
    pub(crate) descent: f32,
    pub(crate) distance_range: f32,
    pub(crate) crispness: f32,
    pub(crate) underline: LineMetrics,
    pub(crate) strikethrough: LineMetrics,
    pub(crate) inline_image: InlineImageMetrics,
    pub(crate) filter: FilterPair,
    pub(crate) integer_positions: bool,
    pub(crate) is_mono: bool,
    pub(crate) solid_block: char,
    pub(crate) family: Option<Arc<FontFamily>>,
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        let same_pages = self.pages.len() == other.pages.len()
            && self
                .pages
                .iter()
                .zip(&other.pages)
                .all(|(a, b)| a.id() == b.id());
        let same_family = match (&self.family, &other.family) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        same_pages
            && same_family
            && self.name == other.name
            && self.distance_field == other.distance_field
            && self.glyphs == other.glyphs
            && self.kerning == other.kerning
            && self.name_lookup == other.name_lookup
            && self.cell_width == other.cell_width
            && self.cell_height == other.cell_height
            && self.scale_x == other.scale_x
            && self.scale_y == other.scale_y
            && self.descent == other.descent
            && self.crispness == other.crispness
            && self.underline == other.underline
            && self.strikethrough == other.strikethrough
            && self.inline_image == other.inline_image
            && self.filter == other.filter
            && self.integer_positions == other.integer_positions
    }
}

impl Font {
    /// Create an empty font over the given pages.
    pub fn new(
        name: impl Into<String>,
        distance_field: DistanceFieldType,
        pages: Vec<Arc<Texture>>,
        cell_width: f32,
        cell_height: f32,
    ) -> Self {
        Self {
            name: name.into(),
            distance_field,
            pages,
            glyphs: HashMap::new(),
            kerning: HashMap::new(),
            name_lookup: HashMap::new(),
            names_by_char: HashMap::new(),
            next_private_use: PRIVATE_USE_START,
            cell_width,
            cell_height,
            original_cell_width: cell_width,
            original_cell_height: cell_height,
            scale_x: 1.0,
            scale_y: 1.0,
            descent: 0.0,
            distance_range: 0.0,
            crispness: 1.0,
            underline: LineMetrics {
                x: 0.0,
                y: 0.0,
                length: 0.0,
                breadth: 0.0,
            },
            strikethrough: LineMetrics::default(),
            inline_image: InlineImageMetrics::default(),
            filter: distance_field.default_filter(),
            integer_positions: false,
            is_mono: false,
            solid_block: '\u{2588}',
            family: None,
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// The font's name, including any distance-field suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the font.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// The distance-field variant this font was loaded as.
    pub fn distance_field(&self) -> DistanceFieldType {
        self.distance_field
    }

    /// Shared texture pages.
    pub fn pages(&self) -> &[Arc<Texture>] {
        &self.pages
    }

    // =========================================================================
    // Glyph table
    // =========================================================================

    /// Add or replace a glyph.
    pub fn insert_glyph(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(ch, glyph);
    }

    /// Add a kerning adjustment for a pair of characters.
    pub fn insert_kerning(&mut self, first: char, second: char, amount: f32) {
        if amount != 0.0 {
            self.kerning.insert((first, second), amount);
        }
    }

    /// Look up a glyph.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    /// Whether the font can draw `ch`.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Number of entries in the glyph table.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Kerning between two characters, zero if none.
    pub fn kerning(&self, first: char, second: char) -> f32 {
        self.kerning.get(&(first, second)).copied().unwrap_or(0.0)
    }

    /// The character drawn for solid blocks (underline, strikethrough, boxes).
    pub fn solid_block(&self) -> char {
        self.solid_block
    }

    /// Whether every glyph shares one advance.
    pub fn is_mono(&self) -> bool {
        self.is_mono
    }

    /// Resolve an inline image name (as used by `[+name]` markup) to the
    /// codepoint it was assigned. Case-insensitive.
    pub fn resolve_name(&self, name: &str) -> Option<char> {
        self.name_lookup.get(&name.to_lowercase()).copied()
    }

    /// The inline image name registered for a codepoint.
    pub fn name_of(&self, ch: char) -> Option<&str> {
        self.names_by_char.get(&ch).map(String::as_str)
    }

    /// Register an inline image name for an existing glyph.
    ///
    /// Returns `false` if the name is already taken.
    pub fn register_name(&mut self, name: &str, ch: char) -> bool {
        let key = name.to_lowercase();
        if self.name_lookup.contains_key(&key) {
            return false;
        }
        self.name_lookup.insert(key, ch);
        self.names_by_char.entry(ch).or_insert_with(|| name.to_string());
        true
    }

    /// Width of a single line of plain text, in scaled pixels.
    ///
    /// Characters without glyphs contribute nothing.
    pub fn measure(&self, text: &str) -> f32 {
        let mut width = 0.0;
        let mut previous: Option<char> = None;
        for ch in text.chars() {
            if let Some(glyph) = self.glyphs.get(&ch) {
                if let Some(prev) = previous {
                    width += self.kerning(prev, ch);
                }
                width += glyph.x_advance;
                previous = Some(ch);
            }
        }
        let width = width * self.scale_x;
        if self.integer_positions {
            width.round()
        } else {
            width
        }
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    /// Move every glyph and grow the cell.
    ///
    /// `x` and `y` shift each glyph's image, `width` is added to every
    /// advance, and `height` to the cell height.
    pub fn adjust_glyphs(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        for glyph in self.glyphs.values_mut() {
            glyph.offset_x += x;
            glyph.offset_y += y;
            glyph.x_advance += width;
        }
        self.cell_width += width;
        self.original_cell_width += width;
        self.cell_height += height;
        self.original_cell_height += height;
        self
    }

    /// Scale so one cell measures `width` by `height`.
    pub fn scale_to(&mut self, width: f32, height: f32) -> &mut Self {
        if self.original_cell_width > 0.0 {
            self.scale_x = width / self.original_cell_width;
        }
        if self.original_cell_height > 0.0 {
            self.scale_y = height / self.original_cell_height;
        }
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Multiply the current scale.
    pub fn scale(&mut self, x: f32, y: f32) -> &mut Self {
        self.scale_x *= x;
        self.scale_y *= y;
        self.cell_width *= x;
        self.cell_height *= y;
        self
    }

    /// Current cell width in scaled pixels.
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Current cell (line) height in scaled pixels.
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Cell size before any scaling.
    pub fn original_cell_size(&self) -> (f32, f32) {
        (self.original_cell_width, self.original_cell_height)
    }

    /// Horizontal and vertical scale.
    pub fn scale_factors(&self) -> (f32, f32) {
        (self.scale_x, self.scale_y)
    }

    /// Distance below the baseline reserved for descenders (usually negative).
    pub fn descent(&self) -> f32 {
        self.descent
    }

    pub fn set_descent(&mut self, descent: f32) -> &mut Self {
        self.descent = descent;
        self
    }

    /// Multiply the line height.
    pub fn adjust_line_height(&mut self, factor: f32) -> &mut Self {
        self.cell_height *= factor;
        self.original_cell_height *= factor;
        self
    }

    /// Set the offsets of both decoration lines at once.
    pub fn set_line_metrics(
        &mut self,
        underline_x: f32,
        underline_y: f32,
        strikethrough_x: f32,
        strikethrough_y: f32,
    ) -> &mut Self {
        self.underline.x = underline_x;
        self.underline.y = underline_y;
        self.strikethrough.x = strikethrough_x;
        self.strikethrough.y = strikethrough_y;
        self
    }

    pub fn underline(&self) -> LineMetrics {
        self.underline
    }

    pub fn set_underline(&mut self, metrics: LineMetrics) -> &mut Self {
        self.underline = metrics;
        self
    }

    pub fn strikethrough(&self) -> LineMetrics {
        self.strikethrough
    }

    pub fn set_strikethrough(&mut self, metrics: LineMetrics) -> &mut Self {
        self.strikethrough = metrics;
        self
    }

    pub fn inline_image_metrics(&self) -> InlineImageMetrics {
        self.inline_image
    }

    /// Set how inline images (emoji, icons) sit relative to text.
    pub fn set_inline_image_metrics(&mut self, offset_x: f32, offset_y: f32, x_advance: f32) -> &mut Self {
        self.inline_image = InlineImageMetrics {
            offset_x,
            offset_y,
            x_advance,
        };
        self
    }

    /// Sampling filter the renderer should use for this font's pages.
    pub fn texture_filter(&self) -> FilterPair {
        self.filter
    }

    pub fn set_texture_filter(&mut self, filter: FilterPair) -> &mut Self {
        self.filter = filter;
        self
    }

    /// Whether glyph positions snap to whole pixels.
    pub fn integer_positions(&self) -> bool {
        self.integer_positions
    }

    pub fn use_integer_positions(&mut self, enabled: bool) -> &mut Self {
        self.integer_positions = enabled;
        self
    }

    /// Edge sharpness multiplier for distance-field fonts.
    pub fn crispness(&self) -> f32 {
        self.crispness
    }

    pub fn set_crispness(&mut self, crispness: f32) -> &mut Self {
        self.crispness = crispness;
        self
    }

    /// Pixel range of the distance field, zero for standard fonts.
    pub fn distance_range(&self) -> f32 {
        self.distance_range
    }

    // =========================================================================
    // Family
    // =========================================================================

    /// The family this font switches within, if any.
    pub fn family(&self) -> Option<&Arc<FontFamily>> {
        self.family.as_ref()
    }

    pub fn set_family(&mut self, family: Option<Arc<FontFamily>>) -> &mut Self {
        self.family = family;
        self
    }

    /// Resolve `[@name]` markup against this font's family.
    pub fn family_font(&self, name: &str) -> Option<&Font> {
        self.family.as_ref()?.connect(name)
    }

    // =========================================================================
    // Resources
    // =========================================================================

    /// Dispose every page this font references.
    ///
    /// Pages are shared with every clone of this font.
    pub fn dispose(&self) {
        for page in &self.pages {
            page.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_textra_render::PixelRect;

    fn sample() -> Font {
        let page = Texture::from_image("page.png", image::RgbaImage::new(16, 16)).unwrap();
        let mut font = Font::new("Sample", DistanceFieldType::Standard, vec![Arc::new(page)], 8.0, 16.0);
        for (i, ch) in ['A', 'V', ' '].into_iter().enumerate() {
            let glyph = if ch == ' ' {
                Glyph::blank(4.0)
            } else {
                Glyph {
                    page: 0,
                    region: PixelRect::new(i as u32 * 8, 0, 8, 16),
                    offset_x: 0.0,
                    offset_y: 0.0,
                    x_advance: 8.0,
                }
            };
            font.insert_glyph(ch, glyph);
        }
        font.insert_kerning('A', 'V', -2.0);
        font
    }

    #[test]
    fn test_measure_uses_kerning_and_scale() {
        let mut font = sample();
        assert_eq!(font.measure("AV"), 14.0);
        assert_eq!(font.measure("A V"), 20.0);
        font.scale(2.0, 2.0);
        assert_eq!(font.measure("AV"), 28.0);
    }

    #[test]
    fn test_adjust_glyphs_moves_everything() {
        let mut font = sample();
        font.adjust_glyphs(1.0, -2.0, 0.5, 4.0);
        let a = font.glyph('A').unwrap();
        assert_eq!((a.offset_x, a.offset_y, a.x_advance), (1.0, -2.0, 8.5));
        assert_eq!(font.cell_height(), 20.0);
        assert_eq!(font.original_cell_size(), (8.5, 20.0));
    }

    #[test]
    fn test_scale_to() {
        let mut font = sample();
        font.scale_to(16.0, 24.0);
        assert_eq!(font.scale_factors(), (2.0, 1.5));
        assert_eq!(font.cell_width(), 16.0);
    }

    #[test]
    fn test_clone_is_independent() {
        let font = sample();
        let mut copy = font.clone();
        copy.set_descent(-3.0).adjust_line_height(2.0);
        assert_eq!(font.descent(), 0.0);
        assert_eq!(font.cell_height(), 16.0);
        assert_ne!(font, copy);
        assert!(Arc::ptr_eq(&font.pages()[0], &copy.pages()[0]));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut font = sample();
        assert!(font.register_name("Letter A", 'A'));
        assert!(!font.register_name("letter a", 'V'));
        assert_eq!(font.resolve_name("LETTER A"), Some('A'));
        assert_eq!(font.name_of('A'), Some("Letter A"));
    }

    #[test]
    fn test_integer_positions_round_measure() {
        let mut font = sample();
        font.scale(1.3, 1.0).use_integer_positions(true);
        assert_eq!(font.measure("A"), 10.0);
    }

    #[test]
    fn test_default_filter_follows_distance_field() {
        let font = Font::new("Sdf", DistanceFieldType::Sdf, Vec::new(), 1.0, 1.0);
        assert_eq!(font.texture_filter(), FilterPair::LINEAR);
    }
}
