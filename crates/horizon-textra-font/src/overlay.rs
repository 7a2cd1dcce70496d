//! Emoji and icon atlases merged into a font's glyph table.

use std::fmt;

use horizon_textra_core::logging::{span_names, targets};
use horizon_textra_render::TextureAtlas;

use crate::error::{FontError, Result};
use crate::font::{Font, PRIVATE_USE_END};
use crate::glyph::Glyph;

/// The atlases the registry knows how to attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtlasSet {
    /// Twitter's emoji, full colour.
    Twemoji,
    /// OpenMoji, in colour or as black line art.
    OpenMoji { color: bool },
    /// Google's Noto Color Emoji.
    NotoEmoji,
    /// game-icons.net, white silhouettes meant to be tinted.
    GameIcons,
}

impl AtlasSet {
    /// The `.atlas` file name.
    pub fn atlas_file(self) -> &'static str {
        match self {
            Self::Twemoji => "Twemoji.atlas",
            Self::OpenMoji { color: true } => "OpenMoji-color.atlas",
            Self::OpenMoji { color: false } => "OpenMoji.atlas",
            Self::NotoEmoji => "Noto-Emoji.atlas",
            Self::GameIcons => "Game-Icons.atlas",
        }
    }

    /// The page image file name.
    pub fn page_file(self) -> &'static str {
        match self {
            Self::Twemoji => "Twemoji.png",
            Self::OpenMoji { color: true } => "OpenMoji-color.png",
            Self::OpenMoji { color: false } => "OpenMoji.png",
            Self::NotoEmoji => "Noto-Emoji.png",
            Self::GameIcons => "Game-Icons.png",
        }
    }

    /// Default placement deltas for this set.
    pub fn default_offsets(self) -> AtlasOffsets {
        match self {
            Self::GameIcons => AtlasOffsets::new(0.0, 0.0, 0.0),
            _ => AtlasOffsets::new(0.0, -4.0, 0.0),
        }
    }
}

impl fmt::Display for AtlasSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.atlas_file())
    }
}

/// Deltas applied to every glyph added from an atlas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AtlasOffsets {
    pub offset_x: f32,
    pub offset_y: f32,
    pub x_advance: f32,
}

impl AtlasOffsets {
    pub const fn new(offset_x: f32, offset_y: f32, x_advance: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            x_advance,
        }
    }
}

impl Font {
    /// Private-use codepoints not yet handed out.
    pub fn private_use_remaining(&self) -> usize {
        (PRIVATE_USE_END + 1).saturating_sub(self.next_private_use) as usize
    }

    /// Add every region of a loaded atlas as a glyph.
    ///
    /// Each region gets the next private-use codepoint and its name is
    /// registered for `[+name]` lookup. A region whose name is a single
    /// character is also drawn for that character. Pages are shared with the
    /// atlas. Returns the number of glyphs added.
    pub fn add_atlas(&mut self, atlas: &TextureAtlas, offsets: AtlasOffsets) -> Result<usize> {
        let source = atlas
            .source()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<atlas>".to_string());
        let _span = tracing::debug_span!(target: targets::ATLAS, span_names::ATLAS_ATTACH, font = %self.name, atlas = %source).entered();

        let needed = atlas.regions().len();
        let available = self.private_use_remaining();
        if needed > available {
            return Err(FontError::AtlasCapacity {
                atlas: source,
                needed,
                available,
            });
        }

        let mut pages = Vec::with_capacity(atlas.pages().len());
        for page in atlas.pages() {
            let texture = page.texture.clone().ok_or_else(|| {
                FontError::parse(&source, None, format!("page '{}' is not loaded", page.file))
            })?;
            pages.push(texture);
        }
        let base = self.pages.len();
        self.pages.extend(pages);

        for region in atlas.regions() {
            let Some(ch) = char::from_u32(self.next_private_use) else {
                return Err(FontError::AtlasCapacity {
                    atlas: source,
                    needed,
                    available,
                });
            };
            self.next_private_use += 1;
            let glyph = Glyph {
                page: base + region.page,
                region: region.bounds,
                offset_x: region.offset_x + offsets.offset_x,
                offset_y: region.offset_y + offsets.offset_y,
                x_advance: region.original_width as f32 + offsets.x_advance,
            };
            let mut literal = region.name.chars();
            if let (Some(single), None) = (literal.next(), literal.next()) {
                self.glyphs.insert(single, glyph.clone());
                self.names_by_char.entry(single).or_insert_with(|| region.name.clone());
            }
            self.glyphs.insert(ch, glyph);
            if !self.register_name(&region.name, ch) {
                tracing::trace!(
                    target: targets::ATLAS,
                    name = %region.name,
                    "duplicate region name, keeping first"
                );
            }
        }

        tracing::debug!(
            target: targets::ATLAS,
            font = %self.name,
            atlas = %source,
            glyphs = needed,
            remaining = self.private_use_remaining(),
            "atlas attached"
        );
        Ok(needed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance_field::DistanceFieldType;
    use std::sync::Arc;

    use horizon_textra_render::Texture;

    const ATLAS: &str = "
icons.png
size: 32, 16
filter: Linear, Linear
smile
  bounds: 0, 0, 16, 16
  offsets: 0, 1, 18, 18
\u{2764}
  bounds: 16, 0, 16, 16
";

    fn loaded_atlas() -> TextureAtlas {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(32, 16).save(dir.path().join("icons.png")).unwrap();
        let path = dir.path().join("icons.atlas");
        std::fs::write(&path, ATLAS).unwrap();
        TextureAtlas::load(&path).unwrap()
    }

    fn font() -> Font {
        let page = Texture::from_image("p", image::RgbaImage::new(8, 8)).unwrap();
        Font::new("F", DistanceFieldType::Standard, vec![Arc::new(page)], 8.0, 16.0)
    }

    #[test]
    fn test_regions_become_private_use_glyphs() {
        let atlas = loaded_atlas();
        let mut font = font();
        let added = font.add_atlas(&atlas, AtlasOffsets::new(1.0, -2.0, 3.0)).unwrap();
        assert_eq!(added, 2);
        assert_eq!(font.pages().len(), 2);

        let smile = font.resolve_name("SMILE").unwrap();
        assert_eq!(smile, '\u{E000}');
        let glyph = font.glyph(smile).unwrap();
        assert_eq!(glyph.page, 1);
        assert_eq!((glyph.offset_x, glyph.offset_y, glyph.x_advance), (1.0, -1.0, 21.0));

        assert_eq!(font.resolve_name("\u{2764}"), Some('\u{E001}'));
        assert!(font.has_glyph('\u{2764}'));
        assert_eq!(font.private_use_remaining(), 0x1900 - 2);
    }

    #[test]
    fn test_capacity_exhausted() {
        let atlas = loaded_atlas();
        let mut font = font();
        font.next_private_use = PRIVATE_USE_END;
        let err = font.add_atlas(&atlas, AtlasOffsets::default()).unwrap_err();
        assert!(matches!(err, FontError::AtlasCapacity { needed: 2, available: 1, .. }));
        assert_eq!(font.glyph_count(), 0);
    }

    #[test]
    fn test_unloaded_pages_rejected() {
        let atlas = TextureAtlas::parse(ATLAS, "icons.atlas").unwrap();
        assert!(font().add_atlas(&atlas, AtlasOffsets::default()).is_err());
    }

    #[test]
    fn test_atlas_file_names() {
        assert_eq!(AtlasSet::OpenMoji { color: true }.atlas_file(), "OpenMoji-color.atlas");
        assert_eq!(AtlasSet::GameIcons.page_file(), "Game-Icons.png");
    }
}
