//! The font registry.
//!
//! [`KnownFonts`] loads catalog fonts on first use, applies their metrics,
//! and caches one base font per name and distance-field variant. Every
//! accessor hands out a clone, so callers can re-tune what they get without
//! touching the cache.
//!
//! # Example
//!
//! ```no_run
//! use horizon_textra_font::{DistanceFieldType, KnownFonts, KnownFontsConfig};
//!
//! let fonts = KnownFonts::new(KnownFontsConfig::default())?;
//! let body = fonts.get_font("Gentium")?;
//! let title = fonts.get_font_with("Oxanium", DistanceFieldType::Msdf)?;
//! let chat = fonts.add_emoji(fonts.get_font("Open Sans")?)?;
//! # Ok::<(), horizon_textra_font::FontError>(())
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::Arc;

use horizon_textra_core::LifecycleListener;
use horizon_textra_core::logging::{LoadTimer, span_names, targets};
use horizon_textra_render::TextureAtlas;
use parking_lot::{Mutex, RwLock};

use crate::assets::AssetSource;
use crate::config::KnownFontsConfig;
use crate::distance_field::DistanceFieldType;
use crate::error::{FontError, Result};
use crate::family::{self, FontFamily};
use crate::font::Font;
use crate::format::{self, FontFormat, FontLoader};
use crate::metrics::MetricsTable;
use crate::names;
use crate::overlay::{AtlasOffsets, AtlasSet};

/// Registry of pre-tuned catalog fonts.
pub struct KnownFonts {
    assets: RwLock<AssetSource>,
    metrics: MetricsTable,
    loaders: HashMap<FontFormat, Box<dyn FontLoader>>,
    fonts: Mutex<HashMap<String, Font>>,
    atlases: Mutex<HashMap<&'static str, Arc<TextureAtlas>>>,
}

impl std::fmt::Debug for KnownFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnownFonts")
            .field("assets", &*self.assets.read())
            .field("metrics", &self.metrics.len())
            .field("cached_fonts", &self.fonts.lock().len())
            .field("cached_atlases", &self.atlases.lock().len())
            .finish()
    }
}

impl KnownFonts {
    /// Build a registry from a config. Reads the metrics override file, if
    /// any; no fonts are loaded yet.
    pub fn new(config: KnownFontsConfig) -> Result<Self> {
        Ok(Self::with_metrics(config.asset_source(), config.metrics_table()?))
    }

    /// Build a registry from explicit parts.
    pub fn with_metrics(assets: AssetSource, metrics: MetricsTable) -> Self {
        Self {
            assets: RwLock::new(assets),
            metrics,
            loaders: format::default_loaders(),
            fonts: Mutex::new(HashMap::new()),
            atlases: Mutex::new(HashMap::new()),
        }
    }

    /// Relocate every later asset lookup. Fonts already cached are kept.
    pub fn set_asset_prefix(&self, prefix: impl Into<String>) {
        let mut assets = self.assets.write();
        assets.set_prefix(prefix);
        tracing::debug!(target: targets::FONT, prefix = assets.prefix(), "asset prefix changed");
    }

    /// The current asset prefix.
    pub fn asset_prefix(&self) -> String {
        self.assets.read().prefix().to_string()
    }

    pub fn metrics(&self) -> &MetricsTable {
        &self.metrics
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// A standard (non distance-field) font by name.
    pub fn get_font(&self, name: &str) -> Result<Font> {
        self.get_font_with(name, DistanceFieldType::Standard)
    }

    /// A font by name and variant.
    ///
    /// The first request loads the font's files and applies its metrics; later
    /// requests clone the cached font. The returned font is named
    /// `name + suffix` (`"Gentium-msdf"`).
    pub fn get_font_with(&self, name: &str, distance_field: DistanceFieldType) -> Result<Font> {
        if name.is_empty() {
            return Err(FontError::EmptyName);
        }
        let format = names::format_of(name).ok_or_else(|| FontError::UnknownFont(name.to_string()))?;
        let loader = self
            .loaders
            .get(&format)
            .filter(|l| l.supports(distance_field))
            .ok_or_else(|| FontError::UnsupportedVariant {
                name: name.to_string(),
                variant: distance_field,
            })?;

        let key = distance_field.cache_key(name);
        if let Some(font) = self.fonts.lock().get(&key) {
            tracing::trace!(target: targets::FONT, font = %key, "cache hit");
            return Ok(font.clone());
        }

        let font = {
            let _span = tracing::debug_span!(target: targets::FONT, span_names::FONT_LOAD, font = %key, %format).entered();
            let _timer = LoadTimer::new(key.clone());
            let assets = self.assets.read().clone();
            let mut font = loader.load(name, distance_field, &assets)?;
            self.metrics.get(name).apply(name, &mut font)?;
            font.set_name(key.clone());
            font
        };
        tracing::debug!(
            target: targets::FONT,
            font = %key,
            glyphs = font.glyph_count(),
            pages = font.pages().len(),
            "font loaded"
        );

        Ok(self.cache_font(key, font))
    }

    /// Store a freshly loaded font unless another load got there first, in
    /// which case the newcomer's pages are released.
    fn cache_font(&self, key: String, font: Font) -> Font {
        match self.fonts.lock().entry(key) {
            Entry::Occupied(cached) => {
                tracing::trace!(target: targets::FONT, font = %cached.key(), "dropping duplicate load");
                font.dispose();
                cached.get().clone()
            }
            Entry::Vacant(slot) => slot.insert(font).clone(),
        }
    }

    /// Whether a font is already loaded.
    pub fn is_cached(&self, name: &str, distance_field: DistanceFieldType) -> bool {
        self.fonts.lock().contains_key(&distance_field.cache_key(name))
    }

    /// Number of loaded fonts across all variants.
    pub fn cached_count(&self) -> usize {
        self.fonts.lock().len()
    }

    // =========================================================================
    // Bulk access
    // =========================================================================

    /// Every catalog font in its standard form, structured fonts first.
    pub fn get_all_standard(&self) -> Result<Vec<Font>> {
        names::all_names()
            .map(|name| self.get_font_with(name, DistanceFieldType::Standard))
            .collect()
    }

    /// Every structured font as SDF.
    pub fn get_all_sdf(&self) -> Result<Vec<Font>> {
        self.all_structured(DistanceFieldType::Sdf)
    }

    /// Every structured font as MSDF.
    pub fn get_all_msdf(&self) -> Result<Vec<Font>> {
        self.all_structured(DistanceFieldType::Msdf)
    }

    /// Every catalog font in every variant its format supports, except the
    /// outline variant.
    pub fn get_all(&self) -> Result<Vec<Font>> {
        let mut all = self.get_all_standard()?;
        all.extend(self.get_all_sdf()?);
        all.extend(self.get_all_msdf()?);
        Ok(all)
    }

    fn all_structured(&self, distance_field: DistanceFieldType) -> Result<Vec<Font>> {
        names::STANDARD_NAMES
            .iter()
            .map(|name| self.get_font_with(name, distance_field))
            .collect()
    }

    // =========================================================================
    // Atlases
    // =========================================================================

    fn load_atlas(&self, set: AtlasSet) -> Result<Arc<TextureAtlas>> {
        let file = set.atlas_file();
        if let Some(atlas) = self.atlases.lock().get(file) {
            return Ok(Arc::clone(atlas));
        }
        let (atlas_path, page_path) = {
            let assets = self.assets.read();
            (assets.resolve(file)?, assets.resolve(set.page_file())?)
        };
        let page_dir = page_path.parent().unwrap_or_else(|| Path::new(""));
        let atlas = Arc::new(TextureAtlas::load_with_page_dir(&atlas_path, page_dir)?);
        tracing::debug!(
            target: targets::ATLAS,
            atlas = file,
            regions = atlas.regions().len(),
            "atlas loaded"
        );
        match self.atlases.lock().entry(file) {
            Entry::Occupied(cached) => {
                atlas.dispose();
                Ok(Arc::clone(cached.get()))
            }
            Entry::Vacant(slot) => Ok(Arc::clone(slot.insert(atlas))),
        }
    }

    /// Attach an atlas set with explicit offsets.
    pub fn add_atlas_with(&self, mut font: Font, set: AtlasSet, offsets: AtlasOffsets) -> Result<Font> {
        let atlas = self.load_atlas(set)?;
        font.add_atlas(&atlas, offsets)?;
        Ok(font)
    }

    /// Attach Twemoji. Emoji become reachable as `[+name]` and by character.
    pub fn add_emoji(&self, font: Font) -> Result<Font> {
        self.add_atlas_with(font, AtlasSet::Twemoji, AtlasSet::Twemoji.default_offsets())
    }

    /// Attach OpenMoji, in colour or as line art.
    pub fn add_open_moji(&self, font: Font, color: bool) -> Result<Font> {
        let set = AtlasSet::OpenMoji { color };
        self.add_atlas_with(font, set, set.default_offsets())
    }

    /// Attach Noto Color Emoji.
    pub fn add_noto_emoji(&self, font: Font) -> Result<Font> {
        self.add_atlas_with(font, AtlasSet::NotoEmoji, AtlasSet::NotoEmoji.default_offsets())
    }

    /// Attach the game-icons.net set.
    ///
    /// The set is large enough that it cannot share a font with an emoji set.
    pub fn add_game_icons(&self, font: Font) -> Result<Font> {
        self.add_atlas_with(font, AtlasSet::GameIcons, AtlasSet::GameIcons.default_offsets())
    }

    // =========================================================================
    // Families
    // =========================================================================

    /// Family of standard fonts; the result is the Gentium member.
    pub fn standard_family(&self) -> Result<Font> {
        self.family(DistanceFieldType::Standard)
    }

    /// Family of SDF fonts.
    pub fn sdf_family(&self) -> Result<Font> {
        self.family(DistanceFieldType::Sdf)
    }

    /// Family of MSDF fonts.
    pub fn msdf_family(&self) -> Result<Font> {
        self.family(DistanceFieldType::Msdf)
    }

    /// Build the alias family for a variant and return its first member with
    /// the family attached.
    pub fn family(&self, distance_field: DistanceFieldType) -> Result<Font> {
        let table = family::aliases_for(distance_field);
        let members = family::members(table);
        let fonts = members
            .iter()
            .map(|name| self.get_font_with(name, distance_field))
            .collect::<Result<Vec<_>>>()?;
        let aliases = table.iter().filter_map(|&(alias, font)| {
            members.iter().position(|m| *m == font).map(|i| (alias, i))
        });
        let family = Arc::new(FontFamily::new(aliases, fonts)?);
        let mut primary = family.fonts()[0].clone();
        primary.set_family(Some(family));
        Ok(primary)
    }

    // =========================================================================
    // Resources
    // =========================================================================

    /// Dispose every cached page texture and atlas and empty the caches.
    ///
    /// Fonts handed out earlier share those pages and must not be drawn
    /// afterwards.
    pub fn dispose(&self) {
        let fonts: Vec<Font> = self.fonts.lock().drain().map(|(_, f)| f).collect();
        let atlases: Vec<Arc<TextureAtlas>> = self.atlases.lock().drain().map(|(_, a)| a).collect();
        for font in &fonts {
            font.dispose();
        }
        for atlas in &atlases {
            atlas.dispose();
        }
        tracing::info!(
            target: targets::FONT,
            fonts = fonts.len(),
            atlases = atlases.len(),
            "known fonts disposed"
        );
    }
}

impl LifecycleListener for KnownFonts {
    fn name(&self) -> &str {
        "known-fonts"
    }

    fn dispose(&self) {
        KnownFonts::dispose(self);
    }
}

macro_rules! font_getters {
    ($($(#[$meta:meta])* $getter:ident => $name:ident),* $(,)?) => {
        impl KnownFonts {
            $(
                $(#[$meta])*
                pub fn $getter(&self) -> Result<Font> {
                    self.get_font(names::$name)
                }
            )*
        }
    };
}

font_getters! {
    /// A serif with wide language coverage; the default body face.
    gentium => GENTIUM,
    gentium_un_italic => GENTIUM_UN_ITALIC,
    /// Monospace with programming ligatures removed.
    iosevka => IOSEVKA,
    iosevka_slab => IOSEVKA_SLAB,
    inconsolata_lgc => INCONSOLATA_LGC,
    cascadia_mono => CASCADIA_MONO,
    open_sans => OPEN_SANS,
    roboto_condensed => ROBOTO_CONDENSED,
    yanone_kaffeesatz => YANONE_KAFFEESATZ,
    oxanium => OXANIUM,
    now_alt => NOW_ALT,
    kingthings_foundation => KINGTHINGS_FOUNDATION,
    bonheur_royale => BONHEUR_ROYALE,
    tangerine => TANGERINE,
    canada1500 => CANADA1500,
    libertinus_serif => LIBERTINUS_SERIF,
    go_noto_universal => GO_NOTO_UNIVERSAL,
    /// Pixel font.
    cozette => COZETTE,
    /// Pixel font.
    ibm_8x16 => IBM_8X16,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_registry() -> KnownFonts {
        KnownFonts::with_metrics(AssetSource::new("missing-a", "missing-b"), MetricsTable::default())
    }

    #[test]
    fn test_name_errors_before_io() {
        let fonts = empty_registry();
        assert!(matches!(fonts.get_font(""), Err(FontError::EmptyName)));
        assert!(matches!(fonts.get_font("Comic Sans"), Err(FontError::UnknownFont(n)) if n == "Comic Sans"));
        assert!(matches!(
            fonts.get_font_with(names::COZETTE, DistanceFieldType::Msdf),
            Err(FontError::UnsupportedVariant { .. })
        ));
        assert!(matches!(
            fonts.get_font_with(names::IBM_8X16, DistanceFieldType::SdfOutline),
            Err(FontError::UnsupportedVariant { .. })
        ));
    }

    #[test]
    fn test_duplicate_load_releases_pages() {
        let fonts = empty_registry();
        let page = |name: &str| {
            Arc::new(
                horizon_textra_render::Texture::from_image(name, image::RgbaImage::new(4, 4)).unwrap(),
            )
        };
        let first = Font::new("Gentium", DistanceFieldType::Standard, vec![page("first")], 4.0, 4.0);
        let second = Font::new("Gentium", DistanceFieldType::Standard, vec![page("second")], 4.0, 4.0);
        let kept = Arc::clone(&first.pages()[0]);
        let dropped = Arc::clone(&second.pages()[0]);

        let key = DistanceFieldType::Standard.cache_key("Gentium");
        assert_eq!(fonts.cache_font(key.clone(), first).pages()[0].id(), kept.id());
        assert_eq!(fonts.cache_font(key, second).pages()[0].id(), kept.id());
        assert!(dropped.is_disposed());
        assert!(!kept.is_disposed());
        assert_eq!(fonts.cached_count(), 1);
    }

    #[test]
    fn test_missing_files_not_cached() {
        let fonts = empty_registry();
        let err = fonts.get_font(names::GENTIUM).unwrap_err();
        assert!(err.is_missing_asset());
        assert_eq!(fonts.cached_count(), 0);
    }

    #[test]
    fn test_missing_atlas() {
        let fonts = empty_registry();
        let font = Font::new("F", DistanceFieldType::Standard, Vec::new(), 1.0, 1.0);
        let err = fonts.add_game_icons(font).unwrap_err();
        match err {
            FontError::MissingAsset { file, searched } => {
                assert_eq!(file, "Game-Icons.atlas");
                assert_eq!(searched.len(), 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_set_asset_prefix() {
        let fonts = empty_registry();
        fonts.set_asset_prefix("fonts");
        assert_eq!(fonts.asset_prefix(), "fonts/");
    }

    #[test]
    fn test_lifecycle_name() {
        let fonts = empty_registry();
        assert_eq!(LifecycleListener::name(&fonts), "known-fonts");
    }
}
