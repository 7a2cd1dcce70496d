//! Per-font tuning.
//!
//! Every catalog font has a [`FontMetrics`] record in a TOML table. The record
//! is applied once, right after a font is loaded and before it is cached:
//!
//! ```toml
//! [fonts."Gentium"]
//! y_adjust = -2.0
//! height_adjust = -4.0
//! scale_to = [31.0, 35.0]
//! line_metrics = [0.0, 0.0, 0.0, -0.25]
//! ```

use std::collections::HashMap;
use std::path::Path;

use horizon_textra_render::{FilterPair, TextureFilter};
use serde::Deserialize;

use crate::distance_field::DistanceFieldType;
use crate::error::{FontError, Result};
use crate::font::Font;

/// The bundled table.
const BUILTIN: &str = include_str!("../data/known_fonts.toml");

/// Adjustments for one font. Absent fields leave the loaded value alone.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontMetrics {
    pub x_adjust: f32,
    pub y_adjust: f32,
    pub width_adjust: f32,
    pub height_adjust: f32,
    /// Target cell size, `[width, height]`.
    pub scale_to: Option<[f32; 2]>,
    pub descent: Option<f32>,
    /// Line height multiplier.
    pub line_height: Option<f32>,
    /// Underline x/y then strikethrough x/y.
    pub line_metrics: Option<[f32; 4]>,
    /// Inline image offset x/y and advance.
    pub inline_image: Option<[f32; 3]>,
    /// `"Linear"`, or `"MipMapLinearLinear, Linear"` for min and mag.
    pub filter: Option<String>,
    pub integer_positions: bool,
    pub sdf_crispness: Option<f32>,
    pub msdf_crispness: Option<f32>,
}

impl FontMetrics {
    fn filter_pair(&self, name: &str) -> Result<Option<FilterPair>> {
        let Some(spec) = self.filter.as_deref() else {
            return Ok(None);
        };
        let parse = |s: &str| {
            s.trim()
                .parse::<TextureFilter>()
                .map_err(|msg| FontError::invalid_metrics(name, msg))
        };
        let pair = match spec.split_once(',') {
            Some((min, mag)) => FilterPair {
                min: parse(min)?,
                mag: parse(mag)?,
            },
            None => FilterPair::uniform(parse(spec)?),
        };
        Ok(Some(pair))
    }

    /// Reject values that cannot produce a usable font.
    pub fn validate(&self, name: &str) -> Result<()> {
        if let Some([w, h]) = self.scale_to
            && (w <= 0.0 || h <= 0.0)
        {
            return Err(FontError::invalid_metrics(name, "scale_to must be positive"));
        }
        if self.line_height.is_some_and(|f| f <= 0.0) {
            return Err(FontError::invalid_metrics(name, "line_height must be positive"));
        }
        for crispness in [self.sdf_crispness, self.msdf_crispness].into_iter().flatten() {
            if crispness <= 0.0 {
                return Err(FontError::invalid_metrics(name, "crispness must be positive"));
            }
        }
        self.filter_pair(name)?;
        Ok(())
    }

    /// Apply this record to a freshly loaded font.
    pub fn apply(&self, name: &str, font: &mut Font) -> Result<()> {
        self.validate(name)?;
        font.adjust_glyphs(self.x_adjust, self.y_adjust, self.width_adjust, self.height_adjust);
        if let Some([w, h]) = self.scale_to {
            font.scale_to(w, h);
        }
        if let Some(descent) = self.descent {
            font.set_descent(descent);
        }
        if let Some(factor) = self.line_height {
            font.adjust_line_height(factor);
        }
        if let Some([ux, uy, sx, sy]) = self.line_metrics {
            font.set_line_metrics(ux, uy, sx, sy);
        }
        if let Some([x, y, advance]) = self.inline_image {
            font.set_inline_image_metrics(x, y, advance);
        }
        if let Some(filter) = self.filter_pair(name)? {
            font.set_texture_filter(filter);
        }
        font.use_integer_positions(self.integer_positions);
        let crispness = match font.distance_field() {
            DistanceFieldType::Msdf => self.msdf_crispness,
            DistanceFieldType::Sdf | DistanceFieldType::SdfOutline => self.sdf_crispness,
            DistanceFieldType::Standard => None,
        };
        if let Some(crispness) = crispness {
            font.set_crispness(crispness);
        }
        let filter = font.texture_filter();
        for page in font.pages() {
            page.set_filter(filter);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MetricsFile {
    #[serde(default)]
    fonts: HashMap<String, FontMetrics>,
}

/// Name to [`FontMetrics`] lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsTable {
    fonts: HashMap<String, FontMetrics>,
}

impl MetricsTable {
    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: MetricsFile = toml::from_str(text)?;
        for (name, metrics) in &file.fonts {
            metrics.validate(name)?;
        }
        Ok(Self { fonts: file.fonts })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| FontError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// The record for `name`, or the identity record if there is none.
    pub fn get(&self, name: &str) -> FontMetrics {
        self.fonts.get(name).cloned().unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Replace or add a record.
    pub fn insert(&mut self, name: impl Into<String>, metrics: FontMetrics) {
        self.fonts.insert(name.into(), metrics);
    }
}
