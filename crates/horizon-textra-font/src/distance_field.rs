//! Distance-field rendering variants.

use std::fmt;
use std::str::FromStr;

use horizon_textra_render::FilterPair;

/// How a font's glyph pages encode shape.
///
/// Each variant has a *name suffix*, appended to a font name to form the
/// registry cache key and the name of returned fonts, and a *file part*,
/// used to find the variant's asset files. [`SdfOutline`](Self::SdfOutline)
/// reads the same files as [`Sdf`](Self::Sdf) but is cached separately because
/// it is configured differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceFieldType {
    /// Plain coverage bitmaps.
    #[default]
    Standard,
    /// Single-channel signed distance field.
    Sdf,
    /// Multi-channel signed distance field.
    Msdf,
    /// Signed distance field drawn with an outline.
    SdfOutline,
}

impl DistanceFieldType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Standard, Self::Sdf, Self::Msdf, Self::SdfOutline];

    /// Suffix appended to a font name for caching and naming.
    pub const fn name_suffix(self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Sdf => "-sdf",
            Self::Msdf => "-msdf",
            Self::SdfOutline => "-sdf-outline",
        }
    }

    /// Suffix used in asset file names.
    pub const fn file_part(self) -> &'static str {
        match self {
            Self::Standard => "-standard",
            Self::Sdf | Self::SdfOutline => "-sdf",
            Self::Msdf => "-msdf",
        }
    }

    /// The registry cache key for a font name.
    pub fn cache_key(self, name: &str) -> String {
        format!("{name}{}", self.name_suffix())
    }

    /// Whether glyph pages store distances rather than coverage.
    pub const fn is_distance_field(self) -> bool {
        !matches!(self, Self::Standard)
    }

    /// Distance fields must be sampled bilinearly; standard fonts default to
    /// nearest until their metrics say otherwise.
    pub const fn default_filter(self) -> FilterPair {
        if self.is_distance_field() {
            FilterPair::LINEAR
        } else {
            FilterPair::NEAREST
        }
    }
}

impl fmt::Display for DistanceFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::Sdf => "SDF",
            Self::Msdf => "MSDF",
            Self::SdfOutline => "SDF outline",
        })
    }
}

impl FromStr for DistanceFieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "standard" | "" => Ok(Self::Standard),
            "sdf" => Ok(Self::Sdf),
            "msdf" => Ok(Self::Msdf),
            "sdf-outline" => Ok(Self::SdfOutline),
            other => Err(format!("unknown distance field type '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys_are_unique() {
        let keys: std::collections::HashSet<_> = DistanceFieldType::ALL
            .iter()
            .map(|d| d.cache_key("Gentium"))
            .collect();
        assert_eq!(keys.len(), DistanceFieldType::ALL.len());
        assert_eq!(DistanceFieldType::Standard.cache_key("Gentium"), "Gentium");
        assert_eq!(DistanceFieldType::Msdf.cache_key("Gentium"), "Gentium-msdf");
    }

    #[test]
    fn test_outline_shares_sdf_files() {
        assert_eq!(
            DistanceFieldType::SdfOutline.file_part(),
            DistanceFieldType::Sdf.file_part()
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("MSDF".parse(), Ok(DistanceFieldType::Msdf));
        assert_eq!("sdf_outline".parse(), Ok(DistanceFieldType::SdfOutline));
        assert!("vector".parse::<DistanceFieldType>().is_err());
    }
}
