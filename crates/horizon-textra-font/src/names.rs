//! The font catalog.
//!
//! Every known typeface has a name constant. The constants are grouped by the
//! format their files are stored in, which is how the registry chooses a
//! loader.

use crate::format::FontFormat;

pub const A_STARRY: &str = "A-Starry";
pub const AUBREY: &str = "Aubrey";
pub const BITTER: &str = "Bitter";
pub const BONHEUR_ROYALE: &str = "Bonheur Royale";
pub const CANADA1500: &str = "Canada1500";
pub const CASCADIA_MONO: &str = "Cascadia Mono";
pub const CAVEAT: &str = "Caveat";
pub const COMIC_MONO: &str = "Comic Mono";
pub const CORDATA_PPC: &str = "Cordata PPC";
pub const COURIER_PRIME: &str = "Courier Prime";
pub const DEJAVU_SANS_MONO: &str = "DejaVu Sans Mono";
pub const GENTIUM: &str = "Gentium";
pub const GENTIUM_UN_ITALIC: &str = "Gentium Un-Italic";
pub const GO_NOTO_UNIVERSAL: &str = "Go Noto Universal";
pub const GRENZE: &str = "Grenze";
pub const HANAZONO: &str = "Hanazono";
pub const INCONSOLATA_LGC: &str = "Inconsolata LGC";
pub const IOSEVKA: &str = "Iosevka";
pub const IOSEVKA_SLAB: &str = "Iosevka Slab";
pub const KINGTHINGS_FOUNDATION: &str = "Kingthings Foundation";
pub const KINGTHINGS_PETROCK: &str = "Kingthings Petrock";
pub const LIBERTINUS_SERIF: &str = "Libertinus Serif";
pub const LIBERTINUS_SERIF_SEMIBOLD: &str = "Libertinus Serif Semibold";
pub const MOON_DANCE: &str = "Moon Dance";
pub const NOTO_SERIF: &str = "Noto Serif";
pub const NOW_ALT: &str = "Now Alt";
pub const NUGOTHIC: &str = "Nugothic";
pub const OPEN_SANS: &str = "Open Sans";
pub const OXANIUM: &str = "Oxanium";
pub const ROBOTO_CONDENSED: &str = "Roboto Condensed";
pub const SPACE_MONO: &str = "Space Mono";
pub const TANGERINE: &str = "Tangerine";
pub const YANONE_KAFFEESATZ: &str = "Yanone Kaffeesatz";
pub const YATAGHAN: &str = "Yataghan";

pub const COZETTE: &str = "Cozette";
pub const LANAPIXEL: &str = "LanaPixel";
pub const MONOGRAM: &str = "Monogram";
pub const QUANTY: &str = "Quanty";

pub const IBM_8X16: &str = "IBM 8x16";

/// Structured JSON fonts, available in every distance-field variant.
pub const STANDARD_NAMES: &[&str] = &[
    A_STARRY,
    AUBREY,
    BITTER,
    BONHEUR_ROYALE,
    CANADA1500,
    CASCADIA_MONO,
    CAVEAT,
    COMIC_MONO,
    CORDATA_PPC,
    COURIER_PRIME,
    DEJAVU_SANS_MONO,
    GENTIUM,
    GENTIUM_UN_ITALIC,
    GO_NOTO_UNIVERSAL,
    GRENZE,
    HANAZONO,
    INCONSOLATA_LGC,
    IOSEVKA,
    IOSEVKA_SLAB,
    KINGTHINGS_FOUNDATION,
    KINGTHINGS_PETROCK,
    LIBERTINUS_SERIF,
    LIBERTINUS_SERIF_SEMIBOLD,
    MOON_DANCE,
    NOTO_SERIF,
    NOW_ALT,
    NUGOTHIC,
    OPEN_SANS,
    OXANIUM,
    ROBOTO_CONDENSED,
    SPACE_MONO,
    TANGERINE,
    YANONE_KAFFEESATZ,
    YATAGHAN,
];

/// AngelCode BMFont pixel fonts, standard only.
pub const FNT_NAMES: &[&str] = &[COZETTE, LANAPIXEL, MONOGRAM, QUANTY];

/// SadConsole grid fonts, standard only.
pub const SAD_NAMES: &[&str] = &[IBM_8X16];

/// The format a catalog font is stored in, by exact name.
pub fn format_of(name: &str) -> Option<FontFormat> {
    if STANDARD_NAMES.contains(&name) {
        Some(FontFormat::Structured)
    } else if FNT_NAMES.contains(&name) {
        Some(FontFormat::BmFont)
    } else if SAD_NAMES.contains(&name) {
        Some(FontFormat::SadConsole)
    } else {
        None
    }
}

/// Every catalog name.
pub fn all_names() -> impl Iterator<Item = &'static str> {
    STANDARD_NAMES
        .iter()
        .chain(FNT_NAMES)
        .chain(SAD_NAMES)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let all: Vec<_> = all_names().collect();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn test_format_of() {
        assert_eq!(format_of(GENTIUM), Some(FontFormat::Structured));
        assert_eq!(format_of(COZETTE), Some(FontFormat::BmFont));
        assert_eq!(format_of(IBM_8X16), Some(FontFormat::SadConsole));
        assert_eq!(format_of("gentium"), None);
    }
}
