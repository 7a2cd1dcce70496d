//! Font families for `[@Name]` switching.

use std::collections::HashMap;

use crate::distance_field::DistanceFieldType;
use crate::error::{FontError, Result};
use crate::font::Font;
use crate::names;

/// Largest number of fonts one family can hold.
pub const MAX_FAMILY_SIZE: usize = 16;

/// A group of fonts addressable by alias.
///
/// Lookups are case-insensitive. Every member is reachable by its own name
/// (with and without its distance-field suffix) as well as by any alias.
#[derive(Debug, Clone, PartialEq)]
pub struct FontFamily {
    fonts: Vec<Font>,
    aliases: HashMap<String, usize>,
}

impl FontFamily {
    /// Build a family from `(alias, member index)` pairs and members.
    pub fn new<I, A>(aliases: I, fonts: Vec<Font>) -> Result<Self>
    where
        I: IntoIterator<Item = (A, usize)>,
        A: AsRef<str>,
    {
        if fonts.is_empty() {
            return Err(FontError::InvalidFamily("a family needs at least one font".into()));
        }
        if fonts.len() > MAX_FAMILY_SIZE {
            return Err(FontError::InvalidFamily(format!(
                "{} fonts given, at most {MAX_FAMILY_SIZE} allowed",
                fonts.len()
            )));
        }

        let mut table = HashMap::new();
        for (alias, index) in aliases {
            let alias = alias.as_ref();
            if index >= fonts.len() {
                return Err(FontError::InvalidFamily(format!(
                    "alias '{alias}' points at member {index} of {}",
                    fonts.len()
                )));
            }
            table.insert(alias.to_lowercase(), index);
        }
        for (index, font) in fonts.iter().enumerate() {
            let full = font.name().to_lowercase();
            let suffix = font.distance_field().name_suffix();
            if let Some(base) = full.strip_suffix(suffix).filter(|_| !suffix.is_empty()) {
                table.entry(base.to_string()).or_insert(index);
            }
            table.entry(full).or_insert(index);
        }

        Ok(Self {
            fonts,
            aliases: table,
        })
    }

    /// Find a member by alias or name.
    pub fn connect(&self, name: &str) -> Option<&Font> {
        self.font_index(name).map(|i| &self.fonts[i])
    }

    /// Index of a member by alias or name.
    pub fn font_index(&self, name: &str) -> Option<usize> {
        self.aliases.get(&name.trim().to_lowercase()).copied()
    }

    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Every lower-cased alias and name the family answers to.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }
}

/// Aliases for standard families. The first entry's font is the primary one.
pub const STANDARD_ALIASES: &[(&str, &str)] = &[
    ("Serif", names::GENTIUM),
    ("Sans", names::OPEN_SANS),
    ("Mono", names::INCONSOLATA_LGC),
    ("Condensed", names::ROBOTO_CONDENSED),
    ("Humanist", names::YANONE_KAFFEESATZ),
    ("Retro", names::IBM_8X16),
    ("Slab", names::IOSEVKA_SLAB),
    ("Handwriting", names::BONHEUR_ROYALE),
    ("Canada", names::CANADA1500),
    ("Cozette", names::COZETTE),
    ("Iosevka", names::IOSEVKA),
    ("Medieval", names::KINGTHINGS_FOUNDATION),
    ("Kingthings", names::KINGTHINGS_FOUNDATION),
    ("Future", names::OXANIUM),
    ("Console", names::CASCADIA_MONO),
    ("Geometric", names::NOW_ALT),
    ("Script", names::TANGERINE),
];

/// Aliases for distance-field families. The pixel fonts have no distance-field
/// files, so `Retro` and `Cozette` point at the closest structured fonts.
pub const DISTANCE_FIELD_ALIASES: &[(&str, &str)] = &[
    ("Serif", names::GENTIUM),
    ("Sans", names::OPEN_SANS),
    ("Mono", names::INCONSOLATA_LGC),
    ("Condensed", names::ROBOTO_CONDENSED),
    ("Humanist", names::YANONE_KAFFEESATZ),
    ("Retro", names::COURIER_PRIME),
    ("Slab", names::IOSEVKA_SLAB),
    ("Handwriting", names::BONHEUR_ROYALE),
    ("Canada", names::CANADA1500),
    ("Cozette", names::SPACE_MONO),
    ("Iosevka", names::IOSEVKA),
    ("Medieval", names::KINGTHINGS_FOUNDATION),
    ("Kingthings", names::KINGTHINGS_FOUNDATION),
    ("Future", names::OXANIUM),
    ("Console", names::CASCADIA_MONO),
    ("Geometric", names::NOW_ALT),
    ("Script", names::TANGERINE),
];

/// The alias table used for a variant.
pub fn aliases_for(distance_field: DistanceFieldType) -> &'static [(&'static str, &'static str)] {
    match distance_field {
        DistanceFieldType::Standard => STANDARD_ALIASES,
        _ => DISTANCE_FIELD_ALIASES,
    }
}

/// Distinct font names of an alias table, in first-use order.
pub fn members(table: &[(&str, &'static str)]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for &(_, font) in table {
        if !out.contains(&font) {
            out.push(font);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(name: &str, dft: DistanceFieldType) -> Font {
        Font::new(dft.cache_key(name), dft, Vec::new(), 1.0, 1.0)
    }

    #[test]
    fn test_connect_case_insensitive() {
        let family = FontFamily::new(
            [("Serif", 0), ("Mono", 1)],
            vec![
                font("Gentium", DistanceFieldType::Sdf),
                font("Iosevka", DistanceFieldType::Sdf),
            ],
        )
        .unwrap();
        assert_eq!(family.connect("serif").unwrap().name(), "Gentium-sdf");
        assert_eq!(family.connect("MONO").unwrap().name(), "Iosevka-sdf");
        assert_eq!(family.font_index("gentium"), Some(0));
        assert_eq!(family.font_index("Iosevka-SDF"), Some(1));
        assert!(family.connect("Sans").is_none());
    }

    #[test]
    fn test_alias_wins_over_name() {
        let family = FontFamily::new(
            [("Iosevka", 1)],
            vec![
                font("Iosevka", DistanceFieldType::Standard),
                font("Gentium", DistanceFieldType::Standard),
            ],
        )
        .unwrap();
        assert_eq!(family.font_index("iosevka"), Some(1));
    }

    #[test]
    fn test_limits() {
        let too_many: Vec<Font> = (0..17)
            .map(|i| font(&format!("F{i}"), DistanceFieldType::Standard))
            .collect();
        assert!(FontFamily::new(Vec::<(&str, usize)>::new(), too_many).is_err());
        assert!(FontFamily::new(Vec::<(&str, usize)>::new(), Vec::new()).is_err());
        let bad_index = FontFamily::new([("A", 3)], vec![font("F", DistanceFieldType::Standard)]);
        assert!(matches!(bad_index, Err(FontError::InvalidFamily(_))));
    }

    #[test]
    fn test_alias_tables_fit() {
        for dft in DistanceFieldType::ALL {
            let table = aliases_for(dft);
            assert!(members(table).len() <= MAX_FAMILY_SIZE);
            for &(_, name) in table {
                let format = names::format_of(name).unwrap();
                assert!(format.supports(dft), "{name} has no {dft} files");
            }
        }
    }
}
