//! Locale-partitioned lookup tables.
//!
//! A `LookupSet` is loaded once (built-in dataset or a JSON file), validated,
//! and then only ever read. Each row gets a sort key at load time: the SHA-256
//! digest of `category|canonical content`.

mod rows;

pub use rows::{
    EmailDomainRow, EmailPatternRow, EyeColorRow, GeoRow, NameRow, PhonePatternRow, PhysicalRow,
    RegionRow, SuffixRow, TitleRow, WordRow,
};

use crate::error::LookupError;
use crate::locale::LocaleProfile;
use crate::record::Gender;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Dataset format version understood by this build.
pub const DATASET_VERSION: u32 = 1;

const BUILTIN_JSON: &str = include_str!("../../data/lookups.json");

/// Lookup table category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Names,
    Titles,
    Suffixes,
    Regions,
    Words,
    PhysicalAttributes,
    EyeColors,
    EmailDomains,
    EmailPatterns,
    PhonePatterns,
    GeoLocations,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Names,
        Category::Titles,
        Category::Suffixes,
        Category::Regions,
        Category::Words,
        Category::PhysicalAttributes,
        Category::EyeColors,
        Category::EmailDomains,
        Category::EmailPatterns,
        Category::PhonePatterns,
        Category::GeoLocations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Names => "names",
            Category::Titles => "titles",
            Category::Suffixes => "suffixes",
            Category::Regions => "regions",
            Category::Words => "words",
            Category::PhysicalAttributes => "physical_attributes",
            Category::EyeColors => "eye_colors",
            Category::EmailDomains => "email_domains",
            Category::EmailPatterns => "email_patterns",
            Category::PhonePatterns => "phone_patterns",
            Category::GeoLocations => "geo_locations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown lookup category: {}", s))
    }
}

/// Behaviour shared by every lookup row type.
pub trait LookupRow {
    const CATEGORY: Category;

    /// Locale tag, or `None` for rows that apply to every locale.
    fn locale(&self) -> Option<&str>;

    fn gender(&self) -> Option<Gender> {
        None
    }

    fn region(&self) -> Option<&str> {
        None
    }

    /// Relative weight for the weighted pick.
    fn weight(&self) -> f64 {
        1.0
    }

    /// Canonical content hashed into the row's sort key.
    fn canonical(&self) -> String;

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Compute the sort key of a row.
pub fn row_digest<R: LookupRow>(row: &R) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(R::CATEGORY.as_str().as_bytes());
    hasher.update(b"|");
    hasher.update(row.canonical().as_bytes());
    hasher.finalize().into()
}

/// Immutable table of rows with their precomputed sort keys.
#[derive(Debug, Clone)]
pub struct LookupTable<R> {
    rows: Vec<R>,
    digests: Vec<[u8; 32]>,
}

impl<R: LookupRow> LookupTable<R> {
    pub fn new(rows: Vec<R>) -> Self {
        let digests = rows.iter().map(row_digest).collect();
        Self { rows, digests }
    }

    pub fn category(&self) -> Category {
        R::CATEGORY
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows paired with their sort keys, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&R, &[u8; 32])> {
        self.rows.iter().zip(self.digests.iter())
    }

    /// Hex sort keys, for inspection.
    pub fn sort_keys(&self) -> Vec<String> {
        self.digests.iter().map(hex::encode).collect()
    }

    fn validate(&self) -> Result<(), LookupError> {
        for row in &self.rows {
            row.validate().map_err(|reason| LookupError::Invalid {
                category: R::CATEGORY,
                reason,
            })?;
        }
        Ok(())
    }
}

impl<R: LookupRow> Default for LookupTable<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Serialize> Serialize for LookupTable<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de, R: LookupRow + Deserialize<'de>> Deserialize<'de> for LookupTable<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<R>::deserialize(deserializer).map(Self::new)
    }
}

/// The full collection of lookup tables plus locale profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupSet {
    pub version: u32,
    #[serde(default)]
    pub profiles: Vec<LocaleProfile>,
    #[serde(default)]
    pub names: LookupTable<NameRow>,
    #[serde(default)]
    pub titles: LookupTable<TitleRow>,
    #[serde(default)]
    pub suffixes: LookupTable<SuffixRow>,
    #[serde(default)]
    pub regions: LookupTable<RegionRow>,
    #[serde(default)]
    pub words: LookupTable<WordRow>,
    #[serde(default)]
    pub physical_attributes: LookupTable<PhysicalRow>,
    #[serde(default)]
    pub eye_colors: LookupTable<EyeColorRow>,
    #[serde(default)]
    pub email_domains: LookupTable<EmailDomainRow>,
    #[serde(default)]
    pub email_patterns: LookupTable<EmailPatternRow>,
    #[serde(default)]
    pub phone_patterns: LookupTable<PhonePatternRow>,
    #[serde(default)]
    pub geo_locations: LookupTable<GeoRow>,
}

impl Default for LookupSet {
    fn default() -> Self {
        Self {
            version: DATASET_VERSION,
            profiles: Vec::new(),
            names: LookupTable::default(),
            titles: LookupTable::default(),
            suffixes: LookupTable::default(),
            regions: LookupTable::default(),
            words: LookupTable::default(),
            physical_attributes: LookupTable::default(),
            eye_colors: LookupTable::default(),
            email_domains: LookupTable::default(),
            email_patterns: LookupTable::default(),
            phone_patterns: LookupTable::default(),
            geo_locations: LookupTable::default(),
        }
    }
}

impl LookupSet {
    /// The dataset compiled into the binary (en_US and de_DE).
    pub fn builtin() -> Result<Self, LookupError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LookupError> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    pub fn from_path(path: &Path) -> Result<Self, LookupError> {
        let content = std::fs::read_to_string(path).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            locales = set.profiles.len(),
            "loaded lookup dataset"
        );
        Ok(set)
    }

    pub fn to_json_pretty(&self) -> Result<String, LookupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), LookupError> {
        let content = self.to_json_pretty()?;
        std::fs::write(path, content).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), LookupError> {
        if self.version != DATASET_VERSION {
            return Err(LookupError::UnsupportedVersion(
                self.version,
                DATASET_VERSION,
            ));
        }

        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.locale.as_str()) {
                return Err(LookupError::InvalidProfile {
                    locale: profile.locale.clone(),
                    reason: "duplicate profile".to_string(),
                });
            }
            profile
                .validate()
                .map_err(|reason| LookupError::InvalidProfile {
                    locale: profile.locale.clone(),
                    reason,
                })?;
        }

        self.names.validate()?;
        self.titles.validate()?;
        self.suffixes.validate()?;
        self.regions.validate()?;
        self.words.validate()?;
        self.physical_attributes.validate()?;
        self.eye_colors.validate()?;
        self.email_domains.validate()?;
        self.email_patterns.validate()?;
        self.phone_patterns.validate()?;
        self.geo_locations.validate()?;
        Ok(())
    }

    pub fn profile(&self, locale: &str) -> Option<&LocaleProfile> {
        self.profiles.iter().find(|p| p.locale == locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.locale.as_str())
    }

    /// Row count per category, in `Category::ALL` order.
    pub fn row_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.row_count(c)))
            .collect()
    }

    pub fn row_count(&self, category: Category) -> usize {
        match category {
            Category::Names => self.names.len(),
            Category::Titles => self.titles.len(),
            Category::Suffixes => self.suffixes.len(),
            Category::Regions => self.regions.len(),
            Category::Words => self.words.len(),
            Category::PhysicalAttributes => self.physical_attributes.len(),
            Category::EyeColors => self.eye_colors.len(),
            Category::EmailDomains => self.email_domains.len(),
            Category::EmailPatterns => self.email_patterns.len(),
            Category::PhonePatterns => self.phone_patterns.len(),
            Category::GeoLocations => self.geo_locations.len(),
        }
    }

    /// Hex sort keys of one category, in table order.
    pub fn sort_keys(&self, category: Category) -> Vec<String> {
        match category {
            Category::Names => self.names.sort_keys(),
            Category::Titles => self.titles.sort_keys(),
            Category::Suffixes => self.suffixes.sort_keys(),
            Category::Regions => self.regions.sort_keys(),
            Category::Words => self.words.sort_keys(),
            Category::PhysicalAttributes => self.physical_attributes.sort_keys(),
            Category::EyeColors => self.eye_colors.sort_keys(),
            Category::EmailDomains => self.email_domains.sort_keys(),
            Category::EmailPatterns => self.email_patterns.sort_keys(),
            Category::PhonePatterns => self.phone_patterns.sort_keys(),
            Category::GeoLocations => self.geo_locations.sort_keys(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads() {
        let set = LookupSet::builtin().unwrap();
        assert!(set.profile("en_US").is_some());
        assert!(set.profile("de_DE").is_some());
        assert!(set.profile("fr_FR").is_none());
        for (category, count) in set.row_counts() {
            assert!(count > 0, "{} is empty", category);
        }
    }

    #[test]
    fn test_sort_keys_depend_on_category() {
        let word = WordRow {
            locale: "en_US".to_string(),
            word: "Oak".to_string(),
        };
        let suffix = SuffixRow {
            locale: "en_US".to_string(),
            suffix: "Oak".to_string(),
        };
        assert_ne!(row_digest(&word), row_digest(&suffix));
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }
}
