//! Row types for each lookup category.
//!
//! `canonical()` is the content that gets hashed into a row's sort key. It
//! deliberately leaves out weights, so re-weighting a table changes how often
//! rows win without reshuffling their hash order.

use super::{Category, LookupRow};
use crate::locale::{MAX_HEIGHT_CM, MAX_WEIGHT_KG};
use crate::record::Gender;
use crate::template::{Template, EMAIL_PLACEHOLDERS, PHONE_PLACEHOLDERS};
use serde::{Deserialize, Serialize};

fn check_weight(weight: Option<f64>) -> Result<(), String> {
    match weight {
        Some(w) if !w.is_finite() || w <= 0.0 => {
            Err(format!("weight must be a positive number, got {}", w))
        }
        _ => Ok(()),
    }
}

fn check_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", field));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRow {
    pub locale: String,
    pub gender: Gender,
    pub first_name: String,
    pub last_name: String,
}

impl LookupRow for NameRow {
    const CATEGORY: Category = Category::Names;

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn gender(&self) -> Option<Gender> {
        Some(self.gender)
    }

    fn canonical(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.locale, self.gender, self.first_name, self.last_name
        )
    }

    fn validate(&self) -> Result<(), String> {
        check_non_empty("first_name", &self.first_name)?;
        check_non_empty("last_name", &self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRow {
    pub locale: String,
    pub gender: Gender,
    pub title: String,
}

impl LookupRow for TitleRow {
    const CATEGORY: Category = Category::Titles;

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn gender(&self) -> Option<Gender> {
        Some(self.gender)
    }

    fn canonical(&self) -> String {
        format!("{}|{}|{}", self.locale, self.gender, self.title)
    }

    fn validate(&self) -> Result<(), String> {
        check_non_empty("title", &self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuffixRow {
    pub locale: String,
    pub suffix: String,
}

impl LookupRow for SuffixRow {
    const CATEGORY: Category = Category::Suffixes;

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn canonical(&self) -> String {
        format!("{}|{}", self.locale, self.suffix)
    }

    fn validate(&self) -> Result<(), String> {
        check_non_empty("suffix", &self.suffix)
    }
}

/// A state (en_US) or city (de_DE) with its dialling and postal prefixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRow {
    pub locale: String,
    pub name: String,
    pub area_code: String,
    pub zip_prefix: String,
}

impl LookupRow for RegionRow {
    const CATEGORY: Category = Category::Regions;

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn canonical(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.locale, self.name, self.area_code, self.zip_prefix
        )
    }

    fn validate(&self) -> Result<(), String> {
        check_non_empty("name", &self.name)?;
        check_non_empty("area_code", &self.area_code)?;
        check_non_empty("zip_prefix", &self.zip_prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRow {
    pub locale: String,
    pub word: String,
}

impl LookupRow for WordRow {
    const CATEGORY: Category = Category::Words;

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn canonical(&self) -> String {
        format!("{}|{}", self.locale, self.word)
    }

    fn validate(&self) -> Result<(), String> {
        check_non_empty("word", &self.word)
    }
}

/// Mean height (cm) and weight (kg) for a locale and gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalRow {
    pub locale: String,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
}

impl LookupRow for PhysicalRow {
    const CATEGORY: Category = Category::PhysicalAttributes;

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn gender(&self) -> Option<Gender> {
        Some(self.gender)
    }

    fn canonical(&self) -> String {
        format!(
            "{}|{}|{:.6}|{:.6}",
            self.locale, self.gender, self.height, self.weight
        )
    }

    fn validate(&self) -> Result<(), String> {
        for (name, value, max) in [
            ("height", self.height, MAX_HEIGHT_CM),
            ("weight", self.weight, MAX_WEIGHT_KG),
        ] {
            if !(value.is_finite() && value > 0.0 && value <= max) {
                return Err(format!(
                    "{} mean must be in (0, {}], got {}",
                    name, max, value
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyeColorRow {
    pub locale: String,
    pub eye_color: String,
    #[serde(default, alias = "probability", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl LookupRow for EyeColorRow {
    const CATEGORY: Category = Category::EyeColors;

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    fn canonical(&self) -> String {
        format!("{}|{}", self.locale, self.eye_color)
    }

    fn validate(&self) -> Result<(), String> {
        check_non_empty("eye_color", &self.eye_color)?;
        check_weight(self.weight)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDomainRow {
    pub locale: String,
    pub domain: String,
    #[serde(default, alias = "probability", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl LookupRow for EmailDomainRow {
    const CATEGORY: Category = Category::EmailDomains;

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    fn canonical(&self) -> String {
        format!("{}|{}", self.locale, self.domain)
    }

    fn validate(&self) -> Result<(), String> {
        check_non_empty("domain", &self.domain)?;
        check_weight(self.weight)
    }
}

/// Email address pattern. A missing locale applies to every locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailPatternRow {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl LookupRow for EmailPatternRow {
    const CATEGORY: Category = Category::EmailPatterns;

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn canonical(&self) -> String {
        format!("{}|{}", self.locale.as_deref().unwrap_or(""), self.pattern)
    }

    fn validate(&self) -> Result<(), String> {
        Template::parse_restricted(&self.pattern, EMAIL_PLACEHOLDERS)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Phone number pattern. A missing locale applies to every locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhonePatternRow {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl LookupRow for PhonePatternRow {
    const CATEGORY: Category = Category::PhonePatterns;

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn canonical(&self) -> String {
        format!("{}|{}", self.locale.as_deref().unwrap_or(""), self.pattern)
    }

    fn validate(&self) -> Result<(), String> {
        Template::parse_restricted(&self.pattern, PHONE_PLACEHOLDERS)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Bounding box inside a region. Keyed by region name, not by locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRow {
    pub region: String,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoRow {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

impl LookupRow for GeoRow {
    const CATEGORY: Category = Category::GeoLocations;

    fn locale(&self) -> Option<&str> {
        None
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }

    fn canonical(&self) -> String {
        format!(
            "{}|{:.6}|{:.6}|{:.6}|{:.6}",
            self.region, self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }

    fn validate(&self) -> Result<(), String> {
        check_non_empty("region", &self.region)?;
        let bounds = [self.lat_min, self.lat_max, self.lon_min, self.lon_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(format!("bounds for {} must be finite", self.region));
        }
        if self.lat_min > self.lat_max || self.lon_min > self.lon_max {
            return Err(format!("bounds for {} are inverted", self.region));
        }
        if !(-90.0..=90.0).contains(&self.lat_min) || !(-90.0..=90.0).contains(&self.lat_max) {
            return Err(format!("latitude for {} out of range", self.region));
        }
        if !(-180.0..=180.0).contains(&self.lon_min) || !(-180.0..=180.0).contains(&self.lon_max)
        {
            return Err(format!("longitude for {} out of range", self.region));
        }
        Ok(())
    }
}
