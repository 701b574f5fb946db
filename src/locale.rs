//! Per-locale generation constants.

use serde::{Deserialize, Serialize};

pub const EN_US: &str = "en_US";
pub const DE_DE: &str = "de_DE";

/// Upper bound for height means and floors, in cm.
pub const MAX_HEIGHT_CM: f64 = 300.0;
/// Upper bound for weight means and floors, in kg.
pub const MAX_WEIGHT_KG: f64 = 500.0;
/// Upper bound for either standard deviation.
pub const MAX_STDDEV: f64 = 100.0;

fn default_height_stddev() -> f64 {
    5.0
}

fn default_height_floor() -> f64 {
    160.0
}

fn default_weight_floor() -> f64 {
    50.0
}

/// Locale conventions used by the attribute synthesizer.
///
/// A locale is supported exactly when the loaded dataset carries a profile
/// for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleProfile {
    pub locale: String,
    /// International dialling prefix substituted for `{intl}`
    pub intl_prefix: String,
    #[serde(default = "default_height_stddev")]
    pub height_stddev: f64,
    pub weight_stddev: f64,
    #[serde(default = "default_height_floor")]
    pub height_floor: f64,
    #[serde(default = "default_weight_floor")]
    pub weight_floor: f64,
    /// Width of the zero-padded house number suffix in addresses
    pub address_digits: u32,
}

impl LocaleProfile {
    pub fn validate(&self) -> Result<(), String> {
        if self.locale.trim().is_empty() {
            return Err("locale cannot be empty".to_string());
        }
        for (name, value, max) in [
            ("height_stddev", self.height_stddev, MAX_STDDEV),
            ("weight_stddev", self.weight_stddev, MAX_STDDEV),
            ("height_floor", self.height_floor, MAX_HEIGHT_CM),
            ("weight_floor", self.weight_floor, MAX_WEIGHT_KG),
        ] {
            if !value.is_finite() || !(0.0..=max).contains(&value) {
                return Err(format!("{} must be between 0 and {}, got {}", name, max, value));
            }
        }
        if !(1..=9).contains(&self.address_digits) {
            return Err(format!(
                "address_digits must be between 1 and 9, got {}",
                self.address_digits
            ));
        }
        Ok(())
    }

    /// `10^address_digits`, the exclusive upper bound of the house number.
    pub fn address_modulus(&self) -> u64 {
        10u64.pow(self.address_digits)
    }
}
