//! Request and record value types.

use crate::error::SynthError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs that uniquely determine one synthetic record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    pub locale: String,
    pub seed: i64,
    pub batch: i64,
    pub index: i64,
}

impl GenerationRequest {
    pub fn new(locale: impl Into<String>, seed: i64, batch: i64, index: i64) -> Self {
        Self {
            locale: locale.into(),
            seed,
            batch,
            index,
        }
    }

    /// Check the numeric fields. Locale support is checked against the
    /// loaded dataset by the assembler.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.locale.trim().is_empty() {
            return Err(SynthError::InvalidRequest("locale is empty".to_string()));
        }
        if self.seed < 0 {
            return Err(SynthError::InvalidRequest(format!(
                "seed must be non-negative, got {}",
                self.seed
            )));
        }
        if self.batch < 1 {
            return Err(SynthError::InvalidRequest(format!(
                "batch must be at least 1, got {}",
                self.batch
            )));
        }
        if self.index < 0 {
            return Err(SynthError::InvalidRequest(format!(
                "index must be non-negative, got {}",
                self.index
            )));
        }
        Ok(())
    }

    /// Canonical `locale|seed|batch|index` tag fed to every hash.
    pub fn hash_tag(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.locale, self.seed, self.batch, self.index
        )
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seed={} batch={} index={}",
            self.locale, self.seed, self.batch, self.index
        )
    }
}

/// Gender as stored in the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}. Use male or female", s)),
        }
    }
}

/// One generated person. Field order matches the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SyntheticRecord {
    pub full_name: String,
    pub gender: Gender,
    pub eye_color: String,
    /// Height in centimetres
    pub height: u32,
    /// Weight in kilograms
    pub weight: u32,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub region: String,
}
