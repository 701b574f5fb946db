//! Deterministic weighted pick from a lookup table.
//!
//! Every row that passes the filter is scored from
//! `sha256(sort_key | locale|seed|batch|index)`: the hash is projected onto
//! (0, 1) as `u`, and the score is `-ln(u) / weight`. The lowest score wins and
//! ties go to the earlier row. With equal weights this is simply "largest hash
//! wins"; with unequal weights it is an exponential race, so a row's chance of
//! winning is proportional to its weight.

use crate::error::SynthError;
use crate::lookup::{LookupRow, LookupTable};
use crate::record::{Gender, GenerationRequest};
use crate::stream::{clamp_open, unit_interval};
use sha2::{Digest, Sha256};
use std::fmt;

/// Predicate over lookup rows.
///
/// A locale filter accepts rows tagged with that locale and rows without a
/// locale. Gender and region filters only apply when set.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowFilter<'a> {
    locale: Option<&'a str>,
    gender: Option<Gender>,
    region: Option<&'a str>,
}

impl<'a> RowFilter<'a> {
    pub fn locale(locale: &'a str) -> Self {
        Self {
            locale: Some(locale),
            ..Self::default()
        }
    }

    pub fn region(region: &'a str) -> Self {
        Self {
            region: Some(region),
            ..Self::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn accepts<R: LookupRow>(&self, row: &R) -> bool {
        if let Some(locale) = self.locale {
            if row.locale().is_some_and(|l| l != locale) {
                return false;
            }
        }
        if let Some(gender) = self.gender {
            if row.gender().is_some_and(|g| g != gender) {
                return false;
            }
        }
        if let Some(region) = self.region {
            if row.region() != Some(region) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for RowFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(locale) = self.locale {
            parts.push(format!("locale={}", locale));
        }
        if let Some(gender) = self.gender {
            parts.push(format!("gender={}", gender));
        }
        if let Some(region) = self.region {
            parts.push(format!("region={}", region));
        }
        if parts.is_empty() {
            f.write_str("any")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Picks rows for one request. Holds only the request's hash tag.
#[derive(Debug, Clone)]
pub struct Picker {
    tag: String,
}

impl Picker {
    pub fn new(request: &GenerationRequest) -> Self {
        Self {
            tag: request.hash_tag(),
        }
    }

    /// Score of a row with the given sort key and weight. Lower wins.
    pub fn score(&self, sort_key: &[u8; 32], weight: f64) -> f64 {
        let mut hasher = Sha256::new();
        hasher.update(sort_key);
        hasher.update(b"|");
        hasher.update(self.tag.as_bytes());
        let u = clamp_open(unit_interval(&hasher.finalize()));
        -u.ln() / weight
    }

    pub fn pick<'t, R: LookupRow>(
        &self,
        table: &'t LookupTable<R>,
        filter: &RowFilter<'_>,
    ) -> Result<&'t R, SynthError> {
        let mut best: Option<(&R, f64)> = None;
        for (row, key) in table.entries() {
            if !filter.accepts(row) {
                continue;
            }
            let score = self.score(key, row.weight());
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((row, score)),
            }
        }

        best.map(|(row, _)| row)
            .ok_or_else(|| SynthError::EmptyLookup {
                category: table.category(),
                filter: filter.to_string(),
            })
    }
}

/// One-off pick for a single request.
pub fn pick<'t, R: LookupRow>(
    table: &'t LookupTable<R>,
    filter: &RowFilter<'_>,
    request: &GenerationRequest,
) -> Result<&'t R, SynthError> {
    Picker::new(request).pick(table, filter)
}
