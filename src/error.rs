//! Error types for record generation and lookup loading.

use crate::lookup::Category;
use crate::template::TemplateError;
use std::path::PathBuf;

/// Errors raised while generating a record.
///
/// None of these are retryable with the same inputs: generation is a pure
/// function of the request and the loaded lookup data.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// Malformed request (negative index, batch below 1, ...)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Locale has no profile in the loaded dataset
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// No row in a lookup table matched the filter
    #[error("no {category} rows match {filter}")]
    EmptyLookup { category: Category, filter: String },

    /// A stored pattern could not be rendered
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

impl SynthError {
    /// True for errors caused by the request itself rather than the data.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            SynthError::InvalidRequest(_) | SynthError::UnsupportedLocale(_)
        )
    }
}

/// Errors raised while loading or validating a lookup dataset.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("failed to read lookup file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lookup data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported lookup dataset version {0} (expected {1})")]
    UnsupportedVersion(u32, u32),

    #[error("invalid {category} row: {reason}")]
    Invalid { category: Category, reason: String },

    #[error("invalid locale profile {locale}: {reason}")]
    InvalidProfile { locale: String, reason: String },
}
