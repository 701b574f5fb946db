//! Deterministic synthetic person records.
//!
//! `(locale, seed, batch, index)` always maps to the same [`SyntheticRecord`]
//! for a given lookup dataset.

pub mod assembler;
pub mod batch;
pub mod config;
pub mod error;
pub mod json_schema;
pub mod locale;
pub mod lookup;
pub mod output;
pub mod record;
pub mod resolver;
pub mod stream;
pub mod synth;
pub mod template;

pub use assembler::GenerationContext;
pub use batch::{centroid, generate_batch, BatchPlan, Centroid};
pub use error::{LookupError, SynthError};
pub use lookup::{Category, LookupSet};
pub use record::{Gender, GenerationRequest, SyntheticRecord};
