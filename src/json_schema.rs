//! JSON Schema generation for CLI output types.
//!
//! Schemas are exported via the `schema` subcommand.

use schemars::{schema_for, Schema};
use std::collections::BTreeMap;

/// Returns all JSON schemas for commands that print JSON.
/// Uses BTreeMap for deterministic ordering (important for diffable output).
pub fn all_schemas() -> BTreeMap<&'static str, Schema> {
    let mut schemas = BTreeMap::new();

    // generate command, and each ndjson line of batch
    schemas.insert("record", schema_for!(crate::record::SyntheticRecord));

    schemas.insert("batch", schema_for!(crate::output::BatchOutput));

    schemas.insert("bench", schema_for!(crate::output::BenchOutput));

    schemas
}

/// Generate a single schema by name.
pub fn get_schema(name: &str) -> Option<Schema> {
    all_schemas().remove(name)
}

/// List all available schema names.
pub fn schema_names() -> Vec<&'static str> {
    all_schemas().keys().copied().collect()
}
