//! JSON documents printed by the CLI.

use crate::batch::Centroid;
use crate::record::SyntheticRecord;
use schemars::JsonSchema;
use serde::Serialize;

/// One generated batch as printed by `batch --format json`.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BatchOutput {
    pub locale: String,
    pub seed: i64,
    pub batch: i64,
    pub batch_size: u32,
    /// Mean position of the records, for centring a map view
    pub centroid: Centroid,
    pub records: Vec<SyntheticRecord>,
}

/// Throughput report of the `bench` command.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BenchOutput {
    pub locale: String,
    pub seed: i64,
    pub records: u64,
    pub batch_size: u32,
    pub batches: u64,
    pub elapsed_secs: f64,
    pub records_per_sec: f64,
}
