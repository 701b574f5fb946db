//! Batch generation over consecutive indices.
//!
//! Batch `b` of size `n` covers indices `(b - 1) * n .. b * n`, matching the
//! paging used by the web front end. Records inside a batch are independent,
//! so they are generated on the rayon pool and collected back in index order.

use crate::assembler::GenerationContext;
use crate::error::SynthError;
use crate::record::{GenerationRequest, SyntheticRecord};
use rayon::prelude::*;
use schemars::JsonSchema;
use serde::Serialize;

/// Default page size of the web front end and benchmark script.
pub const DEFAULT_BATCH_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    pub locale: String,
    pub seed: i64,
    pub batch: i64,
    pub batch_size: u32,
}

impl BatchPlan {
    pub fn new(locale: impl Into<String>, seed: i64, batch: i64, batch_size: u32) -> Self {
        Self {
            locale: locale.into(),
            seed,
            batch,
            batch_size,
        }
    }

    /// First record index of this batch, or `None` when any index of the
    /// batch falls outside `i64`.
    pub fn start_index(&self) -> Option<i64> {
        let size = i64::from(self.batch_size);
        let start = self.batch.checked_sub(1)?.checked_mul(size)?;
        start.checked_add((size - 1).max(0))?;
        Some(start)
    }

    pub fn requests(
        &self,
    ) -> Result<impl IndexedParallelIterator<Item = GenerationRequest> + '_, SynthError> {
        let start = self.start_index().ok_or_else(range_overflow)?;
        Ok((0..self.batch_size).into_par_iter().map(move |offset| {
            GenerationRequest::new(
                self.locale.clone(),
                self.seed,
                self.batch,
                start + i64::from(offset),
            )
        }))
    }

    /// The same plan for the following batch number.
    pub fn next(&self) -> Result<Self, SynthError> {
        let batch = self.batch.checked_add(1).ok_or_else(range_overflow)?;
        Ok(Self {
            batch,
            ..self.clone()
        })
    }
}

fn range_overflow() -> SynthError {
    SynthError::InvalidRequest("batch range overflows i64".to_string())
}

/// Generate every record of a batch, in index order.
pub fn generate_batch(
    context: &GenerationContext,
    plan: &BatchPlan,
) -> Result<Vec<SyntheticRecord>, SynthError> {
    if plan.batch < 1 {
        return Err(SynthError::InvalidRequest(format!(
            "batch must be at least 1, got {}",
            plan.batch
        )));
    }
    let span = tracing::debug_span!("batch", locale = %plan.locale, batch = plan.batch);
    let _guard = span.enter();

    let records = plan
        .requests()?
        .map(|request| context.generate(&request))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(records = records.len(), "batch generated");
    Ok(records)
}

/// Mean position of a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Centroid {
    pub lat: f64,
    pub lon: f64,
}

/// Average lat/lon of the records, or `(0, 0)` when there are none.
pub fn centroid(records: &[SyntheticRecord]) -> Centroid {
    if records.is_empty() {
        return Centroid { lat: 0.0, lon: 0.0 };
    }
    let n = records.len() as f64;
    let (lat, lon) = records
        .iter()
        .fold((0.0, 0.0), |(lat, lon), r| (lat + r.lat, lon + r.lon));
    Centroid {
        lat: lat / n,
        lon: lon / n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_index() {
        assert_eq!(BatchPlan::new("en_US", 1, 1, 10).start_index(), Some(0));
        assert_eq!(BatchPlan::new("en_US", 1, 3, 10).start_index(), Some(20));
        assert_eq!(BatchPlan::new("en_US", 1, 2, 25).start_index(), Some(25));
    }

    #[test]
    fn test_start_index_overflow() {
        assert_eq!(BatchPlan::new("en_US", 1, i64::MAX, 10).start_index(), None);
        assert_eq!(BatchPlan::new("en_US", 1, i64::MAX, 1).start_index(), Some(i64::MAX - 1));
        assert_eq!(BatchPlan::new("en_US", 1, i64::MIN, 1).start_index(), None);
        // starts at i64::MAX - 1, so the third index does not fit
        let size = 3;
        let batch = i64::MAX / size + 1;
        assert_eq!(BatchPlan::new("en_US", 1, batch, size as u32).start_index(), None);
    }

    #[test]
    fn test_requests_in_order() {
        let plan = BatchPlan::new("de_DE", 4, 2, 5);
        let indices: Vec<i64> = plan.requests().unwrap().map(|r| r.index).collect();
        assert_eq!(indices, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(centroid(&[]), Centroid { lat: 0.0, lon: 0.0 });
    }
}
