use super::GlobalArgs;
use personagen::output::BenchOutput;
use personagen::{generate_batch, BatchPlan};
use std::time::Instant;

/// Generate `records` records in consecutive batches and report throughput.
pub fn run(
    global: &GlobalArgs,
    records: u64,
    batch_size: Option<u32>,
    locale: Option<String>,
    seed: Option<i64>,
    json: bool,
) -> anyhow::Result<()> {
    let (config, context) = super::load(global, locale, seed, batch_size)?;
    super::ensure_locale(&config, &context)?;

    let size = u64::from(config.batch_size);
    let batches = records.div_ceil(size);
    let mut plan = BatchPlan::new(config.locale.clone(), config.seed, 1, config.batch_size);

    let start_time = Instant::now();
    let mut generated: u64 = 0;
    for n in 0..batches {
        if n > 0 {
            plan = plan.next()?;
        }
        let remaining = records - generated;
        if remaining < size {
            // u32 fits: remaining < batch_size
            plan.batch_size = remaining as u32;
        }
        generated += generate_batch(&context, &plan)?.len() as u64;
    }
    let elapsed = start_time.elapsed().as_secs_f64();
    let records_per_sec = if elapsed > 0.0 {
        generated as f64 / elapsed
    } else {
        0.0
    };

    let report = BenchOutput {
        locale: config.locale,
        seed: config.seed,
        records: generated,
        batch_size: config.batch_size,
        batches,
        elapsed_secs: elapsed,
        records_per_sec,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Generated {} records ({} batches of {}) in {:.3}s",
            report.records, report.batches, report.batch_size, report.elapsed_secs
        );
        println!("Throughput: {:.0} records/sec", report.records_per_sec);
    }
    Ok(())
}
