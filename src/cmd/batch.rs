use super::{GlobalArgs, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use personagen::output::BatchOutput;
use personagen::{centroid, generate_batch, BatchPlan};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[allow(clippy::too_many_arguments)]
pub fn run(
    global: &GlobalArgs,
    locale: Option<String>,
    seed: Option<i64>,
    batch: i64,
    batches: u32,
    batch_size: Option<u32>,
    format: OutputFormat,
    output: Option<PathBuf>,
    progress: bool,
) -> anyhow::Result<()> {
    if batch < 1 {
        anyhow::bail!("--batch must be at least 1, got {}", batch);
    }
    let (config, context) = super::load(global, locale, seed, batch_size)?;
    super::ensure_locale(&config, &context)?;

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let pb = if progress {
        let pb = ProgressBar::new(u64::from(batches) * u64::from(config.batch_size));
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records ({per_sec})",
            )?
            .progress_chars("█▓▒░  "),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let start_time = Instant::now();
    let mut plan = BatchPlan::new(config.locale, config.seed, batch, config.batch_size);
    let mut total: u64 = 0;

    for n in 0..batches {
        if n > 0 {
            plan = plan.next()?;
        }
        let records = generate_batch(&context, &plan)?;
        total += records.len() as u64;

        match format {
            OutputFormat::Json => {
                let document = BatchOutput {
                    locale: plan.locale.clone(),
                    seed: plan.seed,
                    batch: plan.batch,
                    batch_size: plan.batch_size,
                    centroid: centroid(&records),
                    records,
                };
                serde_json::to_writer_pretty(&mut writer, &document)?;
                writeln!(writer)?;
            }
            OutputFormat::Ndjson => {
                for record in &records {
                    serde_json::to_writer(&mut writer, record)?;
                    writeln!(writer)?;
                }
            }
        }

        if let Some(ref pb) = pb {
            pb.set_position(total);
        }
    }
    writer.flush()?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    tracing::info!(
        records = total,
        batches,
        elapsed = ?start_time.elapsed(),
        "batch generation finished"
    );
    if let Some(path) = output {
        eprintln!(
            "✓ Wrote {} records to {} in {:.3?}",
            total,
            path.display(),
            start_time.elapsed()
        );
    }
    Ok(())
}
