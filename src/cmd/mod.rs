mod batch;
mod bench;
mod generate;
mod lookups;
mod schema;

use anyhow::Context;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate as generate_completions, Shell};
use personagen::config::GeneratorConfig;
use personagen::{Category, GenerationContext};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "personagen")]
#[command(version)]
#[command(
    about = "Generate deterministic synthetic person records",
    long_about = "Every record is a pure function of (locale, seed, batch, index) and the \
                  lookup dataset: the same inputs always produce the same person."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// YAML config file (locale, seed, batch_size, lookups)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Lookup dataset JSON replacing the built-in one
    #[arg(long, global = true)]
    pub lookups: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per batch, with its centroid
    Json,
    /// One record per line
    Ndjson,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a single record and print it as JSON
    Generate {
        /// Locale, e.g. en_US or de_DE [default: en_US]
        #[arg(short, long)]
        locale: Option<String>,

        /// Dataset seed (non-negative) [default: 1]
        #[arg(short, long)]
        seed: Option<i64>,

        /// Batch number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        batch: i64,

        /// Record index
        #[arg(short, long, default_value_t = 0)]
        index: i64,

        /// Print compact JSON on one line
        #[arg(long)]
        compact: bool,
    },

    /// Generate one or more consecutive batches
    Batch {
        /// Locale, e.g. en_US or de_DE [default: en_US]
        #[arg(short, long)]
        locale: Option<String>,

        /// Dataset seed (non-negative) [default: 1]
        #[arg(short, long)]
        seed: Option<i64>,

        /// First batch number
        #[arg(short, long, default_value_t = 1)]
        batch: i64,

        /// Number of consecutive batches
        #[arg(short = 'n', long, default_value_t = 1)]
        batches: u32,

        /// Records per batch [default: 10]
        #[arg(long)]
        batch_size: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show progress while generating
        #[arg(short, long)]
        progress: bool,
    },

    /// Measure generation throughput
    Bench {
        /// Total records to generate
        #[arg(short, long, default_value_t = 500)]
        records: u64,

        /// Records per batch [default: 10]
        #[arg(long)]
        batch_size: Option<u32>,

        /// Locale [default: en_US]
        #[arg(short, long)]
        locale: Option<String>,

        /// Dataset seed [default: 1]
        #[arg(short, long)]
        seed: Option<i64>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the active lookup dataset or inspect row sort keys
    Lookups {
        /// Write the dataset to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List row sort keys instead of exporting rows
        #[arg(long)]
        keys: bool,

        /// Restrict --keys to one category
        #[arg(long, requires = "keys")]
        category: Option<Category>,
    },

    /// Print JSON Schemas for the JSON outputs
    Schema {
        /// Schema name (record, batch, bench); all when omitted
        name: Option<String>,

        /// Write each schema to <dir>/<name>.schema.json
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List available schema names
        #[arg(long, conflicts_with = "name")]
        list: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Resolve settings and load the lookup dataset shared by all commands.
pub(crate) fn load(
    global: &GlobalArgs,
    locale: Option<String>,
    seed: Option<i64>,
    batch_size: Option<u32>,
) -> anyhow::Result<(GeneratorConfig, GenerationContext)> {
    let config = GeneratorConfig::builder()
        .config_path(global.config.as_deref())?
        .locale(locale)
        .seed(seed)
        .batch_size(batch_size)
        .lookups(global.lookups.clone())
        .build()?;

    let context = match &config.lookups {
        Some(path) => GenerationContext::from_path(path)
            .with_context(|| format!("failed to load lookups from {}", path.display()))?,
        None => GenerationContext::builtin().context("built-in lookup dataset is invalid")?,
    };

    tracing::debug!(
        locale = %config.locale,
        seed = config.seed,
        batch_size = config.batch_size,
        "resolved settings"
    );
    Ok((config, context))
}

/// Fail early, listing the locales the dataset does carry.
pub(crate) fn ensure_locale(
    config: &GeneratorConfig,
    context: &GenerationContext,
) -> anyhow::Result<()> {
    if !context.supports(&config.locale) {
        let known: Vec<&str> = context.lookups().locales().collect();
        anyhow::bail!(
            "unsupported locale: {} (available: {})",
            config.locale,
            known.join(", ")
        );
    }
    Ok(())
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let global = cli.global;
    match cli.command {
        Commands::Generate {
            locale,
            seed,
            batch,
            index,
            compact,
        } => generate::run(&global, locale, seed, batch, index, compact),
        Commands::Batch {
            locale,
            seed,
            batch,
            batches,
            batch_size,
            format,
            output,
            progress,
        } => batch::run(
            &global, locale, seed, batch, batches, batch_size, format, output, progress,
        ),
        Commands::Bench {
            records,
            batch_size,
            locale,
            seed,
            json,
        } => bench::run(&global, records, batch_size, locale, seed, json),
        Commands::Lookups {
            output,
            keys,
            category,
        } => lookups::run(&global, output, keys, category),
        Commands::Schema { name, output, list } => schema::run(name, output, list),
        Commands::Completions { shell } => {
            generate_completions(shell, &mut Cli::command(), "personagen", &mut io::stdout());
            Ok(())
        }
    }
}
