//! CLI for generating lookup datasets.
//!
//! Usage:
//!   gen-lookups --scale medium --seed 42 > lookups_medium.json
//!   gen-lookups --base data/lookups.json --scale large -o large.json

use clap::Parser;
use lookup_fixtures::{Generator, Scale};
use personagen::LookupSet;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gen-lookups")]
#[command(about = "Generate enlarged lookup datasets for personagen", long_about = None)]
struct Args {
    /// Scale preset: small, medium, large
    #[arg(short, long, default_value = "medium")]
    scale: String,

    /// Random seed for reproducibility
    #[arg(long, default_value = "12345")]
    seed: u64,

    /// Base dataset (default: the built-in one)
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let scale: Scale = args
        .scale
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let base = match &args.base {
        Some(path) => LookupSet::from_path(path)?,
        None => LookupSet::builtin()?,
    };

    let mut gen = Generator::new(args.seed, scale);
    let set = gen.generate(&base)?;

    match args.output {
        Some(path) => {
            set.save(&path)?;
            eprintln!(
                "Generated {:?} dataset with seed {} -> {}",
                scale,
                args.seed,
                path.display()
            );
            for (category, count) in set.row_counts() {
                eprintln!("  {:<20} {:>6}", category, count);
            }
        }
        None => println!("{}", set.to_json_pretty()?),
    }

    Ok(())
}
