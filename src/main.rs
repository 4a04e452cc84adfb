use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use o3_power::config::AnalysisConfig;
use o3_power::constants::{DEFAULT_OUTPUT_PATH, DEFAULT_STATS_PATH};
use o3_power::run_analysis;

/// O3CPU power model analyzer
#[derive(Debug, Parser)]
#[command(name = "o3-power")]
struct Cli {
	/// Path to the gem5 stats file
	#[arg(long, default_value = DEFAULT_STATS_PATH)]
	stats: PathBuf,

	/// Output file for power analysis results
	#[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
	output: PathBuf,
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cli = Cli::parse();

	let report = run_analysis(AnalysisConfig::default(), &cli.stats, &cli.output)
		.with_context(|| format!("Power analysis of {} failed", cli.stats.display()))?;

	print!("{}", report);

	Ok(())
}
