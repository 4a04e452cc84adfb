pub mod aggregate;
pub mod analysis;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod mode;
pub mod model;
pub mod power;
pub mod report;
pub mod stats;

use std::path::Path;

use log::info;

use crate::analysis::PowerAnalyzer;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::report::{PowerReport, export_report};

pub use crate::error::{CatalogError, Error};

/// Estimates component power for a gem5 stats file and writes the report
///
/// This is the main entry point for the analysis. Every section is computed
/// before anything is written, so a fatal error leaves no partial report
/// behind. Returns the report text that was written to `output_path`.
pub fn run_analysis(config: AnalysisConfig, stats_path: &Path, output_path: &Path) -> Result<String> {
	let analyzer = PowerAnalyzer::new(config)?;
	info!(
		"Using power model '{}' ({})",
		analyzer.catalog().name(),
		analyzer.catalog().coefficient_kind().as_str()
	);

	let sections = analyzer.analyze_file(stats_path)?;

	let report = PowerReport::new(
		&sections,
		analyzer.section_mode(),
		analyzer.catalog().coefficient_kind(),
	)
	.to_string();

	export_report(output_path, &report)?;
	Ok(report)
}
