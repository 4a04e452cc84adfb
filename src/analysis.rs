use std::path::Path;

use log::{info, warn};

use crate::aggregate::{GroupReport, aggregate};
use crate::calculator::calculate_power;
use crate::catalog::PowerCatalog;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::mode::SectionMode;
use crate::power::PowerResult;
use crate::stats::{SectionStats, StatsExtractor};

/// Everything computed for one section of a stats report
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReport {
	/// Extracted counts and elapsed time
	pub stats: SectionStats,

	/// Per-component power in watts
	pub power: PowerResult,

	/// Group and subgroup totals
	pub groups: GroupReport,
}

impl SectionReport {
	/// 1-based position of the section in the report
	pub fn index(&self) -> usize {
		self.stats.index
	}

	pub fn total_power(&self) -> f64 {
		self.groups.grand_total()
	}
}

/// Runs the extract → compute → aggregate pipeline for one configuration
#[derive(Debug, Clone)]
pub struct PowerAnalyzer {
	catalog: PowerCatalog,
	sections: SectionMode,
}

impl PowerAnalyzer {
	/// Builds and validates the catalog for `config`
	pub fn new(config: AnalysisConfig) -> Result<Self> {
		Ok(Self::with_catalog(PowerCatalog::for_model(config.model)?, config.sections))
	}

	pub fn with_catalog(catalog: PowerCatalog, sections: SectionMode) -> Self {
		Self { catalog, sections }
	}

	pub fn catalog(&self) -> &PowerCatalog {
		&self.catalog
	}

	pub fn section_mode(&self) -> SectionMode {
		self.sections
	}

	/// Analyzes every section of the report at `path`
	pub fn analyze_file(&self, path: &Path) -> Result<Vec<SectionReport>> {
		StatsExtractor::new(&self.catalog, self.sections)
			.extract_file(path)?
			.into_iter()
			.map(|stats| self.analyze_section(stats))
			.collect()
	}

	/// Analyzes every section of `text`
	///
	/// Sections are independent; the first section that cannot be computed
	/// aborts the whole run.
	pub fn analyze_text(&self, text: &str) -> Result<Vec<SectionReport>> {
		let extractor = StatsExtractor::new(&self.catalog, self.sections);

		extractor
			.extract(text)
			.into_iter()
			.map(|stats| self.analyze_section(stats))
			.collect()
	}

	/// Computes power and group totals for already extracted counts
	pub fn analyze_section(&self, stats: SectionStats) -> Result<SectionReport> {
		let power = calculate_power(&self.catalog, &stats)?;
		let groups = aggregate(&power, self.catalog.groups());

		if power.is_empty() {
			warn!("Section {}: no component power computed", stats.index);
		}

		info!(
			"Section {}: {} components, total power {:e} W",
			stats.index,
			power.len(),
			groups.grand_total()
		);

		Ok(SectionReport { stats, power, groups })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::constants::{SECTION_BEGIN_MARKER, SECTION_END_MARKER};
	use crate::error::Error;
	use crate::mode::ModelKind;

	#[test]
	fn test_rob_reads_lands_in_rob_subgroup() {
		let analyzer = PowerAnalyzer::new(AnalysisConfig::default()).unwrap();
		let reports = analyzer
			.analyze_text("system.cpu.rob.reads 100\nsimSeconds 2.0\n")
			.unwrap();

		assert_eq!(reports.len(), 1);
		let rob = reports[0]
			.groups
			.group("Issue Execute Writeback")
			.and_then(|group| group.subgroup("ROB"))
			.unwrap();
		assert!((rob.total - 5.7e-9).abs() < 1e-20);
		assert!((reports[0].total_power() - 5.7e-9).abs() < 1e-20);
	}

	#[test]
	fn test_zero_time_aborts_run() {
		let analyzer = PowerAnalyzer::new(AnalysisConfig::default()).unwrap();
		let text = format!(
			"{b}\nsimSeconds 1.0\n{e}\n{b}\nsimSeconds 0.0\n{e}\n",
			b = SECTION_BEGIN_MARKER,
			e = SECTION_END_MARKER
		);

		let err = analyzer.analyze_text(&text).unwrap_err();
		assert!(matches!(err, Error::InvalidElapsedTime { section: 2, .. }));
	}

	#[test]
	fn test_direct_model_without_time() {
		let analyzer = PowerAnalyzer::new(AnalysisConfig::new(ModelKind::Generic, SectionMode::Single)).unwrap();
		let reports = analyzer
			.analyze_text("system.cpu.exec_context.number_of_integer_alu_accesses 10\n")
			.unwrap();

		assert_eq!(reports[0].stats.sim_seconds, None);
		assert_eq!(reports[0].power.get("integer_alu"), Some(5.0));
		assert_eq!(reports[0].power.len(), analyzer.catalog().coefficients().len());
		assert_eq!(reports[0].total_power(), 5.0);
	}

	#[test]
	fn test_analyze_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("stats.txt");
		std::fs::write(&path, "system.cpu.rob.reads 100\nsimSeconds 2.0\n").unwrap();

		let analyzer = PowerAnalyzer::new(AnalysisConfig::default()).unwrap();
		let reports = analyzer.analyze_file(&path).unwrap();
		assert_eq!(reports.len(), 1);
		assert_eq!(reports[0].stats.counts["rob_reads"], 100);

		let err = analyzer.analyze_file(&dir.path().join("missing.txt")).unwrap_err();
		assert!(matches!(err, Error::SourceUnavailable { .. }));
	}

	#[test]
	fn test_section_without_counts_is_logged() {
		testing_logger::setup();

		let analyzer = PowerAnalyzer::new(AnalysisConfig::default()).unwrap();
		let stats = SectionStats {
			index: 4,
			counts: Default::default(),
			sim_seconds: Some(1.0),
		};
		let report = analyzer.analyze_section(stats).unwrap();
		assert!(report.power.is_empty());
		assert_eq!(report.total_power(), 0.0);

		testing_logger::validate(|captured_logs| {
			assert!(captured_logs.iter().any(|log| {
				log.level == log::Level::Warn && log.body == "Section 4: no component power computed"
			}));
		});
	}

	#[test]
	fn test_empty_report_has_no_sections() {
		let analyzer = PowerAnalyzer::new(AnalysisConfig::default()).unwrap();
		assert!(analyzer.analyze_text("\n  \n").unwrap().is_empty());
	}
}
