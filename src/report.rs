use std::fmt;
use std::fs;
use std::path::Path;

use log::info;

use crate::analysis::SectionReport;
use crate::constants::{FIXED_PRECISION, REPORT_TITLE, SCIENTIFIC_PRECISION, SECTION_DIVIDER_WIDTH};
use crate::error::{Error, Result};
use crate::mode::{CoefficientKind, SectionMode};

/// Formats a power value the way the report prints it
///
/// Energy-derived values are tiny, so they use scientific notation with a
/// signed two-digit exponent (`5.700000e-09`). Direct power-per-event values
/// use fixed notation (`12.3400`).
pub fn format_watts(watts: f64, kind: CoefficientKind) -> String {
	match kind {
		CoefficientKind::EnergyPerEvent => format_scientific(watts, SCIENTIFIC_PRECISION),
		CoefficientKind::PowerPerEvent => format!("{:.*}", FIXED_PRECISION, watts),
	}
}

fn format_scientific(value: f64, precision: usize) -> String {
	let formatted = format!("{:.*e}", precision, value);
	let Some((mantissa, exponent)) = formatted.split_once('e') else {
		// inf / NaN
		return formatted;
	};
	let (sign, digits) = match exponent.strip_prefix('-') {
		Some(digits) => ('-', digits),
		None => ('+', exponent),
	};
	format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Text report for every analyzed section
///
/// Layout: title, then per section an optional divider (multi-section mode
/// only), the individual component listing and the grouped listing ending
/// with the section's total system power.
#[derive(Debug, Clone, Copy)]
pub struct PowerReport<'a> {
	sections: &'a [SectionReport],
	section_mode: SectionMode,
	kind: CoefficientKind,
}

impl<'a> PowerReport<'a> {
	pub fn new(sections: &'a [SectionReport], section_mode: SectionMode, kind: CoefficientKind) -> Self {
		Self {
			sections,
			section_mode,
			kind,
		}
	}

	fn watts(&self, value: f64) -> String {
		format_watts(value, self.kind)
	}

	fn fmt_section(&self, f: &mut fmt::Formatter<'_>, section: &SectionReport) -> fmt::Result {
		if self.section_mode == SectionMode::Multi {
			let divider = "=".repeat(SECTION_DIVIDER_WIDTH);
			writeln!(f, "\n{}", divider)?;
			writeln!(f, "Simulation Section {}", section.index())?;
			writeln!(f, "{}", divider)?;
		}

		writeln!(f, "\n## Individual Component Power Consumption (Watts)")?;
		for (component, watts) in section.power.iter() {
			writeln!(f, "{}: {} W", component, self.watts(watts))?;
		}

		writeln!(f, "\n## Grouped Power Consumption (Watts)")?;
		for group in &section.groups.groups {
			writeln!(f, "\n{} Total: {} W", group.name, self.watts(group.total))?;
			for subgroup in &group.subgroups {
				writeln!(f, "  {}: {} W", subgroup.name, self.watts(subgroup.total))?;
			}
		}

		writeln!(
			f,
			"\nTotal System Power Consumption: {} W",
			self.watts(section.total_power())
		)
	}
}

impl fmt::Display for PowerReport<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}\n", REPORT_TITLE)?;
		for section in self.sections {
			self.fmt_section(f, section)?;
		}
		Ok(())
	}
}

/// Writes the rendered report, creating parent directories as needed
pub fn export_report(path: &Path, report: &str) -> Result<()> {
	let output_error = |source| Error::OutputUnavailable {
		path: path.to_path_buf(),
		source,
	};

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent).map_err(output_error)?;
	}
	fs::write(path, report).map_err(output_error)?;

	info!("Power analysis results exported to {}", path.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::analysis::PowerAnalyzer;
	use crate::config::AnalysisConfig;
	use crate::constants::{SECTION_BEGIN_MARKER, SECTION_END_MARKER};
	use crate::mode::ModelKind;

	#[rstest]
	#[case(5.7e-9, "5.700000e-09")]
	#[case(1.0, "1.000000e+00")]
	#[case(0.0, "0.000000e+00")]
	#[case(1.5e123, "1.500000e+123")]
	fn test_scientific_format(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(format_watts(value, CoefficientKind::EnergyPerEvent), expected);
	}

	#[test]
	fn test_fixed_format() {
		assert_eq!(format_watts(12.34, CoefficientKind::PowerPerEvent), "12.3400");
	}

	#[test]
	fn test_multi_section_layout() {
		let analyzer = PowerAnalyzer::new(AnalysisConfig::default()).unwrap();
		let text = format!(
			"{b}\nsimSeconds 2.0\nsystem.cpu.rob.reads 100\n{e}\n{b}\nsimSeconds 1.0\n{e}\n",
			b = SECTION_BEGIN_MARKER,
			e = SECTION_END_MARKER
		);
		let sections = analyzer.analyze_text(&text).unwrap();
		let report = PowerReport::new(&sections, SectionMode::Multi, CoefficientKind::EnergyPerEvent).to_string();

		assert!(report.starts_with("# O3CPU Power Analysis Results\n\n\n====="));
		let first = report.find("Simulation Section 1").unwrap();
		let second = report.find("Simulation Section 2").unwrap();
		assert!(first < second);

		assert!(report.contains("rob_reads: 5.700000e-09 W\n"));
		assert!(report.contains("\nIssue Execute Writeback Total: 5.700000e-09 W\n"));
		assert!(report.contains("  ROB: 5.700000e-09 W\n"));
		assert_eq!(report.matches("Total System Power Consumption").count(), 2);
		assert!(report.ends_with("Total System Power Consumption: 0.000000e+00 W\n"));
	}

	#[test]
	fn test_single_section_has_no_divider() {
		let analyzer = PowerAnalyzer::new(AnalysisConfig::new(ModelKind::Generic, SectionMode::Single)).unwrap();
		let sections = analyzer
			.analyze_text("system.cpu.branchPred.ras.used 10\n")
			.unwrap();
		let report = PowerReport::new(&sections, SectionMode::Single, CoefficientKind::PowerPerEvent).to_string();

		assert!(!report.contains("Simulation Section"));
		assert!(report.contains("ras: 1.5000 W\n"));
		assert!(report.contains("  Branch Prediction: 1.5000 W\n"));
		assert!(report.contains("\nCompute Total: 0.0000 W\n"));
		assert!(report.ends_with("Total System Power Consumption: 1.5000 W\n"));
	}

	#[test]
	fn test_groups_keep_declared_order() {
		let analyzer = PowerAnalyzer::new(AnalysisConfig::default()).unwrap();
		let sections = analyzer.analyze_text("simSeconds 1.0\n").unwrap();
		let report = PowerReport::new(&sections, SectionMode::Multi, CoefficientKind::EnergyPerEvent).to_string();

		let positions: Vec<usize> = [
			"Fetch Total",
			"Decode Total",
			"Rename Total",
			"Issue Execute Writeback Total",
			"L2Cache Total",
		]
		.iter()
		.map(|name| report.find(name).unwrap())
		.collect();
		assert!(positions.windows(2).all(|w| w[0] < w[1]));
	}

	#[test]
	fn test_export_creates_parent_dirs() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested/out/report.txt");

		export_report(&path, "hello\n").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
	}
}
