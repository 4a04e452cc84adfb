//! End-to-end tests of the extract → compute → aggregate → report pipeline

use std::fs;
use std::path::Path;

use o3_power::analysis::PowerAnalyzer;
use o3_power::config::AnalysisConfig;
use o3_power::constants::{SECTION_BEGIN_MARKER, SECTION_END_MARKER};
use o3_power::mode::{ModelKind, SectionMode};
use o3_power::{Error, run_analysis};
use tempfile::tempdir;

fn section(body: &str) -> String {
	format!("{}\n{}\n{}\n", SECTION_BEGIN_MARKER, body, SECTION_END_MARKER)
}

/// A trimmed gem5 O3 dump with the stats the default model reads
const O3_SECTION: &str = "\
simSeconds                                   0.000050
simTicks                                     50000000
system.cpu.rob.reads                         120000
system.cpu.rob.writes                        80000
system.cpu.icache.tags.tagAccesses           300000
system.cpu.icache.tags.dataAccesses          150000
system.cpu.branchPred.lookups_0::total       40000
system.cpu.statIssuedInstType_0::IntAlu      90000
system.cpu.statIssuedInstType_0::FloatAdd    1000
system.l2cache.tags.dataAccesses             2500
";

#[test]
fn test_two_sections_reported_in_order() {
	let dir = tempdir().unwrap();
	let stats = dir.path().join("stats.txt");
	let output = dir.path().join("results/power.txt");

	let text = format!(
		"{}{}",
		section(O3_SECTION),
		section("simSeconds 2.0\nsystem.cpu.rob.reads 100")
	);
	fs::write(&stats, text).unwrap();

	let report = run_analysis(AnalysisConfig::default(), &stats, &output).unwrap();

	assert_eq!(fs::read_to_string(&output).unwrap(), report);
	let first = report.find("Simulation Section 1").unwrap();
	let second = report.find("Simulation Section 2").unwrap();
	assert!(first < second);
	assert!(!report.contains("Simulation Section 3"));

	// Section 2 only has ROB reads: 100 * 1.14e-10 / 2.0
	let tail = &report[second..];
	assert!(tail.contains("rob_reads: 5.700000e-09 W\n"));
	assert!(tail.contains("  ROB: 5.700000e-09 W\n"));
	assert!(tail.ends_with("Total System Power Consumption: 5.700000e-09 W\n"));
}

#[test]
fn test_grand_total_matches_component_sum() {
	let analyzer = PowerAnalyzer::new(AnalysisConfig::default()).unwrap();
	let sections = analyzer.analyze_text(O3_SECTION).unwrap();
	let section = &sections[0];

	let individual: f64 = section.power.iter().map(|(_, watts)| watts).sum();
	let grouped: f64 = section.groups.groups.iter().map(|group| group.total).sum();
	assert!(individual > 0.0);
	assert!((section.total_power() - individual).abs() <= individual * 1e-12);
	assert!((grouped - individual).abs() <= individual * 1e-12);
}

#[test]
fn test_repeated_runs_are_identical() {
	let dir = tempdir().unwrap();
	let stats = dir.path().join("stats.txt");
	fs::write(&stats, section(O3_SECTION)).unwrap();

	let first = run_analysis(AnalysisConfig::default(), &stats, &dir.path().join("a.txt")).unwrap();
	let second = run_analysis(AnalysisConfig::default(), &stats, &dir.path().join("b.txt")).unwrap();
	assert_eq!(first, second);
}

#[test]
fn test_missing_stats_file() {
	let dir = tempdir().unwrap();
	let output = dir.path().join("power.txt");

	let err = run_analysis(AnalysisConfig::default(), Path::new("/nonexistent/stats.txt"), &output).unwrap_err();

	assert!(matches!(err, Error::SourceUnavailable { .. }));
	assert!(!output.exists());
}

#[test]
fn test_zero_elapsed_time_writes_nothing() {
	let dir = tempdir().unwrap();
	let stats = dir.path().join("stats.txt");
	let output = dir.path().join("power.txt");
	fs::write(&stats, "simSeconds 0\nsystem.cpu.rob.reads 100\n").unwrap();

	let err = run_analysis(AnalysisConfig::default(), &stats, &output).unwrap_err();

	assert!(matches!(err, Error::InvalidElapsedTime { section: 1, .. }));
	assert!(!output.exists());
}

#[test]
fn test_missing_elapsed_time_writes_nothing() {
	let dir = tempdir().unwrap();
	let stats = dir.path().join("stats.txt");
	let output = dir.path().join("power.txt");
	fs::write(&stats, "system.cpu.rob.reads 100\n").unwrap();

	let err = run_analysis(AnalysisConfig::default(), &stats, &output).unwrap_err();

	assert!(matches!(err, Error::MissingElapsedTime { section: 1 }));
	assert!(!output.exists());
}

#[test]
fn test_generic_model_single_section() {
	let dir = tempdir().unwrap();
	let stats = dir.path().join("stats.txt");
	let output = dir.path().join("power.txt");
	fs::write(
		&stats,
		"system.cpu.exec_context.number_of_fp_divide_accesses 2\nsystem.l2.overall_hits::Write 4\n",
	)
	.unwrap();

	let config = AnalysisConfig::new(ModelKind::Generic, SectionMode::Single);
	let report = run_analysis(config, &stats, &output).unwrap();

	assert!(!report.contains("Simulation Section"));
	assert!(report.contains("fp_divide: 3.0000 W\n"));
	assert!(report.contains("l2_cache_write: 1.8000 W\n"));
	assert!(report.contains("\nMemory Total: 1.8000 W\n"));
	assert!(report.ends_with("Total System Power Consumption: 4.8000 W\n"));
}
