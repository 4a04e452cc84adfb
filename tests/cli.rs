//! Command-line behaviour of the `o3-power` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn o3_power_cmd() -> Command {
	Command::cargo_bin("o3-power").expect("Failed to find o3-power binary")
}

#[test]
fn test_writes_report_and_echoes_it() {
	let dir = tempdir().unwrap();
	let stats = dir.path().join("stats.txt");
	let output = dir.path().join("out/results.txt");
	fs::write(&stats, "system.cpu.rob.reads 100\nsimSeconds 2.0\n").unwrap();

	o3_power_cmd()
		.arg("--stats")
		.arg(&stats)
		.arg("--output")
		.arg(&output)
		.assert()
		.success()
		.stdout(predicate::str::starts_with("# O3CPU Power Analysis Results"))
		.stdout(predicate::str::contains("Simulation Section 1"))
		.stdout(predicate::str::contains("  ROB: 5.700000e-09 W"));

	let written = fs::read_to_string(&output).unwrap();
	assert!(written.contains("rob_reads: 5.700000e-09 W"));
}

#[test]
fn test_missing_stats_file_fails() {
	let dir = tempdir().unwrap();
	let output = dir.path().join("results.txt");

	o3_power_cmd()
		.arg("--stats")
		.arg(dir.path().join("missing.txt"))
		.arg("--output")
		.arg(&output)
		.assert()
		.failure()
		.stderr(predicate::str::contains("stats file unavailable"));

	assert!(!output.exists());
}

#[test]
fn test_rejects_unknown_flags() {
	o3_power_cmd().arg("--model").arg("generic").assert().failure();
}
