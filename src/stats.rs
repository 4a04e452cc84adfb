use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, error, info, warn};

use crate::catalog::{ComponentId, PowerCatalog};
use crate::constants::{SECTION_BEGIN_MARKER, SECTION_END_MARKER};
use crate::error::{Error, Result};
use crate::mode::SectionMode;

/// Event counts of one section (component ID -> count)
pub type ComponentCounts = HashMap<ComponentId, u64>;

/// Event counts extracted from one section of a stats report
///
/// Every component of the catalog has an entry; components whose stat line
/// is missing or unreadable are recorded as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStats {
	/// 1-based position of the section in the report
	pub index: usize,

	/// Per-component event counts
	pub counts: ComponentCounts,

	/// Elapsed simulated time in seconds, if the section reports one
	pub sim_seconds: Option<f64>,
}

/// Reads the whole stats report into memory
pub fn read_stats(path: &Path) -> Result<String> {
	let text = fs::read_to_string(path).map_err(|source| Error::SourceUnavailable {
		path: path.to_path_buf(),
		source,
	})?;
	info!("Successfully read stats file {}", path.display());
	Ok(text)
}

/// Splits a report on gem5 begin/end marker lines
///
/// Returns the trimmed, non-empty regions in source order. A report without
/// markers yields itself as the only region.
pub fn split_sections(text: &str) -> Vec<&str> {
	let mut regions = Vec::new();
	let mut start = 0;
	let mut offset = 0;

	for line in text.split_inclusive('\n') {
		let trimmed = line.trim();
		if trimmed == SECTION_BEGIN_MARKER || trimmed == SECTION_END_MARKER {
			regions.push(&text[start..offset]);
			start = offset + line.len();
		}
		offset += line.len();
	}
	regions.push(&text[start..]);

	regions
		.into_iter()
		.map(str::trim)
		.filter(|region| !region.is_empty())
		.collect()
}

/// Turns stats report text into per-section event counts
#[derive(Debug, Clone, Copy)]
pub struct StatsExtractor<'a> {
	catalog: &'a PowerCatalog,
	sections: SectionMode,
}

impl<'a> StatsExtractor<'a> {
	pub fn new(catalog: &'a PowerCatalog, sections: SectionMode) -> Self {
		Self { catalog, sections }
	}

	/// Reads `path` and extracts every section it contains
	pub fn extract_file(&self, path: &Path) -> Result<Vec<SectionStats>> {
		let text = read_stats(path)?;
		Ok(self.extract(&text))
	}

	/// Extracts every section of `text`, in source order
	///
	/// Never fails: unmatched or unparsable stats become zero counts.
	pub fn extract(&self, text: &str) -> Vec<SectionStats> {
		let regions = match self.sections {
			SectionMode::Single => vec![text.trim()],
			SectionMode::Multi => split_sections(text),
		};

		info!("Found {} simulation sections", regions.len());

		regions
			.into_iter()
			.enumerate()
			.map(|(i, region)| self.extract_section(i + 1, region))
			.collect()
	}

	/// Extracts counts and elapsed time from a single section
	pub fn extract_section(&self, index: usize, text: &str) -> SectionStats {
		let mut counts = ComponentCounts::with_capacity(self.catalog.rules().len());

		for rule in self.catalog.rules() {
			let count = match rule.pattern.captures(text).and_then(|caps| caps.get(1)) {
				Some(value) => match value.as_str().parse::<u64>() {
					Ok(count) => {
						debug!("Section {} - {}: {}", index, rule.component, count);
						count
					},
					Err(e) => {
						error!(
							"Error converting value for {} in section {}: {}",
							rule.component, index, e
						);
						0
					},
				},
				None => {
					warn!("No match found for {} in section {}", rule.component, index);
					0
				},
			};
			counts.insert(rule.component, count);
		}

		let sim_seconds = self.extract_sim_seconds(index, text);

		SectionStats {
			index,
			counts,
			sim_seconds,
		}
	}

	fn extract_sim_seconds(&self, index: usize, text: &str) -> Option<f64> {
		let required = self.catalog.computation_mode().requires_elapsed_time();

		let raw = match self.catalog.elapsed_pattern().captures(text).and_then(|caps| caps.get(1)) {
			Some(raw) => raw.as_str(),
			None => {
				// Normalization reports the fatal error itself
				if !required {
					warn!("No simSeconds found for section {}", index);
				}
				return None;
			},
		};

		match raw.parse::<f64>() {
			Ok(seconds) => {
				info!("Sim Seconds for section {}: {}", index, seconds);
				Some(seconds)
			},
			Err(e) => {
				warn!("Unreadable simSeconds '{}' in section {}: {}", raw, index, e);
				None
			},
		}
	}
}
