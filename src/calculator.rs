use crate::catalog::PowerCatalog;
use crate::error::{Error, Result};
use crate::mode::ComputationMode;
use crate::power::PowerResult;
use crate::stats::SectionStats;

/// Converts one section's event counts into per-component watts
///
/// Each coefficient's unit picks the formula:
///
/// * `PowerPerEvent` - `count * watts_per_event`
/// * `EnergyPerEvent` - `count * joules_per_event / sim_seconds`
///
/// Components missing from `stats.counts` are left out of the result.
/// Normalization fails if the section has no positive `simSeconds`, or if a
/// component's power is not finite.
pub fn calculate_power(catalog: &PowerCatalog, stats: &SectionStats) -> Result<PowerResult> {
	let sim_seconds = if catalog.computation_mode().requires_elapsed_time() {
		Some(elapsed_seconds(stats)?)
	} else {
		None
	};

	let mut power = PowerResult::new();

	for entry in catalog.coefficients() {
		let Some(&count) = stats.counts.get(entry.component) else {
			continue;
		};
		let energy = count as f64 * entry.value;

		let watts = match (entry.kind.computation_mode(), sim_seconds) {
			(ComputationMode::Direct, _) => energy,
			(ComputationMode::Normalized, Some(seconds)) => energy / seconds,
			(ComputationMode::Normalized, None) => {
				return Err(Error::MissingElapsedTime { section: stats.index });
			},
		};

		if !watts.is_finite() {
			return Err(Error::PowerOverflow {
				section: stats.index,
				component: entry.component.to_string(),
			});
		}

		power.insert(entry.component, watts);
	}

	Ok(power)
}

/// Elapsed time usable as a divisor, or the reason it is not
fn elapsed_seconds(stats: &SectionStats) -> Result<f64> {
	match stats.sim_seconds {
		None => Err(Error::MissingElapsedTime { section: stats.index }),
		Some(seconds) if seconds.is_finite() && seconds > 0.0 => Ok(seconds),
		Some(seconds) => Err(Error::InvalidElapsedTime {
			section: stats.index,
			value: seconds,
		}),
	}
}
