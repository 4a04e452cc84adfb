/// Unit of a coefficient table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoefficientKind {
	/// Watts drawn per counted event
	PowerPerEvent,
	/// Joules spent per counted event
	EnergyPerEvent,
}

impl CoefficientKind {
	/// Returns a human-readable unit for the coefficient
	pub fn as_str(&self) -> &'static str {
		match self {
			CoefficientKind::PowerPerEvent => "W/event",
			CoefficientKind::EnergyPerEvent => "J/event",
		}
	}

	/// The only computation that is dimensionally valid for this unit
	pub fn computation_mode(&self) -> ComputationMode {
		match self {
			CoefficientKind::PowerPerEvent => ComputationMode::Direct,
			CoefficientKind::EnergyPerEvent => ComputationMode::Normalized,
		}
	}
}

/// How event counts are turned into watts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputationMode {
	/// `count * watts_per_event`
	Direct,
	/// `count * joules_per_event / sim_seconds`
	Normalized,
}

impl ComputationMode {
	/// Whether this mode divides by the section's elapsed time
	pub fn requires_elapsed_time(&self) -> bool {
		matches!(self, ComputationMode::Normalized)
	}
}

/// How a stats report is split into independent sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionMode {
	/// The whole report is one section, markers are ignored
	Single,
	/// Split on gem5 begin/end markers; no markers means one implicit section
	#[default]
	Multi,
}

/// Built-in power models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelKind {
	/// Energy-per-event model of the O3 pipeline, normalized by `simSeconds`
	#[default]
	O3Energy,
	/// Power-per-event model over aggregate execution counters
	Generic,
}

impl ModelKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ModelKind::O3Energy => "o3-energy",
			ModelKind::Generic => "generic",
		}
	}
}
