use crate::mode::{ModelKind, SectionMode};

/// Settings for one analysis run
///
/// The computation mode is not configurable on its own: it follows from the
/// unit of the selected model's coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisConfig {
	/// Which built-in coefficient/pattern/group tables to use
	pub model: ModelKind,

	/// Whether to split the report on section markers
	pub sections: SectionMode,
}

impl AnalysisConfig {
	pub fn new(model: ModelKind, sections: SectionMode) -> Self {
		Self { model, sections }
	}
}
