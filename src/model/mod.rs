pub mod generic;
pub mod o3;

use std::fmt::Debug;

use crate::mode::{CoefficientKind, ModelKind};

/// `(component id, coefficient)` in the unit given by [`PowerModel::coefficient_kind`]
pub type CoefficientSpec = (&'static str, f64);

/// `(component id, pattern)`; the pattern captures the event count in group 1
pub type PatternSpec = (&'static str, &'static str);

/// `(subgroup name, member component ids)`
pub type SubgroupSpec = (&'static str, &'static [&'static str]);

/// `(group name, subgroups in report order)`
pub type GroupSpec = (&'static str, &'static [SubgroupSpec]);

/// Static tables describing one power model
///
/// The three tables are co-indexed by component id. Implementations only
/// declare data; [`PowerCatalog`](crate::catalog::PowerCatalog) checks that the
/// tables agree before any of them is used.
pub trait PowerModel: Debug + Send + Sync {
	/// Short name used in logs
	fn name(&self) -> &'static str;

	/// Unit of every entry in [`coefficients`](PowerModel::coefficients)
	fn coefficient_kind(&self) -> CoefficientKind;

	/// Per-event coefficients, in individual report order
	fn coefficients(&self) -> &'static [CoefficientSpec];

	/// Extraction patterns for the stats report
	fn patterns(&self) -> &'static [PatternSpec];

	/// Group → subgroup → component hierarchy, in report order
	fn groups(&self) -> &'static [GroupSpec];

	/// Clone implementation for trait objects
	fn clone_box(&self) -> Box<dyn PowerModel>;
}

/// Factory function to create the built-in model for `kind`
pub fn create_power_model(kind: ModelKind) -> Box<dyn PowerModel> {
	use crate::model::generic::GenericModel;
	use crate::model::o3::O3EnergyModel;

	match kind {
		ModelKind::O3Energy => Box::new(O3EnergyModel),
		ModelKind::Generic => Box::new(GenericModel),
	}
}
