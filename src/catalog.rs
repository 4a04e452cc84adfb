use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use log::debug;
use regex::Regex;

use crate::constants::SIM_SECONDS_PATTERN;
use crate::error::CatalogError;
use crate::mode::{CoefficientKind, ComputationMode, ModelKind};
use crate::model::{PowerModel, create_power_model};

/// Identifier of one hardware sub-unit counter, e.g. `rob_reads`
pub type ComponentId = &'static str;

/// One per-event coefficient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientEntry {
	pub component: ComponentId,
	pub value: f64,
	pub kind: CoefficientKind,
}

/// A compiled stats pattern with exactly one capture group
#[derive(Debug, Clone)]
pub struct ExtractionRule {
	pub component: ComponentId,
	pub pattern: Regex,
}

/// Leaf level of the group tree
#[derive(Debug, Clone, PartialEq)]
pub struct Subgroup {
	pub name: &'static str,
	pub members: Vec<ComponentId>,
}

/// Top level of the group tree
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
	pub name: &'static str,
	pub subgroups: Vec<Subgroup>,
}

/// Group → subgroup → component hierarchy in declared order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupTree {
	pub groups: Vec<Group>,
}

/// Validated, immutable tables for one power model
///
/// Built once at startup from a [`PowerModel`]. Construction fails unless the
/// coefficient table, the pattern registry and the group tree all describe the
/// same set of components, each exactly once.
#[derive(Clone)]
pub struct PowerCatalog {
	name: &'static str,
	kind: CoefficientKind,
	coefficients: Vec<CoefficientEntry>,
	rules: Vec<ExtractionRule>,
	elapsed: Regex,
	groups: GroupTree,
}

impl Debug for PowerCatalog {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PowerCatalog")
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("components", &self.coefficients.len())
			.field("groups", &self.groups.groups.len())
			.finish()
	}
}

impl PowerCatalog {
	/// Builds the catalog for one of the built-in models
	pub fn for_model(kind: ModelKind) -> Result<Self, CatalogError> {
		Self::new(create_power_model(kind).as_ref())
	}

	/// Compiles and cross-checks the tables of `model`
	pub fn new(model: &dyn PowerModel) -> Result<Self, CatalogError> {
		let kind = model.coefficient_kind();

		let mut coefficients = Vec::with_capacity(model.coefficients().len());
		let mut index = HashMap::new();
		for &(component, value) in model.coefficients() {
			if index.insert(component, coefficients.len()).is_some() {
				return Err(CatalogError::DuplicateComponent(component.to_string()));
			}
			coefficients.push(CoefficientEntry { component, value, kind });
		}

		let mut rules = Vec::with_capacity(model.patterns().len());
		let mut with_pattern = HashSet::new();
		for &(component, pattern) in model.patterns() {
			if !with_pattern.insert(component) {
				return Err(CatalogError::DuplicateComponent(component.to_string()));
			}
			if !index.contains_key(component) {
				return Err(CatalogError::MissingCoefficient(component.to_string()));
			}
			rules.push(ExtractionRule {
				component,
				pattern: compile_rule(component, pattern)?,
			});
		}

		if let Some(entry) = coefficients.iter().find(|e| !with_pattern.contains(e.component)) {
			return Err(CatalogError::MissingPattern(entry.component.to_string()));
		}

		let elapsed = compile_rule("simSeconds", SIM_SECONDS_PATTERN)?;
		let groups = build_group_tree(model, &index)?;

		debug!(
			"Loaded power model '{}': {} components in {} groups",
			model.name(),
			coefficients.len(),
			groups.groups.len()
		);

		Ok(Self {
			name: model.name(),
			kind,
			coefficients,
			rules,
			elapsed,
			groups,
		})
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn coefficient_kind(&self) -> CoefficientKind {
		self.kind
	}

	pub fn computation_mode(&self) -> ComputationMode {
		self.kind.computation_mode()
	}

	/// Coefficients in declaration order
	pub fn coefficients(&self) -> &[CoefficientEntry] {
		&self.coefficients
	}

	pub fn rules(&self) -> &[ExtractionRule] {
		&self.rules
	}

	/// Pattern capturing a section's elapsed simulated time
	pub fn elapsed_pattern(&self) -> &Regex {
		&self.elapsed
	}

	pub fn groups(&self) -> &GroupTree {
		&self.groups
	}
}

fn compile_rule(component: ComponentId, pattern: &str) -> Result<Regex, CatalogError> {
	let regex = Regex::new(pattern).map_err(|e| CatalogError::InvalidPattern {
		component: component.to_string(),
		message: e.to_string(),
	})?;

	// captures_len counts the implicit whole-match group
	let found = regex.captures_len() - 1;
	if found != 1 {
		return Err(CatalogError::CaptureGroups {
			component: component.to_string(),
			found,
		});
	}

	Ok(regex)
}

fn build_group_tree(
	model: &dyn PowerModel,
	index: &HashMap<ComponentId, usize>,
) -> Result<GroupTree, CatalogError> {
	let mut assigned: HashMap<ComponentId, String> = HashMap::new();
	let mut groups = Vec::with_capacity(model.groups().len());

	for &(group_name, subgroup_specs) in model.groups() {
		let mut subgroups = Vec::with_capacity(subgroup_specs.len());

		for &(subgroup_name, members) in subgroup_specs {
			let slot = format!("{}/{}", group_name, subgroup_name);

			for &component in members {
				if !index.contains_key(component) {
					return Err(CatalogError::UnknownMember {
						subgroup: slot,
						component: component.to_string(),
					});
				}
				if let Some(first) = assigned.insert(component, slot.clone()) {
					return Err(CatalogError::MultiplyAssigned {
						component: component.to_string(),
						first,
						second: slot,
					});
				}
			}

			subgroups.push(Subgroup {
				name: subgroup_name,
				members: members.to_vec(),
			});
		}

		groups.push(Group {
			name: group_name,
			subgroups,
		});
	}

	for &(component, _) in model.coefficients() {
		if !assigned.contains_key(component) {
			return Err(CatalogError::Unassigned(component.to_string()));
		}
	}

	Ok(GroupTree { groups })
}
