use crate::catalog::GroupTree;
use crate::power::PowerResult;

/// Power of one subgroup, in watts
#[derive(Debug, Clone, PartialEq)]
pub struct SubgroupPower {
	pub name: &'static str,
	pub total: f64,
}

/// Power of one group and its subgroup breakdown, in watts
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPower {
	pub name: &'static str,
	pub total: f64,
	pub subgroups: Vec<SubgroupPower>,
}

/// Hierarchical power totals of one section, in group tree order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupReport {
	pub groups: Vec<GroupPower>,
}

impl GroupReport {
	/// Total system power: the sum of all group totals
	pub fn grand_total(&self) -> f64 {
		self.groups.iter().map(|group| group.total).sum()
	}

	pub fn group(&self, name: &str) -> Option<&GroupPower> {
		self.groups.iter().find(|group| group.name == name)
	}
}

impl GroupPower {
	pub fn subgroup(&self, name: &str) -> Option<&SubgroupPower> {
		self.subgroups.iter().find(|subgroup| subgroup.name == name)
	}
}

/// Folds individual component power into the group tree
///
/// Components without a power value contribute nothing.
pub fn aggregate(power: &PowerResult, tree: &GroupTree) -> GroupReport {
	let groups = tree
		.groups
		.iter()
		.map(|group| {
			let subgroups: Vec<SubgroupPower> = group
				.subgroups
				.iter()
				.map(|subgroup| SubgroupPower {
					name: subgroup.name,
					total: subgroup
						.members
						.iter()
						.map(|component| power.get(component).unwrap_or(0.0))
						.sum(),
				})
				.collect();

			GroupPower {
				name: group.name,
				total: subgroups.iter().map(|subgroup| subgroup.total).sum(),
				subgroups,
			}
		})
		.collect();

	GroupReport { groups }
}
