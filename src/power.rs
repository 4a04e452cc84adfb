use std::collections::HashMap;

use crate::catalog::ComponentId;

/// Per-component power of one section, in watts
///
/// Keeps the coefficient table's order so reports list components the same way
/// every run. Components that produced no reading are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerResult {
	entries: Vec<(ComponentId, f64)>,
	index: HashMap<ComponentId, usize>,
}

impl PowerResult {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the power of `component`, replacing any earlier value
	pub fn insert(&mut self, component: ComponentId, watts: f64) {
		match self.index.get(component) {
			Some(&i) => self.entries[i].1 = watts,
			None => {
				self.index.insert(component, self.entries.len());
				self.entries.push((component, watts));
			},
		}
	}

	pub fn get(&self, component: &str) -> Option<f64> {
		self.index.get(component).map(|&i| self.entries[i].1)
	}

	/// Iterates `(component, watts)` in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (ComponentId, f64)> + '_ {
		self.entries.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Sum over every component, independent of any grouping
	pub fn total(&self) -> f64 {
		self.entries.iter().map(|&(_, watts)| watts).sum()
	}
}

impl FromIterator<(ComponentId, f64)> for PowerResult {
	fn from_iter<I: IntoIterator<Item = (ComponentId, f64)>>(iter: I) -> Self {
		let mut result = Self::new();
		for (component, watts) in iter {
			result.insert(component, watts);
		}
		result
	}
}
