use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`PowerCatalog`](crate::catalog::PowerCatalog)
/// from a model's static tables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
	/// A stats pattern failed to compile
	#[error("invalid pattern for component '{component}': {message}")]
	InvalidPattern { component: String, message: String },

	/// A stats pattern must capture exactly one numeric group
	#[error("pattern for component '{component}' has {found} capture groups, expected 1")]
	CaptureGroups { component: String, found: usize },

	/// A coefficient has no extraction pattern
	#[error("component '{0}' has a coefficient but no stats pattern")]
	MissingPattern(String),

	/// An extraction pattern has no coefficient
	#[error("component '{0}' has a stats pattern but no coefficient")]
	MissingCoefficient(String),

	/// A component id appears twice in the coefficient or pattern table
	#[error("component '{0}' is declared more than once")]
	DuplicateComponent(String),

	/// A coefficient is not assigned to any subgroup
	#[error("component '{0}' is not assigned to any subgroup")]
	Unassigned(String),

	/// A coefficient is assigned to more than one subgroup slot
	#[error("component '{component}' is assigned to both '{first}' and '{second}'")]
	MultiplyAssigned {
		component: String,
		first: String,
		second: String,
	},

	/// A subgroup names a component that has no coefficient
	#[error("subgroup '{subgroup}' names unknown component '{component}'")]
	UnknownMember { subgroup: String, component: String },
}

/// Errors that abort an analysis run
#[derive(Error, Debug)]
pub enum Error {
	/// The stats report could not be opened or read
	#[error("stats file unavailable at {}: {source}", path.display())]
	SourceUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The report could not be written
	#[error("cannot write report to {}: {source}", path.display())]
	OutputUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Energy normalization needs `simSeconds`, which the section lacks
	#[error("simulation section {section} has no simSeconds value, cannot normalize energy to power")]
	MissingElapsedTime { section: usize },

	/// Energy normalization needs a finite, positive `simSeconds`
	#[error("simulation section {section} has simSeconds = {value}, cannot normalize energy to power")]
	InvalidElapsedTime { section: usize, value: f64 },

	/// A component's power is not a finite number
	#[error("simulation section {section}: power of '{component}' is not a finite number")]
	PowerOverflow { section: usize, component: String },

	/// The model's tables are inconsistent
	#[error("inconsistent power model: {0}")]
	Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, Error>;
