use crate::mode::{CoefficientKind, ModelKind};
use crate::model::{CoefficientSpec, GroupSpec, PatternSpec, PowerModel};

/// Power-per-event model over aggregate execution counters
///
/// Each count is multiplied straight into watts, so `simSeconds` is never
/// consulted.
#[derive(Debug, Clone, Copy)]
pub struct GenericModel;

const COEFFICIENTS: &[CoefficientSpec] = &[
	("integer_alu", 0.5),
	("integer_multiply", 0.7),
	("integer_divide", 1.2),
	("fp_alu", 0.8),
	("fp_multiply", 1.0),
	("fp_divide", 1.5),
	("branch_predictor", 0.3),
	("btb", 0.2),
	("ras", 0.15),
	("instruction_fetch", 0.4),
	("instruction_decode", 0.3),
	("instruction_issue", 0.35),
	("l1_dcache_read", 0.2),
	("l1_dcache_write", 0.25),
	("l1_icache_read", 0.15),
	("l2_cache_read", 0.4),
	("l2_cache_write", 0.45),
	("integer_register_file", 0.1),
	("fp_register_file", 0.15),
	("register_read", 0.05),
	("register_write", 0.06),
];

const PATTERNS: &[PatternSpec] = &[
	("integer_alu", r"system\.cpu\.exec_context\.number_of_integer_alu_accesses\s*(\d+)"),
	("integer_multiply", r"system\.cpu\.exec_context\.number_of_integer_multiply_accesses\s*(\d+)"),
	("integer_divide", r"system\.cpu\.exec_context\.number_of_integer_divide_accesses\s*(\d+)"),
	("fp_alu", r"system\.cpu\.exec_context\.number_of_fp_alu_accesses\s*(\d+)"),
	("fp_multiply", r"system\.cpu\.exec_context\.number_of_fp_multiply_accesses\s*(\d+)"),
	("fp_divide", r"system\.cpu\.exec_context\.number_of_fp_divide_accesses\s*(\d+)"),
	("branch_predictor", r"system\.cpu\.branchPred\.num_predictions\s*(\d+)"),
	("btb", r"system\.cpu\.branchPred\.btb\.hits\s*(\d+)"),
	("ras", r"system\.cpu\.branchPred\.ras\.used\s*(\d+)"),
	("instruction_fetch", r"system\.cpu\.icache\.overall_hits::total\s*(\d+)"),
	("instruction_decode", r"system\.cpu\.instruction_decoder\.total_instructions\s*(\d+)"),
	("instruction_issue", r"system\.cpu\.instruction_issue\.total_instructions\s*(\d+)"),
	("l1_dcache_read", r"system\.cpu\.dcache\.overall_hits::Read\s*(\d+)"),
	("l1_dcache_write", r"system\.cpu\.dcache\.overall_hits::Write\s*(\d+)"),
	("l1_icache_read", r"system\.cpu\.icache\.overall_hits::Read\s*(\d+)"),
	("l2_cache_read", r"system\.l2\.overall_hits::Read\s*(\d+)"),
	("l2_cache_write", r"system\.l2\.overall_hits::Write\s*(\d+)"),
	("integer_register_file", r"system\.cpu\.int_regfile_reads\s*(\d+)"),
	("fp_register_file", r"system\.cpu\.fp_regfile_reads\s*(\d+)"),
	("register_read", r"system\.cpu\.total_register_reads\s*(\d+)"),
	("register_write", r"system\.cpu\.total_register_writes\s*(\d+)"),
];

const GROUPS: &[GroupSpec] = &[
	(
		"Compute",
		&[
			(
				"Integer Operations",
				&["integer_alu", "integer_multiply", "integer_divide"],
			),
			("Floating Point Operations", &["fp_alu", "fp_multiply", "fp_divide"]),
		],
	),
	(
		"Control Flow",
		&[
			("Branch Prediction", &["branch_predictor", "btb", "ras"]),
			(
				"Instruction Processing",
				&["instruction_fetch", "instruction_decode", "instruction_issue"],
			),
		],
	),
	(
		"Memory",
		&[
			("Cache Reads", &["l1_dcache_read", "l1_icache_read", "l2_cache_read"]),
			("Cache Writes", &["l1_dcache_write", "l2_cache_write"]),
		],
	),
	(
		"Register Management",
		&[(
			"Register Operations",
			&[
				"integer_register_file",
				"fp_register_file",
				"register_read",
				"register_write",
			],
		)],
	),
];

impl PowerModel for GenericModel {
	fn name(&self) -> &'static str {
		ModelKind::Generic.as_str()
	}

	fn coefficient_kind(&self) -> CoefficientKind {
		CoefficientKind::PowerPerEvent
	}

	fn coefficients(&self) -> &'static [CoefficientSpec] {
		COEFFICIENTS
	}

	fn patterns(&self) -> &'static [PatternSpec] {
		PATTERNS
	}

	fn groups(&self) -> &'static [GroupSpec] {
		GROUPS
	}

	fn clone_box(&self) -> Box<dyn PowerModel> {
		Box::new(*self)
	}
}
