use crate::mode::{CoefficientKind, ModelKind};
use crate::model::{CoefficientSpec, GroupSpec, PatternSpec, PowerModel};

/// Energy-per-event model of the gem5 O3 pipeline
///
/// Coefficients are joules per access. Their provenance is not documented;
/// treat them as configuration, not as calibrated constants.
#[derive(Debug, Clone, Copy)]
pub struct O3EnergyModel;

const COEFFICIENTS: &[CoefficientSpec] = &[
	// Fetch
	("icache_tag", 9.72e-12),
	("icache_data", 2.28e-10),
	("bp_lookups", 6.88e-11),
	("bp_squashes", 5.12e-11),
	("btb_lookups", 4.57e-10),
	("btb_updates", 1.73e-9),
	("ras_used", 2.41e-11),
	("ras_pushes", 3.54e-11),
	// Decode
	("decoded_instructions", 2.83e-10),
	// Rename
	("rename_int_lookups", 6.31e-12),
	("rename_fp_lookups", 5.18e-12),
	("rename_int_writes", 1.32e-11),
	("rename_fp_writes", 9.76e-12),
	// Issue / execute / writeback
	("float_mem_read", 8.39e-11),
	("float_mem_write", 1.31e-10),
	("mem_read", 1.12e-10),
	("mem_write", 1.84e-10),
	("load_store_forwLoads", 2.58e-10),
	("load_store_rescheduledLoads", 2.58e-10),
	("load_store_write", 2.69e-10),
	("int_alu", 8.5e-10),
	("int_mult", 8.5e-10),
	("int_div", 8.5e-10),
	("float_add", 2.55e-9),
	("float_cmp", 2.55e-9),
	("float_cvt", 2.55e-9),
	("float_mult", 2.55e-9),
	("float_mult_acc", 2.55e-9),
	("float_div", 2.55e-9),
	("float_misc", 2.55e-9),
	("float_sqrt", 2.55e-9),
	("rob_reads", 1.14e-10),
	("rob_writes", 1.74e-10),
	("dcache_tag", 9.72e-12),
	("dcache_data", 2.28e-10),
	// L2
	("l2cache_tag", 9.4e-11),
	("l2cache_data", 1.82e-9),
];

const PATTERNS: &[PatternSpec] = &[
	// Caches
	("icache_tag", r"system\.cpu\.icache\.tags\.tagAccesses\s+(\d+)"),
	("icache_data", r"system\.cpu\.icache\.tags\.dataAccesses\s+(\d+)"),
	("dcache_tag", r"system\.cpu\.dcache\.tags\.tagAccesses\s+(\d+)"),
	("dcache_data", r"system\.cpu\.dcache\.tags\.dataAccesses\s+(\d+)"),
	("l2cache_tag", r"system\.l2cache\.tags\.tagAccesses\s+(\d+)"),
	("l2cache_data", r"system\.l2cache\.tags\.dataAccesses\s+(\d+)"),
	// Decode
	("decoded_instructions", r"system\.cpu\.decode\.decodedInsts\s+(\d+)"),
	// Branch prediction
	("btb_lookups", r"system\.cpu\.branchPred\.BTBLookups\s+(\d+)"),
	("btb_updates", r"system\.cpu\.branchPred\.BTBUpdates\s+(\d+)"),
	("bp_lookups", r"system\.cpu\.branchPred\.lookups_0::total\s+(\d+)"),
	("bp_squashes", r"system\.cpu\.branchPred\.squashes_0::total\s+(\d+)"),
	("ras_used", r"system\.cpu\.branchPred\.ras\.used\s+(\d+)"),
	("ras_pushes", r"system\.cpu\.branchPred\.ras\.pushes\s+(\d+)"),
	// Register file
	("float_mem_read", r"system\.cpu\.statIssuedInstType_0::FloatMemRead\s+(\d+)"),
	("float_mem_write", r"system\.cpu\.statIssuedInstType_0::FloatMemWrite\s+(\d+)"),
	("mem_read", r"system\.cpu\.statIssuedInstType_0::MemRead\s+(\d+)"),
	("mem_write", r"system\.cpu\.statIssuedInstType_0::MemWrite\s+(\d+)"),
	// ROB and rename
	("rob_reads", r"system\.cpu\.rob\.reads\s+(\d+)"),
	("rob_writes", r"system\.cpu\.rob\.writes\s+(\d+)"),
	("rename_int_lookups", r"system\.cpu\.rename\.intLookups\s+(\d+)"),
	("rename_fp_lookups", r"system\.cpu\.rename\.fpLookups\s+(\d+)"),
	("rename_int_writes", r"system\.cpu\.rename\.intWrites\s+(\d+)"),
	("rename_fp_writes", r"system\.cpu\.rename\.fpWrites\s+(\d+)"),
	// Load/store queue
	("load_store_forwLoads", r"system\.cpu\.lsq0\.forwLoads\s+(\d+)"),
	("load_store_rescheduledLoads", r"system\.cpu\.lsq0\.rescheduledLoads\s+(\d+)"),
	("load_store_write", r"system\.cpu\.lsq0\.addedLoadsAndStores\s+(\d+)"),
	// Integer
	("int_alu", r"system\.cpu\.statIssuedInstType_0::IntAlu\s+(\d+)"),
	("int_mult", r"system\.cpu\.statIssuedInstType_0::IntMult\s+(\d+)"),
	("int_div", r"system\.cpu\.statIssuedInstType_0::IntDiv\s+(\d+)"),
	// Floating point
	("float_add", r"system\.cpu\.statIssuedInstType_0::FloatAdd\s+(\d+)"),
	("float_cmp", r"system\.cpu\.statIssuedInstType_0::FloatCmp\s+(\d+)"),
	("float_cvt", r"system\.cpu\.statIssuedInstType_0::FloatCvt\s+(\d+)"),
	("float_mult", r"system\.cpu\.statIssuedInstType_0::FloatMult\s+(\d+)"),
	("float_mult_acc", r"system\.cpu\.statIssuedInstType_0::FloatMultAcc\s+(\d+)"),
	("float_div", r"system\.cpu\.statIssuedInstType_0::FloatDiv\s+(\d+)"),
	("float_misc", r"system\.cpu\.statIssuedInstType_0::FloatMisc\s+(\d+)"),
	("float_sqrt", r"system\.cpu\.statIssuedInstType_0::FloatSqrt\s+(\d+)"),
];

const GROUPS: &[GroupSpec] = &[
	(
		"Fetch",
		&[
			("Icache", &["icache_tag", "icache_data"]),
			("Branch Predictor", &["bp_lookups", "bp_squashes"]),
			("Branch Target Buffer", &["btb_lookups", "btb_updates"]),
			("Return Address Stack", &["ras_used", "ras_pushes"]),
		],
	),
	("Decode", &[("InstructionDecode", &["decoded_instructions"])]),
	(
		"Rename",
		&[(
			"FreeList",
			&[
				"rename_int_lookups",
				"rename_fp_lookups",
				"rename_int_writes",
				"rename_fp_writes",
			],
		)],
	),
	(
		"Issue Execute Writeback",
		&[
			(
				"Register File",
				&["float_mem_read", "float_mem_write", "mem_read", "mem_write"],
			),
			(
				"Load Store Queue Read",
				&["load_store_forwLoads", "load_store_rescheduledLoads"],
			),
			("Load Store Queue Write", &["load_store_write"]),
			("Integer Operations", &["int_alu", "int_mult", "int_div"]),
			(
				"Floating Point Operations",
				&[
					"float_add",
					"float_cmp",
					"float_cvt",
					"float_mult",
					"float_mult_acc",
					"float_div",
					"float_misc",
					"float_sqrt",
				],
			),
			("ROB", &["rob_reads", "rob_writes"]),
			("Dcache", &["dcache_tag", "dcache_data"]),
		],
	),
	("L2Cache", &[("L2", &["l2cache_tag", "l2cache_data"])]),
];

impl PowerModel for O3EnergyModel {
	fn name(&self) -> &'static str {
		ModelKind::O3Energy.as_str()
	}

	fn coefficient_kind(&self) -> CoefficientKind {
		CoefficientKind::EnergyPerEvent
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
