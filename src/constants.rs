// gem5 section markers
pub const SECTION_BEGIN_MARKER: &str = "---------- Begin Simulation Statistics ----------";
pub const SECTION_END_MARKER: &str = "---------- End Simulation Statistics ----------";

// Elapsed simulated time, in seconds
pub const SIM_SECONDS_PATTERN: &str = r"simSeconds\s+([\d.]+)";

// Command line defaults
pub const DEFAULT_STATS_PATH: &str = "m5out/stats.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "O3CPU_Power_Model/O3CPU_power_analysis_results.txt";

// Report layout
pub const REPORT_TITLE: &str = "# O3CPU Power Analysis Results";
pub const SECTION_DIVIDER_WIDTH: usize = 50;
pub const SCIENTIFIC_PRECISION: usize = 6;
pub const FIXED_PRECISION: usize = 4;
