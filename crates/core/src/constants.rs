/// Constants used throughout the hitrate codebase
// Environment variable names
pub const HITRATE_CACHE_LABEL_VAR: &str = "HITRATE_CACHE_LABEL";
pub const HITRATE_REPORT_INTERVAL_VAR: &str = "HITRATE_REPORT_INTERVAL_SECS";
pub const HITRATE_LOG_VAR: &str = "RUST_LOG";

// Label reported before anything has been configured
pub const DEFAULT_CACHE_LABEL: &str = "user memory";

// Reporting cycle length in seconds
pub const DEFAULT_REPORT_INTERVAL_SECS: u64 = 60;

// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
