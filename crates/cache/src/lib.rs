//! Cache hit-rate telemetry for hitrate
//!
//! This crate aggregates the two signals an interception layer produces for
//! every intercepted file open (hit or miss, plus preload latency) into
//! per-cycle and lifetime counters, and renders one status line per
//! reporting cycle:
//! - Explicitly constructed, shareable aggregator handle
//! - Serialised cycle transitions (no lost updates)
//! - Optional periodic reporter on the tokio runtime

pub mod config;
pub mod metrics;

pub use config::{AggregatorConfig, AggregatorConfigBuilder};
pub use hitrate_core::{Error, Result};
pub use metrics::*;
