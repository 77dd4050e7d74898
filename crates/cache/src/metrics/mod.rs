//! Hit-rate aggregation and reporting
//!
//! This module tracks cache hits, misses and preload latency for the
//! current reporting cycle and across the process lifetime, and turns
//! each closed cycle into a [`ReportLine`].

mod aggregator;
mod collection;
mod flush;
mod report;
mod reporter;
mod snapshot;

pub use aggregator::HitRateAggregator;
pub use report::{CycleMetrics, ReportLine};
pub use reporter::HitRateReporter;
pub use snapshot::AggregatorSnapshot;
