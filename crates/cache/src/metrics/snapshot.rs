//! Point-in-time view of the aggregator
//!
//! Taking a snapshot never closes a cycle.

use super::aggregator::HitRateAggregator;

/// A copy of every counter at a point in time
#[derive(Debug, Clone)]
pub struct AggregatorSnapshot {
    pub cache_label: String,
    pub cycle_hits: u64,
    pub cycle_misses: u64,
    pub cycle_preload_seconds: f64,
    pub total_requests: u64,
    pub total_hits: u64,
    pub total_misses: u64,
    pub total_preload_seconds: f64,
}

impl HitRateAggregator {
    /// Take a snapshot of current counters
    pub fn snapshot(&self) -> AggregatorSnapshot {
        let guard = self.inner.counters.lock();
        let cache_label = self.cache_label();
        let counters = *guard;
        drop(guard);

        AggregatorSnapshot {
            cache_label,
            cycle_hits: counters.cycle_hits,
            cycle_misses: counters.cycle_misses,
            cycle_preload_seconds: counters.cycle_preload_seconds,
            total_requests: counters.total_requests,
            total_hits: counters.total_hits,
            total_misses: counters.total_misses,
            total_preload_seconds: counters.total_preload_seconds,
        }
    }
}
