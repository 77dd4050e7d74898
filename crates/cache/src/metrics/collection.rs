//! Recording operations
//!
//! Called once per intercepted file open. These never fail and never
//! validate their input; a negative preload time is accepted and skews the
//! reported average.

use super::aggregator::HitRateAggregator;
use std::time::Duration;

impl HitRateAggregator {
    /// Record one intercepted access.
    ///
    /// Preload time is attributed to hits only; for a miss `preload_seconds`
    /// is ignored.
    pub fn record(&self, is_hit: bool, preload_seconds: f64) {
        let mut counters = self.inner.counters.lock();
        if is_hit {
            counters.cycle_hits += 1;
            counters.cycle_preload_seconds += preload_seconds;
        } else {
            counters.cycle_misses += 1;
        }
    }

    /// Record a cache hit with its preload latency
    pub fn record_hit(&self, preload: Duration) {
        self.record(true, preload.as_secs_f64());
    }

    /// Record a cache miss
    pub fn record_miss(&self) {
        self.record(false, 0.0);
    }
}
