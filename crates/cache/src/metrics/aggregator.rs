//! Core aggregator structures
//!
//! The aggregator is a cheap-to-clone handle over shared state. One mutex
//! guards the whole counter group so that a cycle transition never
//! interleaves with a concurrent `record`.

use super::report::CycleMetrics;
use crate::config::AggregatorConfig;
use hitrate_core::DEFAULT_CACHE_LABEL;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::debug;

/// Cache hit-rate aggregator shared between the interception layer and the
/// reporting schedule
#[derive(Debug, Clone)]
pub struct HitRateAggregator {
    pub(crate) inner: Arc<AggregatorInner>,
}

#[derive(Debug)]
pub(crate) struct AggregatorInner {
    pub(crate) cache_label: RwLock<String>,
    pub(crate) counters: Mutex<Counters>,
}

/// Cycle and lifetime counters, always mutated under one lock
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Counters {
    // Current cycle
    pub(crate) cycle_hits: u64,
    pub(crate) cycle_misses: u64,
    pub(crate) cycle_preload_seconds: f64,

    // Lifetime, advanced only when a cycle closes
    pub(crate) total_requests: u64,
    pub(crate) total_hits: u64,
    pub(crate) total_misses: u64,
    pub(crate) total_preload_seconds: f64,
}

impl Counters {
    /// Fold the current cycle into the lifetime totals and start a new one.
    ///
    /// Returns the metrics of the closed cycle and the updated lifetime
    /// metrics.
    pub(crate) fn close_cycle(&mut self) -> (CycleMetrics, CycleMetrics) {
        let cycle = CycleMetrics::compute(
            self.cycle_hits,
            self.cycle_misses,
            self.cycle_preload_seconds,
        );

        self.total_requests += cycle.request_count;
        self.total_hits += self.cycle_hits;
        self.total_misses += self.cycle_misses;
        self.total_preload_seconds += self.cycle_preload_seconds;

        let lifetime = CycleMetrics::compute(
            self.total_hits,
            self.total_misses,
            self.total_preload_seconds,
        );
        debug_assert_eq!(lifetime.request_count, self.total_requests);

        self.cycle_hits = 0;
        self.cycle_misses = 0;
        self.cycle_preload_seconds = 0.0;

        (cycle, lifetime)
    }
}

impl HitRateAggregator {
    /// Create a new aggregator reporting under `cache_label`
    pub fn new(cache_label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AggregatorInner {
                cache_label: RwLock::new(cache_label.into()),
                counters: Mutex::new(Counters::default()),
            }),
        }
    }

    /// Create an aggregator from loaded configuration
    pub fn from_config(config: &AggregatorConfig) -> Self {
        Self::new(config.cache_label.clone())
    }

    /// Set the cache label used in reports. Last write wins.
    pub fn configure(&self, cache_label: impl Into<String>) {
        let cache_label = cache_label.into();
        debug!(cache_label = %cache_label, "configured hit-rate aggregator");
        *self.inner.cache_label.write() = cache_label;
    }

    /// Current cache label
    pub fn cache_label(&self) -> String {
        self.inner.cache_label.read().clone()
    }
}

impl Default for HitRateAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_LABEL)
    }
}
