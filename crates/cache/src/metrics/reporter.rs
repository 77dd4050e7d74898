//! Periodic reporting task
//!
//! Drives `flush_and_report` on a fixed interval from the tokio runtime
//! until shut down.

use super::aggregator::HitRateAggregator;
use super::report::ReportLine;
use crate::config::AggregatorConfig;
use hitrate_core::{Error, Result};
use hitrate_utils::cycle_span;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Background task that closes one cycle per interval
pub struct HitRateReporter {
    aggregator: HitRateAggregator,
    interval: Duration,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl HitRateReporter {
    /// Start reporting every `interval`.
    ///
    /// Returns `None` without spawning anything when `interval` is zero.
    /// Must be called from within a tokio runtime.
    pub fn spawn(aggregator: HitRateAggregator, interval: Duration) -> Option<Self> {
        // Don't start the reporter if interval is zero (useful for tests)
        if interval == Duration::ZERO {
            debug!("Hit-rate reporter disabled: zero interval");
            return None;
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let task_aggregator = aggregator.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let span = cycle_span(&task_aggregator.cache_label());
                        span.in_scope(|| task_aggregator.flush_and_report());
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        info!(
            cache_label = %aggregator.cache_label(),
            interval_secs = interval.as_secs_f64(),
            "Hit-rate reporter started"
        );

        Some(Self {
            aggregator,
            interval,
            shutdown_tx,
            handle,
        })
    }

    /// Start reporting on the configured interval
    pub fn from_config(aggregator: HitRateAggregator, config: &AggregatorConfig) -> Option<Self> {
        Self::spawn(aggregator, config.report_interval)
    }

    /// Reporting interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stop the task and report the trailing partial cycle
    pub async fn shutdown(self) -> Result<ReportLine> {
        // The task may already be gone; the join below reports why
        let _ = self.shutdown_tx.send(true);
        self.handle
            .await
            .map_err(|e| Error::reporter(format!("reporter task failed: {e}")))?;

        let report = self.aggregator.flush_and_report();
        info!("Hit-rate reporter stopped");
        Ok(report)
    }
}
