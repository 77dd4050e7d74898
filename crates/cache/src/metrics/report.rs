//! Report line rendering
//!
//! One line per closed cycle, written to the diagnostic stream.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Timestamp layout used in the rendered line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Derived metrics for one cycle, or for the whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleMetrics {
    pub request_count: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    /// Percentage in `0.0..=100.0`
    pub hit_rate: f64,
    /// Percentage in `0.0..=100.0`
    pub miss_rate: f64,
    pub avg_preload_seconds: f64,
}

impl CycleMetrics {
    /// Derive rates and the average preload time.
    ///
    /// An empty window divides by 1 instead of 0, so every rate comes out
    /// as zero. The reported `request_count` stays the true count.
    pub fn compute(hits: u64, misses: u64, preload_seconds: f64) -> Self {
        let request_count = hits + misses;
        let divisor = request_count.max(1) as f64;

        Self {
            request_count,
            hit_count: hits,
            miss_count: misses,
            hit_rate: hits as f64 / divisor * 100.0,
            miss_rate: misses as f64 / divisor * 100.0,
            avg_preload_seconds: preload_seconds / divisor,
        }
    }
}

impl fmt::Display for CycleMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request_count:{} hit_count:{} miss_count:{} hit_rate:{:.2}% miss_rate:{:.2}% avg_preload_time:{:.2}s",
            self.request_count,
            self.hit_count,
            self.miss_count,
            self.hit_rate,
            self.miss_rate,
            self.avg_preload_seconds
        )
    }
}

/// The status line produced when a cycle closes
#[derive(Debug, Clone, Serialize)]
pub struct ReportLine {
    pub timestamp: DateTime<Local>,
    pub pid: u32,
    pub cache_label: String,
    pub cycle: CycleMetrics,
    pub lifetime: CycleMetrics,
}

impl ReportLine {
    pub(crate) fn new(cache_label: String, cycle: CycleMetrics, lifetime: CycleMetrics) -> Self {
        Self {
            timestamp: Local::now(),
            pid: std::process::id(),
            cache_label,
            cycle,
            lifetime,
        }
    }

    /// Structured form of the report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time:{} pid:{} cache_label:{} cycle_metrics:([{}]) lifetime_metrics:([{}])",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.pid,
            self.cache_label,
            self.cycle,
            self.lifetime
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_rates() {
        let metrics = CycleMetrics::compute(2, 1, 2.0);
        assert_eq!(metrics.request_count, 3);
        assert!((metrics.hit_rate - 66.666_666).abs() < 1e-3);
        assert!((metrics.miss_rate - 33.333_333).abs() < 1e-3);
        assert!((metrics.avg_preload_seconds - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_compute_empty_window() {
        let metrics = CycleMetrics::compute(0, 0, 0.0);
        assert_eq!(metrics.request_count, 0);
        assert_eq!(metrics.hit_rate, 0.0);
        assert_eq!(metrics.miss_rate, 0.0);
        assert_eq!(metrics.avg_preload_seconds, 0.0);
    }

    #[test]
    fn test_cycle_metrics_display() {
        let metrics = CycleMetrics::compute(2, 1, 2.0);
        assert_eq!(
            metrics.to_string(),
            "request_count:3 hit_count:2 miss_count:1 hit_rate:66.67% miss_rate:33.33% avg_preload_time:0.67s"
        );
    }

    #[test]
    fn test_report_line_field_order() {
        let report = ReportLine::new(
            "cache-A".to_string(),
            CycleMetrics::compute(1, 0, 1.0),
            CycleMetrics::compute(3, 1, 3.0),
        );
        let line = report.to_string();

        assert!(line.starts_with("time:"));
        let pid = line.find(&format!("pid:{}", std::process::id())).unwrap();
        let label = line.find("cache_label:cache-A").unwrap();
        let cycle = line.find("cycle_metrics:([request_count:1 hit_count:1 miss_count:0 hit_rate:100.00% miss_rate:0.00% avg_preload_time:1.00s])").unwrap();
        let lifetime = line.find("lifetime_metrics:([request_count:4 hit_count:3 miss_count:1 hit_rate:75.00% miss_rate:25.00% avg_preload_time:0.75s])").unwrap();
        assert!(pid < label && label < cycle && cycle < lifetime);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_report_json() {
        let report = ReportLine::new(
            "cache-A".to_string(),
            CycleMetrics::compute(1, 1, 0.5),
            CycleMetrics::compute(1, 1, 0.5),
        );
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["cache_label"], "cache-A");
        assert_eq!(value["cycle"]["hit_count"], 1);
        assert_eq!(value["lifetime"]["request_count"], 2);
        assert_eq!(value["cycle"]["hit_rate"], 50.0);
    }
}
