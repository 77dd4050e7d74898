//! Cycle transitions
//!
//! Closing a cycle folds its counters into the lifetime totals, derives
//! the report, and zeroes the cycle counters, all under one lock. The
//! label is read while that lock is held; the report is written only
//! after it is released.

use super::aggregator::HitRateAggregator;
use super::report::ReportLine;
use std::io::Write;
use tracing::warn;

impl HitRateAggregator {
    /// Close the current cycle and return its report without emitting it
    pub fn flush(&self) -> ReportLine {
        let (cache_label, cycle, lifetime) = {
            let mut counters = self.inner.counters.lock();
            let cache_label = self.cache_label();
            let (cycle, lifetime) = counters.close_cycle();
            (cache_label, cycle, lifetime)
        };
        ReportLine::new(cache_label, cycle, lifetime)
    }

    /// Close the current cycle and write its report line to stderr
    pub fn flush_and_report(&self) -> ReportLine {
        let report = self.flush();
        write_report(&mut std::io::stderr().lock(), &report);
        report
    }

    /// Close the current cycle and write its report line to `writer`.
    ///
    /// A failed write is logged and otherwise ignored; the cycle is closed
    /// either way.
    pub fn flush_and_report_to<W: Write>(&self, writer: &mut W) -> ReportLine {
        let report = self.flush();
        write_report(writer, &report);
        report
    }
}

fn write_report<W: Write>(writer: &mut W, report: &ReportLine) {
    if let Err(e) = writeln!(writer, "{report}").and_then(|()| writer.flush()) {
        warn!("Failed to write hit-rate report: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_written_as_single_line() {
        let aggregator = HitRateAggregator::new("cache-A");
        aggregator.record(true, 1.0);

        let mut buffer = Vec::new();
        let report = aggregator.flush_and_report_to(&mut buffer);
        let written = String::from_utf8(buffer).unwrap();

        assert_eq!(written, format!("{report}\n"));
        assert_eq!(written.lines().count(), 1);
    }

    #[test]
    fn test_write_failure_still_closes_cycle() {
        let aggregator = HitRateAggregator::new("cache-A");
        aggregator.record(false, 0.0);

        let report = aggregator.flush_and_report_to(&mut BrokenWriter);

        assert_eq!(report.cycle.miss_count, 1);
        assert_eq!(aggregator.snapshot().cycle_misses, 0);
        assert_eq!(aggregator.snapshot().total_misses, 1);
    }

    #[test]
    fn test_cycle_closes_while_stderr_is_held() {
        let aggregator = HitRateAggregator::new("stderr-held");
        aggregator.record(true, 1.0);

        let stderr = io::stderr();
        let held = stderr.lock();

        let (done_tx, done_rx) = mpsc::channel();
        let reporter = aggregator.clone();
        let handle = thread::spawn(move || {
            let report = reporter.flush_and_report();
            let _ = done_tx.send(());
            report
        });

        // The cycle must close even though the report cannot be written yet
        let mut closed = false;
        for _ in 0..500 {
            if aggregator.snapshot().total_hits == 1 {
                closed = true;
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert!(closed);
        assert_eq!(aggregator.snapshot().cycle_hits, 0);
        assert!(done_rx.try_recv().is_err());

        drop(held);
        let report = handle.join().unwrap();
        assert_eq!(report.cycle.hit_count, 1);
    }

    #[test]
    fn test_label_change_before_flush_is_reported() {
        let aggregator = HitRateAggregator::new("before");
        aggregator.record(false, 0.0);
        aggregator.configure("after");

        let report = aggregator.flush();
        assert_eq!(report.cache_label, "after");
        assert_eq!(report.cycle.miss_count, 1);
        assert_eq!(aggregator.flush().cache_label, "after");
    }

    #[test]
    fn test_flush_and_report_to_stderr() {
        let aggregator = HitRateAggregator::new("stderr");
        aggregator.record(true, 0.0);
        let report = aggregator.flush_and_report();
        assert_eq!(report.lifetime.hit_count, 1);
    }
}
