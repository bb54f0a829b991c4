//! Pipeline metrics for observability
//!
//! Counters describing what happened to messages between the emit call
//! and the sink, plus sink rotation and failure events.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for scribe observability
///
/// # Example
///
/// ```
/// use scribe::ScribeMetrics;
///
/// let metrics = ScribeMetrics::new();
///
/// metrics.record_enqueued();
/// metrics.record_written();
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.written(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ScribeMetrics {
    /// Messages accepted by the gate and placed on the queue
    enqueued: AtomicU64,

    /// Messages rejected by the level gate
    gated_out: AtomicU64,

    /// Lines successfully handed to a sink
    written: AtomicU64,

    /// Lines a sink failed to write
    write_failures: AtomicU64,

    /// Times a producer found the queue full and had to wait
    producer_blocks: AtomicU64,

    /// Daily files opened
    rotations: AtomicU64,

    /// Daily files that could not be opened or closed
    sink_failures: AtomicU64,

    /// Error messages the dispatcher queued about its own sinks
    self_reports: AtomicU64,
}

impl ScribeMetrics {
    pub const fn new() -> Self {
        Self {
            enqueued: AtomicU64::new(0),
            gated_out: AtomicU64::new(0),
            written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            producer_blocks: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            self_reports: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn gated_out(&self) -> u64 {
        self.gated_out.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn producer_blocks(&self) -> u64 {
        self.producer_blocks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn self_reports(&self) -> u64 {
        self.self_reports.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enqueued(&self) {
        self.enqueued.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_gated_out(&self) {
        self.gated_out.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_written(&self) {
        self.written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_producer_block(&self) {
        self.producer_blocks.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_rotation(&self) {
        self.rotations.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_sink_failure(&self) {
        self.sink_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_self_report(&self) {
        self.self_reports.fetch_add(1, Ordering::Relaxed);
    }

    /// Share of dispatched lines that failed to write, as a percentage
    pub fn failure_rate(&self) -> f64 {
        let written = self.written();
        let failed = self.write_failures();
        let total = written + failed;

        if total == 0 {
            0.0
        } else {
            (failed as f64 / total as f64) * 100.0
        }
    }
}
