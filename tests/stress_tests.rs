//! Stress tests for the bounded queue and the dispatcher
//!
//! These tests verify:
//! - Per-producer ordering with many concurrent producers
//! - Producers block, rather than lose messages, when the queue is full
//! - Sink failure reports never deadlock the dispatcher on a saturated queue

use chrono::{Duration as ChronoDuration, NaiveDate};
use crossbeam_channel::{bounded, Receiver};
use parking_lot::Mutex;
use scribe::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Holds every write until the matching sender is dropped
struct GatedWriter {
    release: Receiver<()>,
    out: Capture,
}

impl Write for GatedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let _ = self.release.recv();
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

/// Every producer's messages come out in the order it sent them
#[test]
fn test_per_producer_order_is_preserved() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let console = Capture::default();
    let scribe = Arc::new(
        Scribe::builder()
            .queue_capacity(4)
            .console(ConsoleSink::with_writer(console.clone()))
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let scribe = Arc::clone(&scribe);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    scribe::info!(scribe, LogLevel::Normal, format!("t{}", t), i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    scribe.flush().unwrap();

    let lines = console.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut next = [0usize; THREADS];
    for line in &lines {
        let mut fields = line.rsplitn(3, ' ');
        let seq: usize = fields.next().unwrap().parse().unwrap();
        let thread_tag = fields.next().unwrap();
        let t: usize = thread_tag.trim_start_matches('t').parse().unwrap();
        assert_eq!(seq, next[t], "thread {} out of order", t);
        next[t] += 1;
    }
    assert!(next.iter().all(|&n| n == PER_THREAD));
    assert_eq!(scribe.metrics().written(), (THREADS * PER_THREAD) as u64);
}

/// A full queue blocks the producer until the dispatcher catches up
#[test]
fn test_full_queue_blocks_producer() {
    let console = Capture::default();
    let (release, wait) = bounded::<()>(0);

    let scribe = Arc::new(
        Scribe::builder()
            .queue_capacity(2)
            .console(ConsoleSink::with_writer(GatedWriter {
                release: wait,
                out: console.clone(),
            }))
            .build()
            .unwrap(),
    );

    let finished = Arc::new(AtomicBool::new(false));
    let producer = {
        let scribe = Arc::clone(&scribe);
        let finished = Arc::clone(&finished);
        thread::spawn(move || {
            for i in 0..5 {
                scribe.info(LogLevel::Normal, format!("message {}", i));
            }
            finished.store(true, Ordering::SeqCst);
        })
    };

    // One message is stuck in the writer, two fill the queue, the fourth waits
    assert!(wait_until(Duration::from_secs(5), || {
        scribe.metrics().producer_blocks() >= 1
    }));
    thread::sleep(Duration::from_millis(50));
    assert!(!finished.load(Ordering::SeqCst), "producer should be blocked");
    assert!(console.lines().is_empty());

    drop(release);
    producer.join().unwrap();
    scribe.flush().unwrap();

    let lines = console.lines();
    assert_eq!(lines.len(), 5);
    for (i, line) in lines.iter().enumerate() {
        assert!(line.ends_with(&format!("(i) message {}", i)), "{}", line);
    }
    assert_eq!(scribe.metrics().enqueued(), 5);
}

/// Failure reports on a queue of one slot, with producers competing for it
#[test]
fn test_self_reports_on_saturated_queue() {
    const DAYS: i64 = 20;
    const THREADS: usize = 4;
    const PER_THREAD: usize = 10;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, b"file").unwrap();

    let console = Capture::default();
    let clock = ManualClock::new(
        NaiveDate::from_ymd_opt(2024, 2, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    );

    let mut scribe = Scribe::builder()
        .queue_capacity(1)
        .clock(clock.clone())
        .directory(blocker.join("logs"))
        .console(ConsoleSink::with_writer(console.clone()))
        .build()
        .unwrap();

    for day in 0..DAYS {
        if day > 0 {
            clock.advance(ChronoDuration::days(1));
        }
        thread::scope(|s| {
            for t in 0..THREADS {
                let scribe = &scribe;
                s.spawn(move || {
                    for i in 0..PER_THREAD {
                        scribe.info(LogLevel::Normal, format!("t{} {}", t, i));
                    }
                });
            }
        });
        scribe.flush().unwrap();
    }
    assert!(scribe.shutdown(Duration::from_secs(10)));

    let lines = console.lines();
    let info = lines.iter().filter(|l| l.split(' ').nth(2) == Some("(i)")).count();
    let errors = lines.iter().filter(|l| l.split(' ').nth(2) == Some("ERR")).count();

    assert_eq!(info, DAYS as usize * THREADS * PER_THREAD);
    assert_eq!(errors, DAYS as usize);
    assert_eq!(scribe.metrics().sink_failures(), DAYS as u64);
    assert_eq!(scribe.metrics().self_reports(), DAYS as u64);
}

/// Level changes racing with producers never corrupt the gate
#[test]
fn test_concurrent_level_changes() {
    let scribe = Arc::new(
        Scribe::builder()
            .console(ConsoleSink::with_writer(io::sink()))
            .build()
            .unwrap(),
    );

    let setter = {
        let scribe = Arc::clone(&scribe);
        thread::spawn(move || {
            for round in 0..1000 {
                let level = LogLevel::ALL[round % LogLevel::ALL.len()];
                scribe.set_level(level);
            }
        })
    };
    let producer = {
        let scribe = Arc::clone(&scribe);
        thread::spawn(move || {
            for i in 0..1000 {
                scribe.warning(LogLevel::Error, i.to_string());
            }
        })
    };
    setter.join().unwrap();
    producer.join().unwrap();
    scribe.flush().unwrap();

    let metrics = scribe.metrics();
    assert_eq!(metrics.enqueued() + metrics.gated_out(), 1000);
    assert_eq!(metrics.written(), metrics.enqueued());
}
