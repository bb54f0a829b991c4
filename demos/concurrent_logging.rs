//! Concurrent logging example
//!
//! Demonstrates many threads sharing one scribe, a small queue applying
//! backpressure, and a clean shutdown.
//!
//! Run with: cargo run --example concurrent_logging

use scribe::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    println!("=== Scribe - Concurrent Logging Example ===\n");

    let scribe = Arc::new(
        Scribe::builder()
            .queue_capacity(4)
            .timestamp_format(TimestampFormat::Iso8601)
            .build()?,
    );

    let start = Instant::now();
    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let scribe = Arc::clone(&scribe);
            thread::spawn(move || {
                for job in 0..5 {
                    scribe::request!(scribe, LogLevel::Normal, "worker", worker, "job", job);
                    thread::sleep(Duration::from_millis(2));
                    scribe::resolve!(scribe, LogLevel::Normal, "worker", worker, "job", job);
                }
            })
        })
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            eprintln!("a worker panicked");
        }
    }
    scribe.flush()?;

    let metrics = scribe.metrics();
    println!("\nElapsed: {:?}", start.elapsed());
    println!("Written: {}", metrics.written());
    println!("Producer waits on a full queue: {}", metrics.producer_blocks());

    match Arc::try_unwrap(scribe) {
        Ok(mut scribe) => {
            let clean = scribe.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
            println!("Clean shutdown: {}", clean);
        }
        Err(_) => eprintln!("scribe still shared, dropping instead"),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
