//! File logging example
//!
//! Demonstrates switching from the console to daily log files and back.
//!
//! Run with: cargo run --example file_logging

use scribe::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Scribe - File Logging Example ===\n");

    let directory = std::env::temp_dir().join("scribe-demo");

    let scribe = Scribe::builder()
        .on_rotate(Arc::new(|closed: &std::path::Path| {
            println!("closed {}", closed.display());
        }))
        .build()?;

    println!("1. Console output before a directory is set:");
    scribe.info(LogLevel::Normal, "application starting");
    scribe.flush()?;

    println!("\n2. Logging to {}:", directory.display());
    scribe.set_directory(&directory)?;
    scribe.info(LogLevel::Normal, "application started");
    scribe.connect(LogLevel::Normal, "database connection established");

    for i in 1..=5 {
        scribe::progress!(scribe, LogLevel::Normal, "processing item", i, "of 5");
        if i == 3 {
            scribe.warning(LogLevel::Normal, "item 3 took longer than expected");
        }
    }

    scribe.done(LogLevel::Normal, "all operations completed");
    scribe.flush()?;

    println!("\n3. Back to the console:");
    scribe.unset_directory()?;
    scribe.info(LogLevel::Normal, "file logging stopped");
    scribe.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!(
        "Check '{}' for today's log file",
        directory.join(scribe::sinks::daily_file_name(chrono::Local::now().date_naive())).display()
    );

    Ok(())
}
