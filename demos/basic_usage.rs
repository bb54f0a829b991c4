//! Basic scribe usage example
//!
//! Demonstrates the message types, the level gate, and the emit macros on
//! the console.
//!
//! Run with: cargo run --example basic_usage

use scribe::prelude::*;

fn main() -> Result<()> {
    println!("=== Scribe - Basic Usage Example ===\n");

    let scribe = Scribe::builder().level(LogLevel::Debug).colors(true).build()?;

    println!("1. One line per message type:");
    scribe.progress(LogLevel::Debug, "loading configuration");
    scribe.done(LogLevel::Normal, "configuration loaded");
    scribe.info(LogLevel::Normal, "listening on port 8080");
    scribe.warning(LogLevel::Normal, "TLS is disabled");
    scribe.error(LogLevel::Error, "could not reach the metrics endpoint");
    scribe.request(LogLevel::Debug, "GET /index.html");
    scribe.resolve(LogLevel::Debug, "200 OK");
    scribe.connect(LogLevel::Normal, "client 7");
    scribe.mount(LogLevel::Normal, "/srv/data");
    scribe.disconnect(LogLevel::Normal, "client 7");
    scribe.unmount(LogLevel::Normal, "/srv/data");
    scribe.bind(LogLevel::Normal, "0.0.0.0:8080");
    scribe.unbind(LogLevel::Normal, "0.0.0.0:8080");
    scribe.flush()?;

    println!("\n2. Raising the gate to Error hides Debug and Normal messages:");
    scribe.set_level(LogLevel::Error);
    scribe.info(LogLevel::Normal, "hidden");
    scribe.progress(LogLevel::Debug, "hidden too");
    scribe.error(LogLevel::Error, "still visible");
    scribe.flush()?;

    println!("\n3. Macros join any printable values with spaces:");
    scribe.set_level(LogLevel::Normal);
    let elapsed_ms = 42;
    scribe::info!(scribe, LogLevel::Normal, "request took", elapsed_ms, "ms");
    scribe::warning!(scribe, LogLevel::Normal, "disk", 93, "% full");
    scribe.flush()?;

    let metrics = scribe.metrics();
    println!(
        "\nwritten: {}, filtered: {}",
        metrics.written(),
        metrics.gated_out()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
