//! Basic logger usage example
//!
//! Demonstrates console logging at different levels and threshold changes.
//!
//! Run with: cargo run --example basic_usage

use framed_logger::prelude::*;
use framed_logger::{debug, error, info, warning};

fn main() -> Result<()> {
    println!("=== Framed Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .level(LogLevel::Info)
        .target(LogTarget::CONSOLE)
        .build()?;

    println!("1. Logging at different levels:");
    error!(logger, "This is an error message")?;
    warning!(logger, "This is a warning message")?;
    debug!(logger, "This is a debug message")?;
    info!(logger, "This is an info message")?;

    println!("\n2. Threshold lowered to WARNING - debug and info won't show:");
    logger.set_level(LogLevel::Warning);
    debug!(logger, "Debug message (hidden)")?;
    info!(logger, "Info message (hidden)")?;
    warning!(logger, "Warning message (visible)")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
