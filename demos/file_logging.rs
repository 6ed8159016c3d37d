//! File logging example
//!
//! Demonstrates the process-wide logger writing to console and file at once,
//! then reading the file back.
//!
//! Run with: cargo run --example file_logging

use framed_logger::prelude::*;
use framed_logger::{global, log};

fn main() -> Result<()> {
    println!("=== Framed Logger - File Logging Example ===\n");

    global::init(
        LoggerConfig::new(LogLevel::Info, LogTarget::BOTH).with_path("application.log"),
    )?;

    println!("1. Logging to both console and file:");
    log!(LogLevel::Info, "Application started")?;
    log!(LogLevel::Info, "用户 {} 已登录", "张三")?;
    for i in 1..=3 {
        log!(LogLevel::Debug, "Processing item {}/3", i)?;
    }
    log!(LogLevel::Error, "Failed to load optional plugin")?;

    println!("\n2. Reading the file back:");
    for line in global::logger().read_log_file()? {
        if !line.starts_with('*') && !line.is_empty() {
            println!("   {}", line);
        }
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
