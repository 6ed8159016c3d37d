//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// A destination for composed blocks.
///
/// `block` is the complete framed text; `level` is passed along for
/// appenders that decorate output per level.
pub trait Appender: Send + Sync {
    fn append(&mut self, level: LogLevel, block: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
