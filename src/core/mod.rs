//! Core logger types and traits

pub mod appender;
pub mod codec;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod log_level;
pub mod log_target;
pub mod logger;
pub mod timestamp;

pub use appender::Appender;
pub use codec::TextCodec;
pub use config::{LoggerConfig, DEFAULT_LOG_FILE};
pub use dispatcher::output_to_target;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_target::LogTarget;
pub use logger::{Logger, LoggerBuilder, BANNER_MARKER, BANNER_WIDTH};
pub use timestamp::{SystemClock, TimeSource, TimestampFormat};
