//! # Framed Logger
//!
//! A thread-safe logger that writes each message as a framed, leveled block
//! to the console, a file, or both.
//!
//! ## Features
//!
//! - **Serialized Output**: Blocks from concurrent threads never interleave
//! - **Call-Site Metadata**: Process id, thread id, file, function and line on every block
//! - **Non-ASCII Text**: File output in UTF-8 or a locale encoding such as GBK
//! - **One Logger Per Process**: Optional process-wide instance with one-time initialization
//!
//! ```
//! use framed_logger::prelude::*;
//! use framed_logger::info;
//!
//! let logger = Logger::builder()
//!     .level(LogLevel::Info)
//!     .target(LogTarget::NONE)
//!     .build()
//!     .unwrap();
//!
//! info!(logger, "hello {}", 5).unwrap();
//! assert!(logger.last_block().contains("hello 5"));
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, SharedWriter};
    pub use crate::core::{
        Appender, LogLevel, LogTarget, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result,
        TextCodec, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, SharedWriter};
pub use core::{
    Appender, LogLevel, LogTarget, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result,
    TextCodec, TimeSource, TimestampFormat, DEFAULT_LOG_FILE,
};
