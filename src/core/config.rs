//! Logger configuration (level, targets, file path)

use super::codec::DEFAULT_ENCODING;
use super::log_level::LogLevel;
use super::log_target::LogTarget;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "./Log.txt";

/// Configuration a [`Logger`](super::Logger) starts with.
///
/// The defaults (`NONE` level, no targets) leave logging disabled until the
/// application opts in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub target: LogTarget,
    pub path: PathBuf,
    /// Narrow encoding used for the file target.
    pub encoding: String,
    pub timestamp_format: TimestampFormat,
    /// Upper bound on the rendered message, in characters. `None` means
    /// unbounded.
    pub max_message_len: Option<usize>,
    pub use_colors: bool,
}

impl LoggerConfig {
    pub fn new(level: LogLevel, target: LogTarget) -> Self {
        Self {
            level,
            target,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::None,
            target: LogTarget::NONE,
            path: PathBuf::from(DEFAULT_LOG_FILE),
            encoding: DEFAULT_ENCODING.to_string(),
            timestamp_format: TimestampFormat::default(),
            max_message_len: None,
            use_colors: false,
        }
    }
}
