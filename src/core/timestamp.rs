//! Timestamp formatting utilities
//!
//! Blocks are stamped with local wall-clock time. The default format is the
//! fixed-width `YYYY-MM-DD HH:MM:SS`.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use framed_logger::core::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2023, 2, 9, 8, 5, 3).unwrap();
/// assert_eq!(TimestampFormat::LocalSeconds.format(&at), "2023-02-09 08:05:03");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2023-02-09 08:05:03`, always 19 characters
    #[default]
    LocalSeconds,

    /// `2023-02-09 08:05:03.123`
    LocalMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::LocalSeconds => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::LocalMillis => datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Source of the current local time.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock backed by `chrono::Local::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
