//! Log level definitions

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verbosity levels, ordered from silent to most verbose.
///
/// A message at level `L` is emitted when the configured threshold `T`
/// satisfies `L <= T`. `None` is only meaningful as a threshold: it disables
/// all output and has no display name of its own.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LogLevel {
    #[default]
    None = 0,
    Error = 1,
    Warning = 2,
    Debug = 3,
    Info = 4,
}

impl LogLevel {
    /// Name written into the banner lines of a block.
    ///
    /// Fails for `None`, which is a threshold and never a message level.
    pub fn display_name(&self) -> Result<&'static str> {
        match self {
            LogLevel::None => Err(LoggerError::invalid_level("NONE")),
            LogLevel::Error => Ok("ERROR"),
            LogLevel::Warning => Ok("WARNING"),
            LogLevel::Debug => Ok("DEBUG"),
            LogLevel::Info => Ok("INFO"),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
        }
    }

    /// Whether a message at this level is filtered out by `threshold`.
    ///
    /// `None` is never filtered; it fails later in [`display_name`](Self::display_name).
    #[inline]
    pub fn is_more_verbose_than(&self, threshold: LogLevel) -> bool {
        *self > threshold
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::None => White,
            LogLevel::Error => Red,
            LogLevel::Warning => Yellow,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(LogLevel::None),
            1 => Ok(LogLevel::Error),
            2 => Ok(LogLevel::Warning),
            3 => Ok(LogLevel::Debug),
            4 => Ok(LogLevel::Info),
            other => Err(LoggerError::invalid_level(other)),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NONE" | "OFF" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            _ => Err(LoggerError::invalid_level(format!("'{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_by_verbosity() {
        assert!(LogLevel::None < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn test_display_name_rejects_none() {
        assert!(matches!(
            LogLevel::None.display_name(),
            Err(LoggerError::InvalidLevel { .. })
        ));
        assert_eq!(LogLevel::Warning.display_name().unwrap(), "WARNING");
    }

    #[test]
    fn test_is_more_verbose_than() {
        assert!(!LogLevel::Error.is_more_verbose_than(LogLevel::Warning));
        assert!(!LogLevel::Warning.is_more_verbose_than(LogLevel::Warning));
        assert!(LogLevel::Debug.is_more_verbose_than(LogLevel::Warning));
        assert!(LogLevel::Error.is_more_verbose_than(LogLevel::None));
        assert!(!LogLevel::None.is_more_verbose_than(LogLevel::None));
        assert!(!LogLevel::None.is_more_verbose_than(LogLevel::Info));
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(LogLevel::try_from(3).unwrap(), LogLevel::Debug);
        let err = LogLevel::try_from(9).unwrap_err();
        assert_eq!(err.to_string(), "Invalid log level: 9");
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("Info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
