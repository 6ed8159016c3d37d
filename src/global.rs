//! Process-wide logger instance
//!
//! Applications that prefer to pass a [`Logger`] around can ignore this
//! module entirely. Those that want one logger reachable from anywhere call
//! [`init`] once at startup and use [`logger`] (or the [`log!`](crate::log)
//! macro) afterwards.
//!
//! Initialization happens exactly once per process. When several threads race
//! to initialize, the first one to enter initialization installs its
//! configuration; every other caller gets that same instance back and its own
//! configuration is discarded.

use crate::core::{Logger, LoggerConfig, LoggerError, Result};
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initialize the process-wide logger with `config`, or return the already
/// installed one.
///
/// Only an invalid `config` is an error; losing the race is not.
pub fn init(config: LoggerConfig) -> Result<&'static Logger> {
    let candidate = Logger::new(config)?;
    Ok(LOGGER.get_or_init(|| candidate))
}

/// Like [`init`], but fails if a logger was already installed.
pub fn try_init(config: LoggerConfig) -> Result<&'static Logger> {
    let candidate = Logger::new(config)?;
    let mut installed = false;
    let logger = LOGGER.get_or_init(|| {
        installed = true;
        candidate
    });

    if installed {
        Ok(logger)
    } else {
        Err(LoggerError::config("global logger", "already initialized"))
    }
}

/// The process-wide logger, initialized with [`LoggerConfig::default`]
/// (logging disabled) if [`init`] has not run yet.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::with_defaults)
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}
