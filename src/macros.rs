//! Call-site logging macros.
//!
//! Every macro fills in the source file, the enclosing function and the line
//! number, formats its arguments with `format_args!`, and returns the
//! `Result<()>` of [`Logger::write_log`](crate::Logger::write_log).
//!
//! # Examples
//!
//! ```
//! use framed_logger::prelude::*;
//! use framed_logger::{error, info};
//!
//! let logger = Logger::builder().level(LogLevel::Info).build().unwrap();
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
//! ```

/// Path of the function the macro is expanded in, e.g. `my_app::server::run`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::macros::trim_function_name(type_name_of(f))
    }};
}

/// Strip the helper item and any closure frames from a `type_name` path.
#[doc(hidden)]
pub fn trim_function_name(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::f").unwrap_or(raw);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use framed_logger::prelude::*;
/// # let logger = Logger::builder().level(LogLevel::Info).build().unwrap();
/// use framed_logger::write_log;
/// write_log!(logger, LogLevel::Info, "Simple message").unwrap();
/// write_log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! write_log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.write_log(
            $level,
            ::core::file!(),
            $crate::function_name!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::write_log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::write_log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::write_log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::write_log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log through the process-wide logger.
///
/// The global logger is initialized with defaults on first use if
/// [`global::init`](crate::global::init) has not run yet.
///
/// ```
/// use framed_logger::{log, LogLevel};
///
/// // Default global configuration has logging disabled.
/// log!(LogLevel::Debug, "cache hit ratio {:.2}", 0.93).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::write_log!($crate::global::logger(), $level, $($arg)+)
    };
}
