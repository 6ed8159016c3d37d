//! Main logger implementation
//!
//! A [`Logger`] owns one text buffer and the output targets behind a single
//! readers-writer lock. Every emitted message takes the lock exclusively,
//! rebuilds the buffer as one framed block, and hands it to the targets
//! before releasing, so blocks from concurrent callers never interleave.
//! Reading the log file back takes the same lock shared.
//!
//! The level, target mask and file path live under the same lock, so
//! reconfiguring while other threads log is safe and takes effect from the
//! next block on.

use super::{
    appender::Appender,
    codec::TextCodec,
    config::LoggerConfig,
    dispatcher::output_to_target,
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_target::LogTarget,
    timestamp::{SystemClock, TimeSource, TimestampFormat},
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::RwLock;
use std::fmt::{self, Write as _};
use std::io::Write;
use std::path::PathBuf;

/// Number of marker characters on each side of the level name in a banner.
pub const BANNER_WIDTH: usize = 60;
pub const BANNER_MARKER: char = '*';

struct LoggerState {
    level: LogLevel,
    target: LogTarget,
    timestamp_format: TimestampFormat,
    max_message_len: Option<usize>,
    use_colors: bool,
    /// Most recently composed block. Cleared on every emitted message.
    buffer: String,
    console: ConsoleAppender,
    file: FileAppender,
}

pub struct Logger {
    state: RwLock<LoggerState>,
    clock: Box<dyn TimeSource>,
}

impl Logger {
    /// Create a logger writing console output to stdout.
    ///
    /// Fails if `config.encoding` is not a known encoding label.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::with_parts(config, ConsoleAppender::new(), Box::new(SystemClock))
    }

    fn with_parts(
        config: LoggerConfig,
        console: ConsoleAppender,
        clock: Box<dyn TimeSource>,
    ) -> Result<Self> {
        let codec = TextCodec::for_label(&config.encoding)?;
        Ok(Self::assemble(config, codec, console, clock))
    }

    /// Logger with the default configuration, which cannot fail to build.
    pub(crate) fn with_defaults() -> Self {
        Self::assemble(
            LoggerConfig::default(),
            TextCodec::utf8(),
            ConsoleAppender::new(),
            Box::new(SystemClock),
        )
    }

    fn assemble(
        config: LoggerConfig,
        codec: TextCodec,
        mut console: ConsoleAppender,
        clock: Box<dyn TimeSource>,
    ) -> Self {
        console.set_colors(config.use_colors);

        let state = LoggerState {
            level: config.level,
            target: config.target,
            timestamp_format: config.timestamp_format,
            max_message_len: config.max_message_len,
            use_colors: config.use_colors,
            buffer: String::new(),
            console,
            file: FileAppender::new(config.path).with_codec(codec),
        };

        Self {
            state: RwLock::new(state),
            clock,
        }
    }

    /// Emit one message.
    ///
    /// Returns `Ok(())` without side effects when `level` is more verbose than
    /// the configured threshold. `LogLevel::None` is rejected with
    /// `InvalidLevel`. Target failures are returned after every active target
    /// has been attempted.
    pub fn write_log(
        &self,
        level: LogLevel,
        file: &str,
        function: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        let mut state = self.state.write();

        if level.is_more_verbose_than(state.level) {
            return Ok(());
        }
        let name = level.display_name()?;
        let timestamp = state.timestamp_format.format(&self.clock.now());

        let LoggerState {
            target,
            max_message_len,
            buffer,
            console,
            file: file_appender,
            ..
        } = &mut *state;

        buffer.clear();
        let composed = compose(
            buffer,
            &Block {
                name,
                timestamp: &timestamp,
                pid: std::process::id(),
                tid: current_thread_id(),
                file,
                function,
                line,
                max_message_len: *max_message_len,
            },
            args,
        );
        if let Err(e) = composed {
            // A partial block is never left behind for `last_block`.
            buffer.clear();
            return Err(e);
        }

        output_to_target(*target, level, buffer, console, file_appender)
    }

    /// Read the configured log file back, one entry per line.
    ///
    /// Waits for any in-flight write to finish.
    pub fn read_log_file(&self) -> Result<Vec<String>> {
        let state = self.state.read();
        state.file.read_lines()
    }

    /// Copy of the most recently composed block, empty before the first one.
    pub fn last_block(&self) -> String {
        self.state.read().buffer.clone()
    }

    pub fn level(&self) -> LogLevel {
        self.state.read().level
    }

    pub fn set_level(&self, level: LogLevel) {
        self.state.write().level = level;
    }

    pub fn target(&self) -> LogTarget {
        self.state.read().target
    }

    pub fn set_target(&self, target: LogTarget) {
        self.state.write().target = target;
    }

    pub fn log_file(&self) -> PathBuf {
        self.state.read().file.path().to_path_buf()
    }

    /// Change the file target's path. The path is not checked until the next
    /// write to it.
    pub fn set_log_file(&self, path: impl Into<PathBuf>) {
        self.state.write().file.set_path(path);
    }

    pub fn encoding(&self) -> &'static str {
        self.state.read().file.codec().name()
    }

    /// Switch the narrow encoding of the file target.
    pub fn set_encoding(&self, label: &str) -> Result<()> {
        let codec = TextCodec::for_label(label)?;
        let mut state = self.state.write();
        let path = state.file.path().to_path_buf();
        state.file = FileAppender::new(path).with_codec(codec);
        Ok(())
    }

    pub fn set_max_message_len(&self, max: Option<usize>) {
        self.state.write().max_message_len = max;
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> LoggerConfig {
        let state = self.state.read();
        LoggerConfig {
            level: state.level,
            target: state.target,
            path: state.file.path().to_path_buf(),
            encoding: state.file.codec().name().to_string(),
            timestamp_format: state.timestamp_format.clone(),
            max_message_len: state.max_message_len,
            use_colors: state.use_colors,
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.write();
        state.console.flush()?;
        state.file.flush()?;
        Ok(())
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use framed_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Debug)
    ///     .target(LogTarget::CONSOLE)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.level(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

struct Block<'a> {
    name: &'a str,
    timestamp: &'a str,
    pid: u32,
    tid: u64,
    file: &'a str,
    function: &'a str,
    line: u32,
    max_message_len: Option<usize>,
}

fn push_banner(buffer: &mut String, name: &str) {
    buffer.extend(std::iter::repeat(BANNER_MARKER).take(BANNER_WIDTH));
    buffer.push(' ');
    buffer.push_str(name);
    buffer.push(' ');
    buffer.extend(std::iter::repeat(BANNER_MARKER).take(BANNER_WIDTH));
}

fn compose(buffer: &mut String, block: &Block<'_>, args: fmt::Arguments<'_>) -> Result<()> {
    let format_err = |_| LoggerError::writer("a message argument failed to format");

    buffer.push('\n');
    push_banner(buffer, block.name);
    buffer.push('\n');
    buffer.push_str(block.timestamp);
    write!(
        buffer,
        " [PID : {:<5}] [TID : {:<5}] [{}] [{} : {:<4}] ",
        block.pid, block.tid, block.file, block.function, block.line
    )
    .map_err(format_err)?;

    let message_start = buffer.len();
    buffer.write_fmt(args).map_err(format_err)?;
    if let Some(max) = block.max_message_len {
        if let Some((offset, _)) = buffer[message_start..].char_indices().nth(max) {
            buffer.truncate(message_start + offset);
        }
    }

    buffer.push('\n');
    push_banner(buffer, block.name);
    buffer.push('\n');
    Ok(())
}

/// OS-level id of the calling thread, cached per thread.
fn current_thread_id() -> u64 {
    thread_local! {
        static THREAD_ID: u64 = os_thread_id();
    }
    THREAD_ID.with(|id| *id)
}

#[cfg(target_os = "linux")]
fn os_thread_id() -> u64 {
    // SAFETY: gettid has no preconditions and cannot fail.
    let tid = unsafe { libc::gettid() };
    tid as u64
}

#[cfg(not(target_os = "linux"))]
fn os_thread_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use framed_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Warning)
///     .target(LogTarget::BOTH)
///     .path("./app.log")
///     .encoding("chs")
///     .build()
///     .unwrap();
/// assert_eq!(logger.encoding(), "GBK");
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console_writer: Option<Box<dyn Write + Send + Sync>>,
    clock: Box<dyn TimeSource>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            console_writer: None,
            clock: Box::new(SystemClock),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn target(mut self, target: LogTarget) -> Self {
        self.config.target = target;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Narrow encoding for the file target, e.g. `"UTF-8"` or `"chs"`.
    #[must_use = "builder methods return a new value"]
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.config.encoding = label.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    /// Truncate rendered messages to `max` characters.
    #[must_use = "builder methods return a new value"]
    pub fn max_message_len(mut self, max: usize) -> Self {
        self.config.max_message_len = Some(max);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = use_colors;
        self
    }

    /// Send console output to `writer` instead of stdout.
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W: Write + Send + Sync + 'static>(mut self, writer: W) -> Self {
        self.console_writer = Some(Box::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock<C: TimeSource + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let console = match self.console_writer {
            Some(writer) => ConsoleAppender::new().with_writer(writer),
            None => ConsoleAppender::new(),
        };
        Logger::with_parts(self.config, console, self.clock)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
