//! Console appender implementation

use crate::core::{Appender, LogLevel, Result};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

pub struct ConsoleAppender {
    use_colors: bool,
    /// `None` writes to the process's standard output.
    writer: Option<Box<dyn Write + Send + Sync>>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            writer: None,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            writer: None,
        }
    }

    /// Redirect console output to `writer` instead of stdout
    ///
    /// # Example
    ///
    /// ```
    /// use framed_logger::appenders::{ConsoleAppender, SharedWriter};
    ///
    /// let captured = SharedWriter::new();
    /// let appender = ConsoleAppender::new().with_writer(captured.clone());
    /// ```
    #[must_use]
    pub fn with_writer<W: Write + Send + Sync + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    pub fn set_colors(&mut self, use_colors: bool) {
        self.use_colors = use_colors;
    }

    fn render<'a>(&self, level: LogLevel, block: &'a str) -> std::borrow::Cow<'a, str> {
        #[cfg(feature = "console")]
        {
            if self.use_colors {
                use colored::Colorize;
                return block.color(level.color_code()).to_string().into();
            }
        }
        let _ = level;
        block.into()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, level: LogLevel, block: &str) -> Result<()> {
        let output = self.render(level, block);
        match self.writer.as_mut() {
            Some(writer) => {
                writer.write_all(output.as_bytes())?;
                writer.flush()?;
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(output.as_bytes())?;
                handle.flush()?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush()?,
            None => std::io::stdout().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// In-memory `Write` sink that can be cloned and inspected while a logger
/// holds the other handle.
#[derive(Debug, Clone, Default)]
pub struct SharedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
