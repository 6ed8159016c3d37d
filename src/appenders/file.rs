//! File appender implementation
//!
//! The file is opened in append mode for every block and closed again, so
//! the path can change between writes and external tools may move the file
//! away at any time.

use crate::core::{Appender, LogLevel, LoggerError, Result, TextCodec};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub struct FileAppender {
    path: PathBuf,
    codec: TextCodec,
}

impl FileAppender {
    /// Create an appender for `path`. The file is not touched until the
    /// first block is written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            codec: TextCodec::default(),
        }
    }

    /// Encode blocks with `codec` instead of UTF-8
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use framed_logger::appenders::FileAppender;
    /// use framed_logger::TextCodec;
    ///
    /// let appender = FileAppender::new("./Log.txt")
    ///     .with_codec(TextCodec::for_label("chs").unwrap());
    /// ```
    #[must_use]
    pub fn with_codec(mut self, codec: TextCodec) -> Self {
        self.codec = codec;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    pub fn codec(&self) -> TextCodec {
        self.codec
    }

    /// Read the file back as lines of text.
    ///
    /// Decoded with the appender's codec; a missing or unreadable file is an
    /// `IoOperation` error.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let mut file = File::open(&self.path)
            .map_err(|e| LoggerError::io_operation("opening for read", self.display_path(), e))?;

        #[cfg(feature = "file")]
        fs2::FileExt::lock_shared(&file)
            .map_err(|e| LoggerError::io_operation("locking", self.display_path(), e))?;

        let mut raw = Vec::new();
        file.read_to_end(&mut raw)
            .map_err(|e| LoggerError::io_operation("reading", self.display_path(), e))?;

        let text = self.codec.narrow_to_wide(&raw)?;
        Ok(text.lines().map(String::from).collect())
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn open_for_append(&self) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::io_operation("opening for append", self.display_path(), e))
    }
}

impl Appender for FileAppender {
    fn append(&mut self, _level: LogLevel, block: &str) -> Result<()> {
        let encoded = self.codec.wide_to_narrow(block)?;
        let mut file = self.open_for_append()?;

        #[cfg(feature = "file")]
        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| LoggerError::io_operation("locking", self.display_path(), e))?;

        file.write_all(&encoded)
            .map_err(|e| LoggerError::io_operation("appending to", self.display_path(), e))?;
        // Closing the handle releases the advisory lock.
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
