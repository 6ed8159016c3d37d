//! Dispatch of a composed block to the active targets

use super::{appender::Appender, error::Result, log_level::LogLevel, log_target::LogTarget};

/// Write `block` to every target whose bit is set in `target`.
///
/// Console goes first, then file. A failing target does not stop the
/// other one; the first error is returned and any later one is reported on
/// stderr with the appender's name.
pub fn output_to_target(
    target: LogTarget,
    level: LogLevel,
    block: &str,
    console: &mut dyn Appender,
    file: &mut dyn Appender,
) -> Result<()> {
    let mut first_error = None;

    if target.contains(LogTarget::CONSOLE) {
        if let Err(e) = console.append(level, block) {
            first_error.get_or_insert(e);
        }
    }

    if target.contains(LogTarget::FILE) {
        if let Err(e) = file.append(level, block) {
            if first_error.is_some() {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", file.name(), e);
            } else {
                first_error = Some(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[derive(Default)]
    struct Recording {
        blocks: Vec<String>,
        fail: bool,
        label: &'static str,
    }

    impl Appender for Recording {
        fn append(&mut self, _level: LogLevel, block: &str) -> Result<()> {
            if self.fail {
                return Err(LoggerError::other(format!("{} failed", self.label)));
            }
            self.blocks.push(block.to_string());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            self.label
        }
    }

    fn dispatch(target: LogTarget) -> (Recording, Recording) {
        let mut console = Recording::default();
        let mut file = Recording::default();
        output_to_target(target, LogLevel::Info, "block", &mut console, &mut file).unwrap();
        (console, file)
    }

    #[test]
    fn test_each_bit_independent() {
        let (console, file) = dispatch(LogTarget::NONE);
        assert!(console.blocks.is_empty() && file.blocks.is_empty());

        let (console, file) = dispatch(LogTarget::CONSOLE);
        assert_eq!(console.blocks, vec!["block"]);
        assert!(file.blocks.is_empty());

        let (console, file) = dispatch(LogTarget::FILE);
        assert!(console.blocks.is_empty());
        assert_eq!(file.blocks, vec!["block"]);

        let (console, file) = dispatch(LogTarget::BOTH);
        assert_eq!(console.blocks, file.blocks);
    }

    #[test]
    fn test_failure_does_not_skip_other_target() {
        let mut console = Recording {
            fail: true,
            ..Default::default()
        };
        let mut file = Recording::default();

        let result =
            output_to_target(LogTarget::BOTH, LogLevel::Error, "b", &mut console, &mut file);

        assert!(result.is_err());
        assert_eq!(file.blocks, vec!["b"]);
    }

    #[test]
    fn test_both_failing_returns_console_error() {
        let mut console = Recording {
            fail: true,
            label: "console",
            ..Default::default()
        };
        let mut file = Recording {
            fail: true,
            label: "file",
            ..Default::default()
        };

        let err = output_to_target(LogTarget::BOTH, LogLevel::Info, "b", &mut console, &mut file)
            .unwrap_err();

        assert!(err.to_string().contains("console failed"));
        assert_eq!(file.name(), "file");
    }
}
