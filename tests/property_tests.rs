//! Property-based tests for framed_logger using proptest

use framed_logger::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::None),
        Just(LogLevel::Error),
        Just(LogLevel::Warning),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
    ]
}

fn console_logger(level: LogLevel, target: LogTarget) -> (Logger, SharedWriter) {
    let captured = SharedWriter::new();
    let logger = Logger::builder()
        .level(level)
        .target(target)
        .console_writer(captured.clone())
        .build()
        .unwrap();
    (logger, captured)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// A message is emitted iff its level is numerically <= the threshold, and
    /// NONE is never emitted.
    #[test]
    fn test_emitted_iff_within_threshold(level in any_level(), threshold in any_level()) {
        let (logger, console) = console_logger(threshold, LogTarget::CONSOLE);

        let result = logger.write_log(level, "p.rs", "prop", 1, format_args!("msg"));

        let expected = level != LogLevel::None && (level as u8) <= (threshold as u8);
        prop_assert_eq!(!console.is_empty(), expected);
        prop_assert_eq!(result.is_err(), level == LogLevel::None);
    }

    /// LogLevel ordering matches the numeric values
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Display name parses back to the same level
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(LogLevel::try_from(level as u8).unwrap(), level);
    }
}

// ============================================================================
// LogTarget Tests
// ============================================================================

proptest! {
    /// Console output iff CONSOLE bit, file output iff FILE bit, for any mask
    #[test]
    fn test_dispatch_follows_mask(bits in any::<u8>()) {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("mask.log");
        let captured = SharedWriter::new();
        let logger = Logger::builder()
            .level(LogLevel::Info)
            .target(LogTarget::from_bits_retain(bits))
            .path(&path)
            .console_writer(captured.clone())
            .build()
            .unwrap();

        logger
            .write_log(LogLevel::Info, "p.rs", "prop", 1, format_args!("mask {}", bits))
            .unwrap();

        prop_assert_eq!(!captured.is_empty(), bits & 0b01 != 0);
        prop_assert_eq!(path.exists(), bits & 0b10 != 0);
    }
}

// ============================================================================
// Block Composition Tests
// ============================================================================

proptest! {
    /// Any single-line message is framed by two identical banners and
    /// recoverable from the block
    #[test]
    fn test_message_framed(message in "[^\r\n]{0,200}", level in 1u8..=4) {
        let level = LogLevel::try_from(level).unwrap();
        let (logger, _console) = console_logger(LogLevel::Info, LogTarget::NONE);

        logger.write_log(level, "p.rs", "prop", 9, format_args!("{}", message)).unwrap();

        let block = logger.last_block();
        let lines: Vec<&str> = block.lines().collect();
        prop_assert_eq!(lines.len(), 4);
        prop_assert_eq!(lines[0], "");
        prop_assert_eq!(lines[1], lines[3]);
        let banner = format!("{} {} {}", "*".repeat(60), level, "*".repeat(60));
        prop_assert_eq!(lines[1], banner.as_str());
        let tail = format!("[prop : 9   ] {}", message);
        prop_assert!(lines[2].ends_with(tail.as_str()));
    }

    /// Truncation keeps exactly `max` characters of a longer message
    #[test]
    fn test_truncation_bound(message in "[a-z日志]{0,64}", max in 0usize..32) {
        let (logger, _console) = console_logger(LogLevel::Info, LogTarget::NONE);
        logger.set_max_message_len(Some(max));

        logger
            .write_log(LogLevel::Info, "p.rs", "prop", 1, format_args!("{}", message))
            .unwrap();

        let expected: String = message.chars().take(max).collect();
        let block = logger.last_block();
        let body = block.lines().nth(2).unwrap();
        let rendered = body.rsplit_once("] ").map(|(_, m)| m).unwrap();
        prop_assert_eq!(rendered, expected.as_str());
    }
}
