//! Integration tests for minimum-level filtering.
//!
//! A message is written exactly when the logger is enabled and the message
//! level is at or above the configured minimum.

use plog::test_support::SharedBuffer;
use plog::{Level, LogError, Logger, Metadata};
use proptest::prelude::*;

fn level_strategy() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

// ============================================================================
// Threshold Tests
// ============================================================================

/// Every level at or above the minimum is written, in call order.
#[test]
fn minimum_info_admits_info_and_above() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(Level::Info, buffer.clone(), Metadata::LEVEL, false)
        .expect("valid level");

    assert!(logger.debug(format_args!("d")).is_err());
    logger.info(format_args!("i")).expect("info");
    logger.warn(format_args!("w")).expect("warn");
    logger.error(format_args!("e")).expect("error");

    assert_eq!(buffer.lines(), ["[INFO] - i", "[WARN] - w", "[ERROR] - e"]);
}

/// A logger at the fatal minimum writes nothing through the regular methods.
#[test]
fn minimum_fatal_suppresses_all_regular_levels() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(Level::Fatal, buffer.clone(), Metadata::ALL, false)
        .expect("valid level");

    for level in [Level::Debug, Level::Info, Level::Warn, Level::Error] {
        let error = logger.log(level, format_args!("x")).unwrap_err();
        assert!(error.is_suppressed());
    }
    assert!(buffer.is_empty());
}

/// Names and numbers select the same thresholds as the enum.
#[test]
fn raw_levels_match_enum_levels() {
    for level in Level::ALL {
        let by_number = Logger::new(level.as_u8(), SharedBuffer::new(), Metadata::NONE, false)
            .expect("numeric level");
        let by_name = Logger::new(level.as_str(), SharedBuffer::new(), Metadata::NONE, false)
            .expect("named level");
        assert_eq!(by_number.level(), level);
        assert_eq!(by_name.level(), level);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn lower_levels_are_filtered(minimum in level_strategy(), message in level_strategy()) {
        prop_assume!(message < minimum);

        let buffer = SharedBuffer::new();
        let logger = Logger::new(minimum, buffer.clone(), Metadata::ALL, false)
            .expect("valid level");

        let result = logger.log(message, format_args!("hidden"));
        let filtered = matches!(result, Err(LogError::Filtered { .. }));
        prop_assert!(filtered);
        prop_assert!(buffer.is_empty());
    }

    #[test]
    fn admitted_levels_write_one_line(minimum in level_strategy(), message in level_strategy()) {
        prop_assume!(message >= minimum && message != Level::Fatal);

        let buffer = SharedBuffer::new();
        let logger = Logger::new(minimum, buffer.clone(), Metadata::LEVEL, false)
            .expect("valid level");

        logger.log(message, format_args!("shown")).expect("admitted");
        prop_assert_eq!(buffer.lines(), vec![format!("[{message}] - shown")]);
    }

    #[test]
    fn out_of_range_minimums_are_rejected(raw in prop_oneof![i64::MIN..0_i64, 5_i64..i64::MAX]) {
        let logger = Logger::new(Level::Debug, SharedBuffer::new(), Metadata::ALL, false)
            .expect("valid level");

        let rejected = matches!(logger.set_level(raw), Err(LogError::InvalidLevel(_)));
        prop_assert!(rejected);
        prop_assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn below_range_messages_are_filtered(raw in i64::MIN..0_i64, minimum in level_strategy()) {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(minimum, buffer.clone(), Metadata::LEVEL, false)
            .expect("valid level");

        let filtered = matches!(
            logger.log(raw, format_args!("x")),
            Err(LogError::Filtered { .. })
        );
        prop_assert!(filtered);
        prop_assert!(buffer.is_empty());
    }

    #[test]
    fn above_range_messages_are_marked_invalid(raw in 5_i64..i64::MAX, minimum in level_strategy()) {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(minimum, buffer.clone(), Metadata::LEVEL, false)
            .expect("valid level");

        logger.log(raw, format_args!("x")).expect("above range passes every minimum");
        prop_assert_eq!(buffer.contents(), "[INVALID] - x\n");
    }
}
