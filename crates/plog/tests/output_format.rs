//! Integration tests for the rendered line format.

use plog::test_support::{FixedCaller, SharedBuffer};
use plog::{Level, Logger, Metadata};
use regex::Regex;

// ============================================================================
// Field Layout Tests
// ============================================================================

/// Level and timestamp render as bracketed fields ahead of the separator.
#[test]
fn level_and_timestamp_layout() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(
        Level::Info,
        buffer.clone(),
        Metadata::LEVEL | Metadata::TIMESTAMP,
        false,
    )
    .expect("valid level");

    logger.info(format_args!("value={}", 42)).expect("written");

    let pattern = Regex::new(r"^\[INFO\] \[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] - value=42\n$")
        .expect("valid regex");
    let output = buffer.contents();
    assert!(pattern.is_match(&output), "{output:?}");
}

/// Every field together, with a fixed caller.
#[test]
fn all_fields_layout() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .level(Level::Debug)
        .caller_resolver(FixedCaller::new("src/server.rs", 88, "server::accept"))
        .build(buffer.clone())
        .expect("valid level");

    logger.debug(format_args!("accepted")).expect("written");

    let pattern = Regex::new(
        r"^\[DEBUG\] \[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] src/server\.rs:88 \(server::accept\) - accepted\n$",
    )
    .expect("valid regex");
    let output = buffer.contents();
    assert!(pattern.is_match(&output), "{output:?}");
}

/// Without metadata the line is the separator and the message.
#[test]
fn empty_mask_layout() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(Level::Debug, buffer.clone(), Metadata::NONE, true)
        .expect("valid level");

    logger.error(format_args!("plain")).expect("written");

    assert_eq!(buffer.contents(), "- plain\n");
}

/// Filtered messages contribute zero bytes.
#[test]
fn filtered_message_writes_nothing() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(Level::Warn, buffer.clone(), Metadata::ALL, false)
        .expect("valid level");

    let _ = logger.debug(format_args!("x"));

    assert_eq!(buffer.len(), 0);
}

/// Message bodies are written verbatim, including embedded newlines.
#[test]
fn body_is_not_escaped() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(Level::Info, buffer.clone(), Metadata::LEVEL, false)
        .expect("valid level");

    logger.info(format_args!("a\nb %d {{}}")).expect("written");

    assert_eq!(buffer.contents(), "[INFO] - a\nb %d {}\n");
}

// ============================================================================
// Color Tests
// ============================================================================

/// Colored labels carry the level's ANSI color and a reset.
#[test]
fn colored_labels_per_level() {
    let buffer = SharedBuffer::new();
    let logger = Logger::new(Level::Debug, buffer.clone(), Metadata::LEVEL, true)
        .expect("valid level");

    logger.debug(format_args!("d")).expect("written");
    logger.info(format_args!("i")).expect("written");
    logger.warn(format_args!("w")).expect("written");
    logger.error(format_args!("e")).expect("written");

    assert_eq!(
        buffer.lines(),
        [
            "[\x1b[34mDEBUG\x1b[0m] - d",
            "[\x1b[32mINFO\x1b[0m] - i",
            "[\x1b[33mWARN\x1b[0m] - w",
            "[\x1b[31mERROR\x1b[0m] - e",
        ]
    );
}

/// Color without the level field changes nothing.
#[test]
fn color_without_level_field_is_invisible() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .metadata(Metadata::CALLER)
        .color(true)
        .caller_resolver(FixedCaller::new("a.rs", 1, "a"))
        .build(buffer.clone())
        .expect("valid level");

    logger.info(format_args!("m")).expect("written");

    assert_eq!(buffer.contents(), "a.rs:1 (a) - m\n");
}
