//! Integration tests for building a logger from configuration.

use plog::config::{COLOR_ENV, ENABLED_ENV, LEVEL_ENV, METADATA_ENV, NO_COLOR_ENV};
use plog::test_support::SharedBuffer;
use plog::{ConfigError, Level, LoggerConfig, Metadata};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    move |name| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

// ============================================================================
// Environment Override Tests
// ============================================================================

/// Overrides flow through to the built logger.
#[test]
fn overrides_shape_built_logger() {
    let mut config = LoggerConfig::default();
    config
        .apply_env_from(env(&[
            (LEVEL_ENV, "2"),
            (METADATA_ENV, "level|caller"),
            (COLOR_ENV, "TRUE"),
        ]))
        .expect("valid overrides");

    let buffer = SharedBuffer::new();
    let logger = config.build(buffer.clone()).expect("valid level");

    assert_eq!(logger.level(), Level::Warn);
    assert_eq!(logger.metadata(), Metadata::LEVEL | Metadata::CALLER);
    assert!(logger.is_colored());
    assert!(logger.info(format_args!("x")).is_err());
}

/// A disabled configuration builds a silent logger.
#[test]
fn disabled_configuration() {
    let mut config = LoggerConfig::default();
    config
        .apply_env_from(env(&[(ENABLED_ENV, "off")]))
        .expect("valid overrides");

    let buffer = SharedBuffer::new();
    let logger = config.build(buffer.clone()).expect("valid level");
    assert!(logger.error(format_args!("x")).is_err());
    assert!(buffer.is_empty());
}

/// `NO_COLOR` disables color even when the configuration asked for it.
#[test]
fn no_color_overrides_configured_color() {
    let mut config = LoggerConfig {
        color: true,
        ..LoggerConfig::default()
    };
    config
        .apply_env_from(env(&[(NO_COLOR_ENV, "yes")]))
        .expect("valid overrides");
    assert!(!config.color);
}

/// Metadata accepts raw bit values and named lists.
#[test]
fn metadata_accepts_bits_and_names() {
    let mut config = LoggerConfig::default();
    config
        .apply_env_from(env(&[(METADATA_ENV, "3")]))
        .expect("raw bits");
    assert_eq!(config.metadata, Metadata::TIMESTAMP | Metadata::LEVEL);

    config
        .apply_env_from(env(&[(METADATA_ENV, "none")]))
        .expect("named");
    assert_eq!(config.metadata, Metadata::NONE);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Invalid values are reported with the variable name.
#[test]
fn invalid_values_name_the_variable() {
    let cases: [(&[(&str, &str)], &str); 3] = [
        (&[(LEVEL_ENV, "loud")], LEVEL_ENV),
        (&[(METADATA_ENV, "level,color")], METADATA_ENV),
        (&[(ENABLED_ENV, "sometimes")], ENABLED_ENV),
    ];

    for (pairs, var) in cases {
        let mut config = LoggerConfig::default();
        let error = config.apply_env_from(env(pairs)).unwrap_err();
        assert!(error.to_string().starts_with(var), "{error}");
        assert_eq!(config, LoggerConfig::default());
    }
}

/// Level errors expose the parse failure as their source.
#[test]
fn level_error_has_source() {
    use std::error::Error as _;

    let mut config = LoggerConfig::default();
    let error = config
        .apply_env_from(env(&[(LEVEL_ENV, "9")]))
        .unwrap_err();
    assert!(matches!(error, ConfigError::Level { .. }));
    assert!(error.source().is_some());
}
