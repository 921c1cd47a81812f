//! crates/plog/src/config.rs
//! Declarative logger configuration with environment overrides.

use std::env;
use std::io::Write;

use thiserror::Error;

use crate::error::LogError;
use crate::level::{InvalidLevel, Level};
use crate::logger::Logger;
use crate::metadata::{Metadata, MetadataParseError};
use crate::terminate::{FATAL_EXIT_CODE, ProcessExit};

/// Environment variable holding the minimum level (`debug`..`fatal` or `0`..`4`).
pub const LEVEL_ENV: &str = "PLOG_LEVEL";
/// Environment variable holding the metadata field list (`level,timestamp`).
pub const METADATA_ENV: &str = "PLOG_METADATA";
/// Environment variable switching colored labels (`1`, `0`, `true`, `off`, ...).
pub const COLOR_ENV: &str = "PLOG_COLOR";
/// Environment variable enabling or disabling output.
pub const ENABLED_ENV: &str = "PLOG_ENABLED";
/// Conventional variable that disables color when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Settings used to construct a [`Logger`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoggerConfig {
    /// Minimum level written.
    pub level: Level,
    /// Metadata fields prefixed to every line.
    pub metadata: Metadata,
    /// Whether level labels are ANSI-colored.
    pub color: bool,
    /// Whether the logger starts enabled.
    pub enabled: bool,
    /// Exit status used after a fatal log.
    pub fatal_exit_code: i32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            metadata: Metadata::ALL,
            color: false,
            enabled: true,
            fatal_exit_code: FATAL_EXIT_CODE,
        }
    }
}

/// Error returned when an environment override cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The level variable does not name a level.
    #[error("{var}: {source}")]
    Level {
        /// Variable that held the value.
        var: &'static str,
        /// Parse failure.
        #[source]
        source: InvalidLevel,
    },
    /// The metadata variable contains an unknown field.
    #[error("{var}: {source}")]
    Metadata {
        /// Variable that held the value.
        var: &'static str,
        /// Parse failure.
        #[source]
        source: MetadataParseError,
    },
    /// A boolean variable holds something other than a recognised switch.
    #[error("{var}: expected 1, 0, true, false, yes, no, on or off, found `{value}`")]
    Switch {
        /// Variable that held the value.
        var: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Parses an on/off switch in any ASCII case.
fn parse_switch(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    let trimmed = value.trim();
    for on in ["1", "true", "yes", "on"] {
        if trimmed.eq_ignore_ascii_case(on) {
            return Ok(true);
        }
    }
    for off in ["0", "false", "no", "off"] {
        if trimmed.eq_ignore_ascii_case(off) {
            return Ok(false);
        }
    }
    Err(ConfigError::Switch {
        var,
        value: value.to_owned(),
    })
}

impl LoggerConfig {
    /// Applies overrides from the process environment.
    ///
    /// See [`apply_env_from`](Self::apply_env_from) for the recognised variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|name| env::var(name).ok())
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Recognises [`LEVEL_ENV`], [`METADATA_ENV`], [`COLOR_ENV`] and
    /// [`ENABLED_ENV`]. A non-empty [`NO_COLOR_ENV`] disables color and takes
    /// precedence over [`COLOR_ENV`]. Unset or empty variables leave the
    /// corresponding field untouched. On error no field is modified.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut next = self.clone();

        if let Some(value) = read(LEVEL_ENV) {
            next.level = value.parse().map_err(|source| ConfigError::Level {
                var: LEVEL_ENV,
                source,
            })?;
        }

        if let Some(value) = read(METADATA_ENV) {
            next.metadata = value.parse().map_err(|source| ConfigError::Metadata {
                var: METADATA_ENV,
                source,
            })?;
        }

        if let Some(value) = read(COLOR_ENV) {
            next.color = parse_switch(COLOR_ENV, &value)?;
        }

        if read(NO_COLOR_ENV).is_some() {
            next.color = false;
        }

        if let Some(value) = read(ENABLED_ENV) {
            next.enabled = parse_switch(ENABLED_ENV, &value)?;
        }

        *self = next;
        Ok(())
    }

    /// Returns the default configuration with process environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Builds a logger writing to `sink`.
    pub fn build<W>(&self, sink: W) -> Result<Logger, LogError>
    where
        W: Write + Send + 'static,
    {
        Logger::builder()
            .level(self.level)
            .metadata(self.metadata)
            .color(self.color)
            .enabled(self.enabled)
            .terminator(ProcessExit::with_code(self.fatal_exit_code))
            .build(sink)
    }
}
