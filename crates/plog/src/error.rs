//! crates/plog/src/error.rs
//! Error type returned by logger construction, configuration and emission.

use std::{fmt, io};

use thiserror::Error;

use crate::level::{InvalidLevel, Level, RawLevel};

/// Error returned by [`Logger`](crate::Logger) operations.
///
/// [`Disabled`](Self::Disabled) and [`Filtered`](Self::Filtered) are
/// informational: the logger did exactly what it was configured to do and
/// wrote nothing. Use [`is_suppressed`](Self::is_suppressed) to ignore both
/// in one check.
#[derive(Debug, Error)]
pub enum LogError {
    /// A level value outside `0..=4` was supplied as a minimum level.
    #[error(transparent)]
    InvalidLevel(#[from] InvalidLevel),

    /// The logger is disabled.
    #[error("logger is disabled")]
    Disabled,

    /// The message level is below the configured minimum.
    #[error("{level} message filtered by minimum level {minimum}")]
    Filtered {
        /// Level of the rejected message, possibly outside the defined range.
        level: RawLevel,
        /// Minimum level in effect when the message was rejected.
        minimum: Level,
    },

    /// A formatting trait implementation in the message returned an error.
    ///
    /// Nothing is written for the message.
    #[error("failed to format log message")]
    Format(#[from] fmt::Error),

    /// The sink reported an error while the line was being written.
    #[error("failed to write log line: {0}")]
    Write(#[from] io::Error),
}

impl LogError {
    /// Reports whether the error only signals that output was suppressed.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        matches!(self, Self::Disabled | Self::Filtered { .. })
    }
}
