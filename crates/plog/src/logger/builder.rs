//! crates/plog/src/logger/builder.rs
//! Step-by-step logger construction.

use std::io::Write;
use std::sync::Arc;

use super::Logger;
use crate::caller::{CallerResolver, TrackedCaller};
use crate::error::LogError;
use crate::level::{IntoLevel, InvalidLevel, Level};
use crate::metadata::Metadata;
use crate::terminate::{ProcessExit, Terminator};

/// Step-by-step construction of a [`Logger`].
///
/// Starts from minimum level [`Level::Info`], [`Metadata::ALL`], color off,
/// enabled, the [`TrackedCaller`] resolver and the [`ProcessExit`]
/// terminator. Level validation is deferred to [`build`](Self::build) so the
/// builder methods stay infallible.
///
/// ```
/// use plog::{Level, Logger, Metadata};
/// use plog::test_support::{RecordingTerminator, SharedBuffer};
///
/// let terminator = RecordingTerminator::new();
/// let logger = Logger::builder()
///     .level(Level::Warn)
///     .metadata(Metadata::LEVEL)
///     .terminator(terminator.clone())
///     .build(SharedBuffer::new())?;
///
/// logger.fatal(format_args!("shutting down"));
/// assert_eq!(terminator.calls(), 1);
/// # Ok::<(), plog::LogError>(())
/// ```
pub struct LoggerBuilder {
    level: Result<Level, InvalidLevel>,
    metadata: Metadata,
    enabled: bool,
    color: bool,
    resolver: Arc<dyn CallerResolver>,
    terminator: Arc<dyn Terminator>,
}

impl LoggerBuilder {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Ok(Level::Info),
            metadata: Metadata::ALL,
            enabled: true,
            color: false,
            resolver: Arc::new(TrackedCaller),
            terminator: Arc::new(ProcessExit::default()),
        }
    }

    /// Sets the minimum level; invalid values surface from [`build`](Self::build).
    pub fn level(mut self, level: impl IntoLevel) -> Self {
        self.level = level.into_level();
        self
    }

    /// Sets the metadata mask.
    pub fn metadata(mut self, metadata: impl Into<Metadata>) -> Self {
        self.metadata = metadata.into();
        self
    }

    /// Sets whether the logger starts enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets whether level labels are colored.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Installs the resolver used for the caller metadata field.
    pub fn caller_resolver<R>(mut self, resolver: R) -> Self
    where
        R: CallerResolver + 'static,
    {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Installs the terminator invoked by [`Logger::fatal`].
    pub fn terminator<T>(mut self, terminator: T) -> Self
    where
        T: Terminator + 'static,
    {
        self.terminator = Arc::new(terminator);
        self
    }

    /// Builds the logger around `sink`.
    pub fn build<W>(self, sink: W) -> Result<Logger, LogError>
    where
        W: Write + Send + 'static,
    {
        Ok(Logger::from_parts(
            self.level?,
            Box::new(sink),
            self.metadata,
            self.enabled,
            self.color,
            self.resolver,
            self.terminator,
        ))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
