//! crates/plog/src/logger.rs
//! The thread-safe leveled logger.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::caller::{CallSite, CallerResolver, TrackedCaller};
use crate::error::LogError;
use crate::format::{Snapshot, render_line};
use crate::level::{IntoLevel, Level, RawLevel};
use crate::metadata::Metadata;
use crate::terminate::{ProcessExit, Terminator};

mod builder;

pub use builder::LoggerBuilder;

/// Output destination owned by a [`Logger`].
pub type Sink = Box<dyn Write + Send>;

/// Mutable configuration guarded by the logger's lock.
struct State {
    level: Level,
    sink: Sink,
    metadata: Metadata,
    enabled: bool,
    color: bool,
}

impl State {
    /// Applies the enabled and level gates, returning the rendering snapshot
    /// for an admitted message.
    fn admit(&self, level: RawLevel) -> Result<Snapshot, LogError> {
        if !self.enabled {
            return Err(LogError::Disabled);
        }
        if level.is_below(self.level) {
            return Err(LogError::Filtered {
                level,
                minimum: self.level,
            });
        }
        Ok(Snapshot {
            metadata: self.metadata,
            color: self.color,
        })
    }
}

/// Leveled logger writing annotated lines to a replaceable sink.
///
/// A logger owns one configuration record behind a [`Mutex`]: the minimum
/// [`Level`], the output sink, the [`Metadata`] mask, and the enabled and
/// color switches. Every setter and every sink write takes that lock, so a
/// logger can be shared across threads (typically behind an [`Arc`]) and two
/// lines never interleave in the sink.
///
/// Each emitted line has the shape
/// `[LEVEL] [YYYY-MM-DD HH:MM:SS] file:line (function) - message`, where each
/// metadata field appears only when selected in the mask. With no field
/// selected the line reads `- message`.
///
/// # Examples
///
/// ```
/// use plog::{Level, Logger, Metadata};
/// use plog::test_support::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(Level::Info, buffer.clone(), Metadata::LEVEL, false)?;
///
/// logger.info(format_args!("value={}", 42))?;
/// assert!(logger.debug(format_args!("hidden")).is_err());
///
/// assert_eq!(buffer.contents(), "[INFO] - value=42\n");
/// # Ok::<(), plog::LogError>(())
/// ```
pub struct Logger {
    state: Mutex<State>,
    resolver: Arc<dyn CallerResolver>,
    terminator: Arc<dyn Terminator>,
}

impl Logger {
    /// Creates an enabled logger.
    ///
    /// `level` accepts a [`Level`], an integer in `0..=4`, or a level name.
    /// Out-of-range values fail with [`LogError::InvalidLevel`] and no
    /// logger is produced. Callers resolve through [`TrackedCaller`] and
    /// [`fatal`](Self::fatal) exits through [`ProcessExit`]; use
    /// [`Logger::builder`] to substitute either.
    pub fn new<W>(
        level: impl IntoLevel,
        sink: W,
        metadata: impl Into<Metadata>,
        color: bool,
    ) -> Result<Self, LogError>
    where
        W: Write + Send + 'static,
    {
        let level = level.into_level()?;
        Ok(Self::from_parts(
            level,
            Box::new(sink),
            metadata.into(),
            true,
            color,
            Arc::new(TrackedCaller),
            Arc::new(ProcessExit::default()),
        ))
    }

    /// Returns a builder with the default configuration.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_parts(
        level: Level,
        sink: Sink,
        metadata: Metadata,
        enabled: bool,
        color: bool,
        resolver: Arc<dyn CallerResolver>,
        terminator: Arc<dyn Terminator>,
    ) -> Self {
        Self {
            state: Mutex::new(State {
                level,
                sink,
                metadata,
                enabled,
                color,
            }),
            resolver,
            terminator,
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Changes the minimum level.
    ///
    /// Out-of-range values fail with [`LogError::InvalidLevel`] and leave the
    /// current level in place.
    pub fn set_level(&self, level: impl IntoLevel) -> Result<(), LogError> {
        let level = level.into_level()?;
        self.lock().level = level;
        Ok(())
    }

    /// Replaces the sink and returns the previous one.
    ///
    /// The previous sink is handed back so the caller can flush or close it;
    /// the logger never does either.
    #[must_use = "the returned sink may hold output that still needs flushing"]
    pub fn set_sink<W>(&self, sink: W) -> Sink
    where
        W: Write + Send + 'static,
    {
        std::mem::replace(&mut self.lock().sink, Box::new(sink))
    }

    /// Replaces the metadata mask. Unknown bits are stored but ignored.
    pub fn set_metadata(&self, metadata: impl Into<Metadata>) {
        self.lock().metadata = metadata.into();
    }

    /// Enables or disables all output.
    pub fn set_enabled(&self, enabled: bool) {
        self.lock().enabled = enabled;
    }

    /// Switches ANSI-colored level labels on or off.
    pub fn set_color(&self, color: bool) {
        self.lock().color = color;
    }

    /// Returns the minimum level.
    pub fn level(&self) -> Level {
        self.lock().level
    }

    /// Returns the metadata mask as stored, unknown bits included.
    pub fn metadata(&self) -> Metadata {
        self.lock().metadata
    }

    /// Reports whether the logger is enabled.
    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Reports whether level labels are colored.
    pub fn is_colored(&self) -> bool {
        self.lock().color
    }

    /// Reports whether a message at `level` would currently be written.
    pub fn enabled_for(&self, level: Level) -> bool {
        self.lock().admit(level.into()).is_ok()
    }

    /// Writes a message at `level`.
    ///
    /// `level` may be a [`Level`] or a raw integer. Raw values are compared
    /// numerically with the minimum: values below `0` are filtered, values
    /// above `4` pass every minimum and are labelled `INVALID`.
    ///
    /// Returns [`LogError::Disabled`] or [`LogError::Filtered`] when the
    /// message is suppressed, [`LogError::Format`] when a formatting impl in
    /// `args` fails, and [`LogError::Write`] when the sink fails.
    ///
    /// Direct method calls record the file and line of the caller but no
    /// function name; use the [`log_at!`](crate::log_at) family of macros
    /// to include it.
    #[track_caller]
    pub fn log(
        &self,
        level: impl Into<RawLevel>,
        args: fmt::Arguments<'_>,
    ) -> Result<(), LogError> {
        self.emit(level.into(), &CallSite::here(None), args)
    }

    /// Writes a message with an explicit call site.
    ///
    /// Used by the logging macros and the tracing bridge, which know more
    /// about the caller than a tracked location; prefer the macros over
    /// calling this directly.
    pub fn log_at(
        &self,
        level: impl Into<RawLevel>,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> Result<(), LogError> {
        self.emit(level.into(), &site, args)
    }

    /// Writes a message at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.emit(Level::Debug.into(), &CallSite::here(None), args)
    }

    /// Writes a message at [`Level::Info`].
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.emit(Level::Info.into(), &CallSite::here(None), args)
    }

    /// Writes a message at [`Level::Warn`].
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.emit(Level::Warn.into(), &CallSite::here(None), args)
    }

    /// Writes a message at [`Level::Error`].
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.emit(Level::Error.into(), &CallSite::here(None), args)
    }

    /// Writes a message at [`Level::Fatal`] and terminates the program.
    ///
    /// Termination happens whether or not the message was written: a
    /// disabled logger, a filtered level, or a failing sink all still end
    /// the process.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.fatal_at(CallSite::here(None), args);
    }

    /// [`fatal`](Self::fatal) with an explicit call site.
    pub fn fatal_at(&self, site: CallSite, args: fmt::Arguments<'_>) {
        let _ = self.emit(Level::Fatal.into(), &site, args);
        self.terminator.terminate();
    }

    /// Writes a bare newline, bypassing every gate and all formatting.
    ///
    /// Sink errors are ignored.
    pub fn line(&self) {
        let _ = self.lock().sink.write_all(b"\n");
    }

    fn emit(
        &self,
        level: RawLevel,
        site: &CallSite,
        args: fmt::Arguments<'_>,
    ) -> Result<(), LogError> {
        let snapshot = self.lock().admit(level)?;
        let line = render_line(snapshot, level, site, self.resolver.as_ref(), args)?;
        self.write_line(line.as_bytes())?;
        Ok(())
    }

    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.lock().sink.write_all(line)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("level", &state.level)
            .field("metadata", &state.metadata)
            .field("enabled", &state.enabled)
            .field("color", &state.color)
            .finish_non_exhaustive()
    }
}
