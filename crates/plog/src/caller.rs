//! crates/plog/src/caller.rs
//! Caller-site resolution for the `Caller` metadata field.
//!
//! Every public emission method on [`Logger`](crate::Logger) is
//! `#[track_caller]`, so the [`Location`] captured inside the logger already
//! points past the logger's own frames at the external call site. A
//! [`Location`] carries no function name, so the `(function)` part of the
//! caller field is only present when the call goes through the logging
//! macros, which record the path of the enclosing function. Both travel in
//! a [`CallSite`] that a [`CallerResolver`] turns into the rendered
//! [`CallerInfo`].

use std::fmt;
use std::panic::Location;

/// Raw call-site data captured at the emission entry point.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CallSite {
    file: Option<&'static str>,
    line: Option<u32>,
    function: Option<&'static str>,
}

impl CallSite {
    /// Creates a call site from its raw parts.
    #[must_use]
    pub const fn new(
        file: Option<&'static str>,
        line: Option<u32>,
        function: Option<&'static str>,
    ) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Creates a call site from a tracked location and an optional function path.
    #[must_use]
    pub fn from_location(
        location: &'static Location<'static>,
        function: Option<&'static str>,
    ) -> Self {
        Self::new(Some(location.file()), Some(location.line()), function)
    }

    /// Captures the location of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    #[must_use]
    pub fn here(function: Option<&'static str>) -> Self {
        Self::from_location(Location::caller(), function)
    }

    /// Returns the source file, if known.
    #[must_use]
    pub const fn file(&self) -> Option<&'static str> {
        self.file
    }

    /// Returns the one-based source line, if known.
    #[must_use]
    pub const fn line(&self) -> Option<u32> {
        self.line
    }

    /// Returns the enclosing function path, if recorded.
    ///
    /// The logging macros record the full path of the function they expand
    /// in; the tracing bridge records the event's module path.
    #[must_use]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }
}

/// Resolved caller metadata rendered as `file:line (function)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallerInfo {
    /// Source file of the call.
    pub file: String,
    /// One-based line of the call.
    pub line: u32,
    /// Enclosing function or module path, when known.
    pub function: Option<String>,
}

impl CallerInfo {
    /// Creates resolved caller metadata.
    pub fn new(file: impl Into<String>, line: u32, function: Option<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function,
        }
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(function) = &self.function {
            write!(f, " ({function})")?;
        }
        Ok(())
    }
}

/// Placeholder rendered when a resolver cannot name the caller.
pub const UNKNOWN_CALLER: &str = "unknown";

/// Turns a captured [`CallSite`] into printable caller metadata.
///
/// Returning `None` renders [`UNKNOWN_CALLER`]. Tests install deterministic
/// resolvers through [`LoggerBuilder::caller_resolver`](crate::LoggerBuilder::caller_resolver).
pub trait CallerResolver: Send + Sync {
    /// Resolves `site` into caller metadata.
    fn resolve_caller(&self, site: &CallSite) -> Option<CallerInfo>;
}

impl<F> CallerResolver for F
where
    F: Fn(&CallSite) -> Option<CallerInfo> + Send + Sync,
{
    fn resolve_caller(&self, site: &CallSite) -> Option<CallerInfo> {
        self(site)
    }
}

/// Default resolver built on `#[track_caller]` locations.
#[derive(Copy, Clone, Debug, Default)]
pub struct TrackedCaller;

impl CallerResolver for TrackedCaller {
    fn resolve_caller(&self, site: &CallSite) -> Option<CallerInfo> {
        let file = site.file()?;
        Some(CallerInfo::new(
            file,
            site.line().unwrap_or(0),
            site.function().map(str::to_owned),
        ))
    }
}
