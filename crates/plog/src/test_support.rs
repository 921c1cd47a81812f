//! crates/plog/src/test_support.rs
//! Deterministic sinks, resolvers and terminators for exercising a logger.
//!
//! Available with the `test-support` feature. Each helper is cheap to clone
//! and shares its recorded state between clones, so a test keeps one handle
//! while the logger owns another.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::caller::{CallSite, CallerInfo, CallerResolver};
use crate::terminate::Terminator;

/// In-memory sink whose clones share one byte buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Returns a copy of the raw bytes written so far.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Returns the contents decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns the contents split into lines, without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that rejects every write with the configured error kind.
#[derive(Copy, Clone, Debug)]
pub struct FailingSink {
    kind: io::ErrorKind,
}

impl FailingSink {
    /// Creates a sink failing with [`io::ErrorKind::BrokenPipe`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_kind(io::ErrorKind::BrokenPipe)
    }

    /// Creates a sink failing with `kind`.
    #[must_use]
    pub const fn with_kind(kind: io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl Default for FailingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.kind, "sink rejected write"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(self.kind, "sink rejected flush"))
    }
}

/// Resolver that reports the same caller for every call site.
#[derive(Clone, Debug)]
pub struct FixedCaller {
    info: Option<CallerInfo>,
}

impl FixedCaller {
    /// Reports `file:line (function)` for every call.
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            info: Some(CallerInfo::new(file, line, Some(function.into()))),
        }
    }

    /// Fails every resolution, so lines render the unknown-caller marker.
    #[must_use]
    pub const fn unresolved() -> Self {
        Self { info: None }
    }
}

impl CallerResolver for FixedCaller {
    fn resolve_caller(&self, _site: &CallSite) -> Option<CallerInfo> {
        self.info.clone()
    }
}

/// Terminator that counts invocations instead of exiting.
#[derive(Clone, Debug, Default)]
pub struct RecordingTerminator {
    calls: Arc<AtomicUsize>,
}

impl RecordingTerminator {
    /// Creates a terminator with a zero count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many times [`Terminator::terminate`] ran.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Terminator for RecordingTerminator {
    fn terminate(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}
