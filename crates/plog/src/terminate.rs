//! crates/plog/src/terminate.rs
//! Process termination performed after a fatal log.

use std::process;

/// Exit status used by [`ProcessExit::default`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the program after [`Logger::fatal`](crate::Logger::fatal) has
/// attempted to write its message.
///
/// The production implementation is [`ProcessExit`]. Tests install a
/// recording implementation so fatal paths can be exercised without leaving
/// the test harness.
pub trait Terminator: Send + Sync {
    /// Terminates the program. Implementations used outside tests never return.
    fn terminate(&self);
}

/// Terminates the process through [`std::process::exit`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ProcessExit {
    code: i32,
}

impl ProcessExit {
    /// Exits with `code` instead of [`FATAL_EXIT_CODE`].
    #[must_use]
    pub const fn with_code(code: i32) -> Self {
        Self { code }
    }

    /// Returns the exit status passed to the operating system.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.code
    }
}

impl Default for ProcessExit {
    fn default() -> Self {
        Self::with_code(FATAL_EXIT_CODE)
    }
}

impl Terminator for ProcessExit {
    fn terminate(&self) {
        process::exit(self.code)
    }
}
