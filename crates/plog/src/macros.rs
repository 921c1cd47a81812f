//! crates/plog/src/macros.rs
//! `format!`-style logging macros that record the caller's module path.
//!
//! The methods on [`Logger`](crate::Logger) take pre-built
//! [`fmt::Arguments`](std::fmt::Arguments); these macros build them and also
//! pass `file!()`, `line!()` and the path of the enclosing function so the
//! caller metadata field reads `file:line (crate::module::function)`.

/// Expands to the path of the function the macro is invoked in.
///
/// Inside closures the path ends in `{{closure}}`.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn f() {}
        let name = ::core::any::type_name_of_val(&f);
        match name.strip_suffix("::f") {
            ::core::option::Option::Some(stripped) => stripped,
            ::core::option::Option::None => name,
        }
    }};
}

/// Expands to the [`CallSite`](crate::CallSite) of the macro invocation.
#[doc(hidden)]
#[macro_export]
macro_rules! __call_site {
    () => {
        $crate::CallSite::new(
            ::core::option::Option::Some(::core::file!()),
            ::core::option::Option::Some(::core::line!()),
            ::core::option::Option::Some($crate::__function_path!()),
        )
    };
}

/// Log at an explicit level.
///
/// # Example
/// ```
/// # use plog::{Level, Logger, Metadata};
/// # let logger = Logger::new(Level::Debug, std::io::sink(), Metadata::ALL, false)?;
/// plog::log_at!(logger, Level::Warn, "retrying in {}s", 5)?;
/// # Ok::<(), plog::LogError>(())
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, $crate::__call_site!(), ::core::format_args!($($arg)+))
    };
}

/// Log at [`Level::Debug`](crate::Level::Debug).
///
/// # Example
/// ```ignore
/// log_debug!(logger, "frame {} decoded", index)?;
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log at [`Level::Info`](crate::Level::Info).
///
/// # Example
/// ```ignore
/// log_info!(logger, "listening on {}", addr)?;
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log at [`Level::Fatal`](crate::Level::Fatal) and terminate.
///
/// # Example
/// ```ignore
/// log_fatal!(logger, "config {} unreadable", path.display());
/// ```
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_at($crate::__call_site!(), ::core::format_args!($($arg)+))
    };
}
