#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `plog` is a small leveled text logger. A [`Logger`] filters messages by a
//! minimum [`Level`], prefixes each admitted message with the metadata fields
//! selected in a [`Metadata`] mask, and writes the result as one line to a
//! replaceable sink. One logger may be shared by any number of threads.
//!
//! # Design
//!
//! All mutable configuration (minimum level, sink, mask, enabled and color
//! switches) lives in a single record behind a mutex. An emission takes the
//! lock once to apply the gates and copy the rendering settings, formats the
//! line without holding it, then takes it again for one `write_all`. Message
//! bodies may therefore log through the same logger without deadlocking, and
//! concurrent lines never interleave.
//!
//! Caller metadata comes from `#[track_caller]` locations, optionally
//! enriched with the enclosing function path recorded by the [`log_info!`]
//! family of macros. A [`CallerResolver`] turns the captured [`CallSite`]
//! into text and a [`Terminator`] decides what [`Logger::fatal`] does after
//! writing; both can be replaced through [`LoggerBuilder`].
//!
//! # Invariants
//!
//! - A line is written only when the logger is enabled and the message level
//!   is at or above the minimum.
//! - Metadata fields appear in the order level, timestamp, caller, followed
//!   by `-`, a space, the message and `\n`.
//! - [`Logger::fatal`] always invokes the terminator, even when nothing was
//!   written.
//! - [`Logger::line`] ignores every gate.
//!
//! # Errors
//!
//! Emission methods return [`LogError`]. Suppression is reported as
//! [`LogError::Disabled`] or [`LogError::Filtered`] so callers that do not
//! care can check [`LogError::is_suppressed`]. Sink failures surface as
//! [`LogError::Write`], failing formatting impls as [`LogError::Format`], and
//! out-of-range minimum levels as [`LogError::InvalidLevel`]. Out-of-range
//! message levels are not errors: they are filtered when below the minimum
//! and written with an `INVALID` label otherwise.
//!
//! # Examples
//!
//! ```
//! use plog::{Level, Logger, Metadata};
//! use plog::test_support::SharedBuffer;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(Level::Info, buffer.clone(), Metadata::LEVEL, false)?;
//!
//! plog::log_warn!(logger, "disk {}% full", 91)?;
//! assert!(plog::log_debug!(logger, "skipped").is_err());
//!
//! logger.set_level(Level::Debug)?;
//! plog::log_debug!(logger, "now visible")?;
//!
//! assert_eq!(buffer.lines(), ["[WARN] - disk 91% full", "[DEBUG] - now visible"]);
//! # Ok::<(), plog::LogError>(())
//! ```
//!
//! # See also
//!
//! - [`LoggerConfig`] for building a logger from environment variables.
//! - `tracing_bridge` (feature `tracing`) for routing `tracing` events into
//!   a logger.

mod macros;

pub mod caller;
pub mod config;
mod error;
pub mod format;
pub mod level;
mod logger;
pub mod metadata;
pub mod terminate;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_bridge;

pub use caller::{CallSite, CallerInfo, CallerResolver, TrackedCaller};
pub use config::{ConfigError, LoggerConfig};
pub use error::LogError;
pub use level::{IntoLevel, InvalidLevel, Level, RawLevel};
pub use logger::{Logger, LoggerBuilder, Sink};
pub use metadata::{Metadata, MetadataParseError};
pub use terminate::{FATAL_EXIT_CODE, ProcessExit, Terminator};
