//! crates/plog/src/format.rs
//! Metadata prefix composition and line rendering.

use std::fmt::{self, Write as _};

use time::OffsetDateTime;
use time::macros::format_description;

use crate::caller::{CallSite, CallerResolver, UNKNOWN_CALLER};
use crate::level::RawLevel;
use crate::metadata::Metadata;

/// Separator closing the metadata prefix.
pub const SEPARATOR: &str = "-";

/// Returns the current local time, falling back to UTC when the local offset
/// cannot be determined (for example in multi-threaded Unix processes).
#[must_use]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Formats `moment` as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(moment: OffsetDateTime) -> String {
    moment
        .format(format_description!(
            "[year]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
        ))
        .unwrap_or_else(|_| format!("unix_{}", moment.unix_timestamp()))
}

/// Configuration values that decide how one emission is rendered.
///
/// Taken under the logger lock in the same critical section as the level
/// gate, so every decision for a line sees one consistent configuration.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Snapshot {
    pub(crate) metadata: Metadata,
    pub(crate) color: bool,
}

/// Renders the metadata prefix (without the trailing space) into `out`.
///
/// Fields appear in the fixed order level, timestamp, caller. Level and
/// timestamp are bracketed; the caller is written bare. Levels outside the
/// defined range render as [`INVALID_LABEL`](crate::level::INVALID_LABEL).
/// When no known field is selected the prefix is just the separator.
pub(crate) fn write_prefix(
    out: &mut String,
    snapshot: Snapshot,
    level: RawLevel,
    site: &CallSite,
    resolver: &dyn CallerResolver,
) {
    let mask = snapshot.metadata;

    if mask.contains(Metadata::LEVEL) {
        let _ = write!(out, "[{}] ", level.label(snapshot.color));
    }

    if mask.contains(Metadata::TIMESTAMP) {
        let _ = write!(out, "[{}] ", format_timestamp(now()));
    }

    if mask.contains(Metadata::CALLER) {
        match resolver.resolve_caller(site) {
            Some(info) => {
                let _ = write!(out, "{info} ");
            }
            None => {
                out.push_str(UNKNOWN_CALLER);
                out.push(' ');
            }
        }
    }

    out.push_str(SEPARATOR);
}

/// Renders a complete line: prefix, a space, the body and a newline.
///
/// Fails when a formatting impl inside `body` reports an error; the partial
/// line is discarded.
pub(crate) fn render_line(
    snapshot: Snapshot,
    level: impl Into<RawLevel>,
    site: &CallSite,
    resolver: &dyn CallerResolver,
    body: fmt::Arguments<'_>,
) -> Result<String, fmt::Error> {
    let mut line = String::with_capacity(64);
    write_prefix(&mut line, snapshot, level.into(), site, resolver);
    line.push(' ');
    line.write_fmt(body)?;
    line.push('\n');
    Ok(line)
}
