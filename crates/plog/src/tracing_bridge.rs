//! crates/plog/src/tracing_bridge.rs
//! Bridge from the tracing crate into a [`Logger`].
//!
//! [`PlogLayer`] is a tracing-subscriber layer that renders each event as a
//! single logger line. The event's file, line and module path become the
//! caller field, the `message` field becomes the body, and any other fields
//! are appended as `name=value` pairs.
//!
//! | tracing          | plog              |
//! |------------------|-------------------|
//! | `TRACE`, `DEBUG` | [`Level::Debug`]  |
//! | `INFO`           | [`Level::Info`]   |
//! | `WARN`           | [`Level::Warn`]   |
//! | `ERROR`          | [`Level::Error`]  |
//!
//! Events never reach [`Level::Fatal`], so bridged events cannot terminate
//! the process.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use plog::{Logger, LoggerConfig};
//!
//! let logger = Arc::new(LoggerConfig::from_env()?.build(std::io::stderr())?);
//! plog::tracing_bridge::init_tracing(logger);
//!
//! tracing::info!(peer = %addr, "connected");
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::caller::CallSite;
use crate::level::Level;
use crate::logger::Logger;

/// A tracing layer that writes events through a shared [`Logger`].
///
/// Suppressed events and sink failures are dropped silently; a layer has no
/// channel to report them.
#[derive(Clone, Debug)]
pub struct PlogLayer {
    logger: Arc<Logger>,
}

impl PlogLayer {
    /// Creates a layer writing to `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Returns the logger events are written to.
    #[must_use]
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Maps a tracing level onto a logger level.
    #[must_use]
    pub fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
        }
    }
}

impl<S> Layer<S> for PlogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(metadata.level());

        // Skip field collection for events the logger would discard anyway.
        if !self.logger.enabled_for(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let site = CallSite::new(metadata.file(), metadata.line(), metadata.module_path());
        let _ = self
            .logger
            .log_at(level, site, format_args!("{}", visitor.finish()));
    }
}

/// Collects the `message` field and the remaining fields of an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }

    fn finish(self) -> String {
        match self.message {
            Some(message) if self.fields.is_empty() => message,
            Some(message) => format!("{message} {}", self.fields),
            None => self.fields,
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Installs a global tracing subscriber that writes through `logger`.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_tracing(logger: Arc<Logger>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(PlogLayer::new(logger))
        .init();
}

/// Installs a global tracing subscriber that applies `filter` before
/// writing through `logger`.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// plog::tracing_bridge::init_tracing_with_filter(logger, EnvFilter::from_default_env());
/// ```
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_tracing_with_filter<F>(logger: Arc<Logger>, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(PlogLayer::new(logger))
        .init();
}
