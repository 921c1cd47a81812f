//! Integration tests for the tracing bridge (requires the `tracing` feature).

use std::sync::Arc;

use plog::test_support::SharedBuffer;
use plog::tracing_bridge::PlogLayer;
use plog::{Level, Logger, Metadata};
use tracing_subscriber::layer::SubscriberExt;

fn shared_logger(level: Level, buffer: &SharedBuffer) -> Arc<Logger> {
    Arc::new(Logger::new(level, buffer.clone(), Metadata::LEVEL, false).expect("valid level"))
}

/// Events pass through a scoped subscriber into the logger.
#[test]
fn scoped_subscriber_routes_events() {
    let buffer = SharedBuffer::new();
    let logger = shared_logger(Level::Debug, &buffer);
    let subscriber = tracing_subscriber::registry().with(PlogLayer::new(Arc::clone(&logger)));

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("connecting");
        tracing::warn!(attempt = 2, "retry");
    });

    assert_eq!(buffer.lines(), ["[DEBUG] - connecting", "[WARN] - retry attempt=2"]);
}

/// Runtime logger changes apply to bridged events.
#[test]
fn logger_changes_apply_to_bridge() {
    let buffer = SharedBuffer::new();
    let logger = shared_logger(Level::Info, &buffer);
    let subscriber = tracing_subscriber::registry().with(PlogLayer::new(Arc::clone(&logger)));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("first");
        logger.set_enabled(false);
        tracing::info!("second");
        logger.set_enabled(true);
        logger.set_level(Level::Error).expect("valid level");
        tracing::warn!("third");
        tracing::error!("fourth");
    });

    assert_eq!(buffer.lines(), ["[INFO] - first", "[ERROR] - fourth"]);
}
