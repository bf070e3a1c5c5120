//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Open the span every sync session logs under
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - The session span is the diagnostic sink handed to router factories

use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::RouterMode;

/// Install the global subscriber.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("route_sync={default_level}")));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

/// Open the span for one sync session.
pub fn session_span(mode: RouterMode) -> Span {
    tracing::info_span!("sync_session", session_id = %Uuid::new_v4(), mode = %mode)
}
