//! Metrics collection.
//!
//! # Metrics
//! - `route_sync_router_builds_total` (counter): router builds by kind, outcome
//!
//! Recorded through the `metrics` facade; with no recorder installed the
//! calls are no-ops.

use crate::config::RouterMode;

/// Record the outcome of a router build.
pub fn record_router_build(mode: RouterMode, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    ::metrics::counter!(
        "route_sync_router_builds_total",
        "kind" => mode.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
