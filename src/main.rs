//! route-sync
//!
//! Syncs routes from the platform control plane into the routing fabric,
//! through either a TCP router (routing API) or an HTTP router (message bus).
//!
//! # Architecture Overview
//!
//! ```text
//!     config file + env
//!            │
//!            ▼
//!     ┌─────────────┐      ┌──────────────────────────────────────────────┐
//!     │   config    │─────▶│               RouterBuilder                  │
//!     │  validated  │      │                                              │
//!     └─────────────┘      │  tcp:  UAA client factory ─▶ TCP router      │
//!                          │  http: message bus factory ─▶ HTTP router    │
//!                          └───────────────┬──────────────────────────────┘
//!                                          │
//!                         ok ◀─────────────┴────────────▶ BuildError
//!                          │                                  │
//!                          ▼                                  ▼
//!                   hold router until                  FatalPolicy
//!                   SIGINT / SIGTERM             exit process | abort session
//! ```

use std::path::PathBuf;

use clap::Parser;

use route_sync::config::{self, RouterMode};
use route_sync::lifecycle::{self, signals::shutdown_signal};
use route_sync::observability::logging;
use route_sync::SyncRouter;

#[derive(Parser)]
#[command(name = "route-sync")]
#[command(about = "Sync control plane routes into the TCP or HTTP routing fabric", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults plus environment when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured router mode.
    #[arg(short, long, value_enum)]
    mode: Option<RouterMode>,

    /// Build the router and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref(), cli.mode)?;
    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        router_mode = %config.router_mode,
        fatal_policy = ?config.fatal_policy,
        "route-sync v0.1.0 starting"
    );

    let span = logging::session_span(config.router_mode);
    let router = config
        .fatal_policy
        .apply(lifecycle::build_router(&config, &span))?;

    span.in_scope(|| tracing::info!(router = %router.describe(), "Router ready"));

    if cli.check {
        return Ok(());
    }

    if let SyncRouter::Tcp(tcp) = &router {
        if let Err(e) = tcp.uaa_client().fetch_token(false).await {
            tracing::warn!(error = %e, "Initial UAA token fetch failed");
        }
    }

    shutdown_signal().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
