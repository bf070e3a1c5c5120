//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build router for router_mode
//!
//! Fatal errors (fatal.rs):
//!     BuildError → FatalPolicy → exit process | abort session
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → End the sync session
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then logging, then the router
//! - Router construction failures are never retried

pub mod fatal;
pub mod signals;
pub mod startup;

pub use fatal::FatalPolicy;
pub use startup::build_router;
