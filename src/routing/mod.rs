//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! SyncConfig + session span
//!     → builder.rs (RouterBuilder)
//!         tcp:  auth client factory → TCP router factory
//!         http: message bus factory → HttpRouter
//!     → Return: router, or BuildError naming the failing stage
//!
//! Router selection (lifecycle/startup.rs):
//!     router_mode → builder entry point → SyncRouter
//! ```
//!
//! # Design Decisions
//! - Factories are parameters, not hard-wired constructors
//! - Failures are logged at the failing stage, then returned as terminal errors
//! - Routers are returned by value; the builder keeps nothing

pub mod builder;
pub mod error;
pub mod http;
pub mod router;

pub use builder::RouterBuilder;
pub use error::{BuildError, FactoryError};
pub use http::HttpRouter;
pub use router::SyncRouter;
