//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router builder and factories produce:
//!     → logging.rs (structured events inside the session span)
//!     → metrics.rs (build counters)
//! ```

pub mod logging;
pub mod metrics;
