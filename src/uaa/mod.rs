//! Authorization (UAA) client subsystem.
//!
//! # Data Flow
//! ```text
//! SyncConfig (UAA URL, client name, secret, TLS flag)
//!     → types.rs (AuthConfig derived by the router builder)
//!     → client.rs (endpoint validation, HTTP client, token cache)
//!     → clock.rs (time source for token expiry)
//! ```
//!
//! # Security Constraints
//! - Client secrets never appear in Debug output or logs
//! - Tokens are cached in memory only

pub mod client;
pub mod clock;
pub mod types;

pub use client::{HttpUaaClient, UaaClient};
pub use clock::{Clock, SystemClock};
pub use types::{AuthConfig, Token, UaaError, UaaResult};
