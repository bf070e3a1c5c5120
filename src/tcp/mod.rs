//! TCP routing backend.
//!
//! # Data Flow
//! ```text
//! UaaClient (authorization)
//!     + routing API URL + TLS flag
//!     → router.rs (RoutingApiRouter owns the client)
//! ```
//!
//! Route registration over the routing API lives outside this crate; the
//! router here is the constructed handle the sync loop drives.

pub mod router;

pub use router::{RoutingApiRouter, TcpRouter, TcpRouterError};
