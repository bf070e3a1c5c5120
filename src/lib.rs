//! Route sync: router selection and construction.

pub mod config;
pub mod lifecycle;
pub mod messagebus;
pub mod observability;
pub mod routing;
pub mod tcp;
pub mod uaa;

pub use config::schema::SyncConfig;
pub use lifecycle::FatalPolicy;
pub use routing::{BuildError, RouterBuilder, SyncRouter};
