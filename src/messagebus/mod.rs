//! Message bus client used by the HTTP routing path.
//!
//! # Design Decisions
//! - Construction is infallible; connection problems surface when publishing
//! - Server credentials are never logged

pub mod client;

pub use client::{MessageBus, NatsMessageBus};
