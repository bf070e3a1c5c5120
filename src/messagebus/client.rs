//! NATS message bus handle.

use tracing::Span;

use crate::config::MessageBusServer;

/// Publish/subscribe transport the HTTP router advertises routes on.
pub trait MessageBus: Send + Sync + std::fmt::Debug {
    /// Servers the bus connects to.
    fn servers(&self) -> &[MessageBusServer];
}

impl<M: MessageBus + ?Sized> MessageBus for Box<M> {
    fn servers(&self) -> &[MessageBusServer] {
        (**self).servers()
    }
}

/// Message bus backed by a NATS cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatsMessageBus {
    servers: Vec<MessageBusServer>,
}

impl NatsMessageBus {
    pub fn new(span: &Span, servers: Vec<MessageBusServer>) -> Self {
        span.in_scope(|| {
            if servers.is_empty() {
                tracing::warn!("Message bus created without servers");
            } else {
                tracing::debug!(server_count = servers.len(), "Message bus created");
            }
        });
        Self { servers }
    }
}

impl MessageBus for NatsMessageBus {
    fn servers(&self) -> &[MessageBusServer] {
        &self.servers
    }
}
