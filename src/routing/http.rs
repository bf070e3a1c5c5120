//! Message bus backed HTTP router.

use crate::config::MessageBusServer;
use crate::messagebus::MessageBus;

/// HTTP router advertising routes over a message bus.
///
/// A thin owner of the bus: the client passed in is the client held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRouter<M> {
    message_bus: M,
}

impl<M> HttpRouter<M> {
    pub fn new(message_bus: M) -> Self {
        Self { message_bus }
    }

    pub fn message_bus(&self) -> &M {
        &self.message_bus
    }

    pub fn into_message_bus(self) -> M {
        self.message_bus
    }
}

impl<M: MessageBus> HttpRouter<M> {
    pub fn servers(&self) -> &[MessageBusServer] {
        self.message_bus.servers()
    }
}
