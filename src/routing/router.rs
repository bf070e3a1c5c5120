//! The router selected for a sync session.

use crate::config::RouterMode;
use crate::messagebus::NatsMessageBus;
use crate::routing::http::HttpRouter;
use crate::tcp::{RoutingApiRouter, TcpRouter};
use crate::uaa::HttpUaaClient;

/// A fully constructed production router.
#[derive(Debug)]
pub enum SyncRouter {
    Tcp(RoutingApiRouter<HttpUaaClient>),
    Http(HttpRouter<NatsMessageBus>),
}

impl SyncRouter {
    pub fn mode(&self) -> RouterMode {
        match self {
            SyncRouter::Tcp(_) => RouterMode::Tcp,
            SyncRouter::Http(_) => RouterMode::Http,
        }
    }

    /// Short human readable summary for logs.
    pub fn describe(&self) -> String {
        match self {
            SyncRouter::Tcp(router) => format!("tcp router via {}", router.routing_api_url()),
            SyncRouter::Http(router) => format!("http router via {} message bus server(s)", router.servers().len()),
        }
    }
}
