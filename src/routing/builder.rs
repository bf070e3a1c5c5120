//! Router construction.
//!
//! # Responsibilities
//! - Derive the authorization config from the sync config
//! - Run the dependency chain for the TCP or HTTP router
//! - Log the failing stage and hand back a terminal error
//!
//! # Design Decisions
//! - Dependencies are built by caller-supplied factories so tests can swap them
//! - Never returns a partially built router
//! - Holds only borrowed config and the session span; nothing persists between calls

use std::sync::Arc;

use tracing::Span;

use crate::config::SyncConfig;
use crate::messagebus::MessageBus;
use crate::routing::error::{BuildError, FactoryError};
use crate::routing::http::HttpRouter;
use crate::tcp::TcpRouter;
use crate::uaa::{AuthConfig, Clock, SystemClock, UaaClient};

/// Builds the router for one sync session.
#[derive(Debug, Clone, Copy)]
pub struct RouterBuilder<'a> {
    config: &'a SyncConfig,
    span: &'a Span,
}

impl<'a> RouterBuilder<'a> {
    pub fn new(config: &'a SyncConfig, span: &'a Span) -> Self {
        Self { config, span }
    }

    /// Authorization parameters for the routing API client.
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            uaa_endpoint: self.config.uaa_api_url.clone(),
            client_name: self.config.routing_api_username.clone(),
            client_secret: self.config.routing_api_client_secret.clone(),
            skip_verification: self.config.skip_tls_verification,
        }
    }

    /// Build a TCP router: authorization client first, then the router that
    /// takes ownership of it.
    ///
    /// Returns exactly the router produced by `tcp_router_factory`. If the
    /// authorization factory fails the router factory is never called.
    pub fn create_tcp_router<C, T, A, R, AE, RE>(
        &self,
        auth_client_factory: A,
        tcp_router_factory: R,
    ) -> Result<T, BuildError>
    where
        C: UaaClient,
        T: TcpRouter,
        A: FnOnce(&Span, AuthConfig, Arc<dyn Clock>) -> Result<C, AE>,
        R: FnOnce(C, &str, bool) -> Result<T, RE>,
        AE: Into<FactoryError>,
        RE: Into<FactoryError>,
    {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let uaa_client = match auth_client_factory(self.span, self.auth_config(), clock) {
            Ok(client) => client,
            Err(e) => {
                let e = e.into();
                self.span.in_scope(|| tracing::error!(error = %e, "creating UAA client"));
                return Err(BuildError::AuthClient(e));
            }
        };

        let router = match tcp_router_factory(
            uaa_client,
            &self.config.routing_api_url,
            self.config.skip_tls_verification,
        ) {
            Ok(router) => router,
            Err(e) => {
                let e = e.into();
                self.span.in_scope(|| tracing::error!(error = %e, "creating TCP router"));
                return Err(BuildError::TcpRouter(e));
            }
        };

        self.span.in_scope(|| {
            tracing::info!(
                routing_api_url = %router.routing_api_url(),
                skip_tls_verification = router.skip_tls_verification(),
                "TCP router created"
            );
        });
        Ok(router)
    }

    /// Build an HTTP router around the message bus from `message_bus_factory`.
    pub fn create_http_router<M, F>(&self, message_bus_factory: F) -> HttpRouter<M>
    where
        M: MessageBus,
        F: FnOnce(&Span) -> M,
    {
        let message_bus = message_bus_factory(self.span);
        self.span.in_scope(|| {
            tracing::info!(server_count = message_bus.servers().len(), "HTTP router created");
        });
        HttpRouter::new(message_bus)
    }
}
