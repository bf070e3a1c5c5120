//! Routing API backed TCP router.

use thiserror::Error;
use url::Url;

use crate::uaa::UaaClient;

/// A TCP router that syncs routes through the routing API.
pub trait TcpRouter: Send + Sync + std::fmt::Debug {
    /// Routing API base URL.
    fn routing_api_url(&self) -> &Url;

    /// Whether TLS verification is skipped for routing API calls.
    fn skip_tls_verification(&self) -> bool;
}

/// Errors raised while constructing a TCP router.
#[derive(Debug, Error)]
pub enum TcpRouterError {
    #[error("invalid routing API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported routing API scheme '{0}'")]
    UnsupportedScheme(String),
}

/// TCP router handle owning its authorization client.
#[derive(Debug)]
pub struct RoutingApiRouter<C> {
    uaa_client: C,
    api_url: Url,
    skip_tls_verification: bool,
}

impl<C: UaaClient> RoutingApiRouter<C> {
    /// Create a router for the given routing API.
    pub fn new(uaa_client: C, routing_api_url: &str, skip_tls_verification: bool) -> Result<Self, TcpRouterError> {
        let api_url = Url::parse(routing_api_url).map_err(|source| TcpRouterError::InvalidUrl {
            url: routing_api_url.to_string(),
            source,
        })?;

        match api_url.scheme() {
            "http" | "https" => {}
            other => return Err(TcpRouterError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            uaa_client,
            api_url,
            skip_tls_verification,
        })
    }

    /// The authorization client used for routing API calls.
    pub fn uaa_client(&self) -> &C {
        &self.uaa_client
    }
}

impl<C: UaaClient> TcpRouter for RoutingApiRouter<C> {
    fn routing_api_url(&self) -> &Url {
        &self.api_url
    }

    fn skip_tls_verification(&self) -> bool {
        self.skip_tls_verification
    }
}
