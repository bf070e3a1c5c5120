//! Configuration schema definitions.
//!
//! This module defines the configuration snapshot consumed by the router
//! builder. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::lifecycle::fatal::FatalPolicy;

/// Root configuration for a route-sync session.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SyncConfig {
    /// Which router backend to construct.
    pub router_mode: RouterMode,

    /// What to do when router construction fails.
    pub fatal_policy: FatalPolicy,

    /// Routing API base URL (e.g., "https://api.cf.example.org").
    pub routing_api_url: String,

    /// UAA base URL used to obtain routing API tokens.
    pub uaa_api_url: String,

    /// OAuth client name for the routing API.
    pub routing_api_username: String,

    /// OAuth client secret for the routing API.
    pub routing_api_client_secret: String,

    /// Skip TLS certificate verification for control plane calls.
    pub skip_tls_verification: bool,

    /// Message bus servers for the HTTP path.
    pub nats_servers: Vec<MessageBusServer>,

    /// Raw JSON server list, used when `nats_servers` is empty.
    pub raw_nats_servers: Option<String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Router backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RouterMode {
    /// TCP routes via the routing API.
    Tcp,
    /// HTTP routes via the message bus.
    #[default]
    Http,
}

impl RouterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterMode::Tcp => "tcp",
            RouterMode::Http => "http",
        }
    }
}

impl std::fmt::Display for RouterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message bus server.
///
/// Accepts both `host` and `Host` style keys so raw server lists exported by
/// the platform can be pasted in unchanged.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageBusServer {
    #[serde(alias = "Host")]
    pub host: String,

    #[serde(alias = "User", default)]
    pub user: String,

    #[serde(alias = "Password", default)]
    pub password: String,
}

impl std::fmt::Debug for MessageBusServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageBusServer")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
