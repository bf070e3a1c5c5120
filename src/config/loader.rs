//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{MessageBusServer, RouterMode, SyncConfig};
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_CLIENT_SECRET: &str = "ROUTE_SYNC_ROUTING_API_CLIENT_SECRET";
pub const ENV_NATS_SERVERS: &str = "ROUTE_SYNC_NATS_SERVERS";
pub const ENV_LOG_LEVEL: &str = "ROUTE_SYNC_LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid raw NATS server list: {0}")]
    RawNatsServers(#[from] serde_json::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides are applied after the file is parsed.
pub fn load_config(path: &Path) -> Result<SyncConfig, ConfigError> {
    load(Some(path), None)
}

/// Load configuration from an optional file (defaults otherwise), force the
/// router mode if requested, apply environment overrides and validate.
pub fn load(path: Option<&Path>, mode: Option<RouterMode>) -> Result<SyncConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => SyncConfig::default(),
    };
    if let Some(mode) = mode {
        config.router_mode = mode;
    }
    finish(config, |key| std::env::var(key).ok())
}

/// Parse a TOML document without validating it.
pub fn parse_config(content: &str) -> Result<SyncConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

fn finish<F>(mut config: SyncConfig, lookup: F) -> Result<SyncConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    apply_overrides(&mut config, lookup);
    resolve_nats_servers(&mut config)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply overrides from a key lookup (normally the process environment).
///
/// Secrets are expected to arrive this way rather than from the file.
pub fn apply_overrides<F>(config: &mut SyncConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(secret) = lookup(ENV_CLIENT_SECRET) {
        config.routing_api_client_secret = secret;
    }
    if let Some(raw) = lookup(ENV_NATS_SERVERS) {
        config.raw_nats_servers = Some(raw);
        config.nats_servers.clear();
    }
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.observability.log_level = level;
    }
}

/// Fill `nats_servers` from `raw_nats_servers` when no servers are listed.
pub fn resolve_nats_servers(config: &mut SyncConfig) -> Result<(), ConfigError> {
    if !config.nats_servers.is_empty() {
        return Ok(());
    }
    if let Some(raw) = config.raw_nats_servers.as_deref() {
        if !raw.trim().is_empty() {
            let servers: Vec<MessageBusServer> = serde_json::from_str(raw)?;
            tracing::debug!(count = servers.len(), "Resolved message bus servers from raw list");
            config.nats_servers = servers;
        }
    }
    Ok(())
}
