//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that control plane URLs parse
//! - Check that the fields the selected router mode needs are present
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SyncConfig → Result<(), Vec<ValidationError>>
//! - Only fields of the selected mode are required

use thiserror::Error;
use url::Url;

use crate::config::schema::{RouterMode, SyncConfig};

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required in {mode} mode")]
    Missing {
        field: &'static str,
        mode: RouterMode,
    },

    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("message bus server #{index} has an empty host")]
    EmptyServerHost { index: usize },
}

/// Validate a configuration snapshot for its selected router mode.
pub fn validate_config(config: &SyncConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.router_mode {
        RouterMode::Tcp => {
            let mode = RouterMode::Tcp;
            check_url(&mut errors, "routing_api_url", &config.routing_api_url, mode);
            check_url(&mut errors, "uaa_api_url", &config.uaa_api_url, mode);
            if config.routing_api_username.is_empty() {
                errors.push(ValidationError::Missing { field: "routing_api_username", mode });
            }
            if config.routing_api_client_secret.is_empty() {
                errors.push(ValidationError::Missing { field: "routing_api_client_secret", mode });
            }
        }
        RouterMode::Http => {
            if config.nats_servers.is_empty() {
                errors.push(ValidationError::Missing {
                    field: "nats_servers",
                    mode: RouterMode::Http,
                });
            }
            for (index, server) in config.nats_servers.iter().enumerate() {
                if server.host.trim().is_empty() {
                    errors.push(ValidationError::EmptyServerHost { index });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str, mode: RouterMode) {
    if value.is_empty() {
        errors.push(ValidationError::Missing { field, mode });
    } else if Url::parse(value).is_err() {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}
