//! Authorization types and error definitions.

use std::time::{Duration, SystemTime};

use serde::Deserialize;
use thiserror::Error;

/// Connection parameters for the UAA client.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// UAA base URL (e.g., "https://uaa.cf.example.org").
    pub uaa_endpoint: String,
    /// OAuth client name.
    pub client_name: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Skip TLS certificate verification.
    pub skip_verification: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("uaa_endpoint", &self.uaa_endpoint)
            .field("client_name", &self.client_name)
            .field("client_secret", &"<redacted>")
            .field("skip_verification", &self.skip_verification)
            .finish()
    }
}

/// An access token with its absolute expiry.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub expires_at: SystemTime,
}

impl Token {
    /// True if the token stays valid for at least `margin` after `now`.
    pub fn is_fresh(&self, now: SystemTime, margin: Duration) -> bool {
        match now.checked_add(margin) {
            Some(deadline) => self.expires_at > deadline,
            None => false,
        }
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Token endpoint response body.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// Errors that can occur while creating or using the UAA client.
#[derive(Debug, Error)]
pub enum UaaError {
    /// Endpoint missing or not a valid URL.
    #[error("invalid UAA endpoint '{0}'")]
    InvalidEndpoint(String),

    /// Client name or secret missing.
    #[error("missing UAA credential: {0}")]
    MissingCredential(&'static str),

    /// HTTP transport failure.
    #[error("UAA request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Token lifetime cannot be represented as an expiry time.
    #[error("UAA token expires_in out of range: {0}")]
    InvalidExpiry(u64),

    /// Token endpoint returned a non-success status.
    #[error("UAA returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type for UAA operations.
pub type UaaResult<T> = Result<T, UaaError>;
