//! UAA client with token caching.
//!
//! # Responsibilities
//! - Validate the UAA endpoint and credentials at construction
//! - Build an HTTP client honouring the TLS-skip flag
//! - Fetch client-credentials tokens and cache them until near expiry

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::Span;
use url::Url;

use crate::uaa::clock::Clock;
use crate::uaa::types::{AuthConfig, Token, TokenResponse, UaaError, UaaResult};

/// Tokens closer than this to expiry are refreshed.
const REFRESH_MARGIN: Duration = Duration::from_secs(30);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Authorization handle owned by a TCP router.
pub trait UaaClient: Send + Sync + std::fmt::Debug {
    /// The configuration the client was built from.
    fn config(&self) -> &AuthConfig;
}

/// UAA client talking OAuth2 client-credentials over HTTP.
pub struct HttpUaaClient {
    config: AuthConfig,
    token_url: Url,
    http: reqwest::Client,
    clock: Arc<dyn Clock>,
    cached: Mutex<Option<Token>>,
    span: Span,
}

impl HttpUaaClient {
    /// Create a new UAA client.
    ///
    /// No network traffic happens here; tokens are fetched lazily.
    pub fn new(span: &Span, config: AuthConfig, clock: Arc<dyn Clock>) -> UaaResult<Self> {
        let token_url = token_url(&config.uaa_endpoint)?;

        if config.client_name.is_empty() {
            return Err(UaaError::MissingCredential("client_name"));
        }
        if config.client_secret.is_empty() {
            return Err(UaaError::MissingCredential("client_secret"));
        }

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.skip_verification)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        span.in_scope(|| {
            tracing::debug!(
                uaa_endpoint = %config.uaa_endpoint,
                client_name = %config.client_name,
                skip_verification = config.skip_verification,
                "UAA client created"
            );
        });

        Ok(Self {
            config,
            token_url,
            http,
            clock,
            cached: Mutex::new(None),
            span: span.clone(),
        })
    }

    /// Return an access token, fetching a new one when the cached one is
    /// missing, close to expiry, or `force_refresh` is set.
    pub async fn fetch_token(&self, force_refresh: bool) -> UaaResult<String> {
        if !force_refresh {
            if let Some(token) = self.cached_token() {
                return Ok(token.access_token);
            }
        }

        let response = self
            .http
            .post(self.token_url.clone())
            .basic_auth(&self.config.client_name, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.span.in_scope(|| {
                tracing::warn!(status = status.as_u16(), "UAA token request rejected");
            });
            return Err(UaaError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: TokenResponse = response.json().await?;
        let expires_at = self
            .clock
            .now()
            .checked_add(Duration::from_secs(body.expires_in))
            .ok_or(UaaError::InvalidExpiry(body.expires_in))?;
        let token = Token {
            access_token: body.access_token,
            expires_at,
        };
        self.span.in_scope(|| {
            tracing::debug!(expires_in = body.expires_in, "Fetched UAA token");
        });

        let access_token = token.access_token.clone();
        *self.lock_cache() = Some(token);
        Ok(access_token)
    }

    /// The cached token if it is still fresh.
    pub fn cached_token(&self) -> Option<Token> {
        let now = self.clock.now();
        self.lock_cache()
            .as_ref()
            .filter(|t| t.is_fresh(now, REFRESH_MARGIN))
            .cloned()
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, Option<Token>> {
        self.cached.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// `{endpoint}/oauth/token`, keeping any context path on the endpoint.
fn token_url(endpoint: &str) -> UaaResult<Url> {
    let invalid = || UaaError::InvalidEndpoint(endpoint.to_string());
    let mut url = Url::parse(endpoint).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(["oauth", "token"]);
    Ok(url)
}

impl UaaClient for HttpUaaClient {
    fn config(&self) -> &AuthConfig {
        &self.config
    }
}

impl std::fmt::Debug for HttpUaaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpUaaClient")
            .field("token_url", &self.token_url.as_str())
            .field("client_name", &self.config.client_name)
            .field("skip_verification", &self.config.skip_verification)
            .finish()
    }
}
