//! Terminal router construction failures.

use thiserror::Error;

/// Boxed error returned by an injected factory.
pub type FactoryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A router could not be constructed.
///
/// Both variants are terminal: the session cannot continue without a router.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The authorization client factory failed.
    #[error("creating UAA client: {0}")]
    AuthClient(#[source] FactoryError),

    /// The TCP router factory failed after a client was obtained.
    #[error("creating TCP router: {0}")]
    TcpRouter(#[source] FactoryError),
}

impl BuildError {
    /// The diagnostic tag of the failing stage.
    pub fn stage(&self) -> &'static str {
        match self {
            BuildError::AuthClient(_) => "creating UAA client",
            BuildError::TcpRouter(_) => "creating TCP router",
        }
    }
}
