//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, env overrides, raw server list)
//!     → validation.rs (semantic checks for the selected router mode)
//!     → SyncConfig (validated, immutable)
//!     → borrowed by the router builder for one sync session
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Secrets may come from the environment instead of the file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_config, ConfigError};
pub use schema::{MessageBusServer, ObservabilityConfig, RouterMode, SyncConfig};
pub use validation::ValidationError;
