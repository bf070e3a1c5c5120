//! Fatal error policy for router construction.
//!
//! A session without a router cannot do anything useful, so a build failure
//! either ends the process or ends the session. Which one is a deployment
//! decision, made explicit here instead of left to control flow.

use serde::{Deserialize, Serialize};

use crate::routing::BuildError;

/// Exit status used when a build failure terminates the process.
pub const EXIT_CODE: i32 = 1;

/// What happens when a router cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FatalPolicy {
    /// Log and terminate the process.
    #[default]
    ExitProcess,
    /// Log and hand the error to the session owner.
    AbortSession,
}

impl FatalPolicy {
    /// Pass a successful build through; enforce the policy on failure.
    pub fn apply<T>(self, result: Result<T, BuildError>) -> Result<T, BuildError> {
        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        tracing::error!(
            stage = err.stage(),
            error = %err,
            policy = ?self,
            "router construction failed"
        );

        match self {
            FatalPolicy::ExitProcess => std::process::exit(EXIT_CODE),
            FatalPolicy::AbortSession => Err(err),
        }
    }
}
