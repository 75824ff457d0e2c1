//! Error types for the provisioning sequencer.

use std::io;
use thiserror::Error;

pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Everything that can go wrong while provisioning the stack.
///
/// Errors are reported to the operator as console text and terminate the
/// sequence with a non-zero exit status. There is no retry and no partial
/// continuation; readiness polling is the one sanctioned retry loop and it
/// lives in [`crate::readiness`].
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// A required external tool is not installed or not on the search path.
    #[error("{tool} is not installed or not on PATH.{}", .hint.as_deref().map(|h| format!(" {h}")).unwrap_or_default())]
    MissingDependency { tool: String, hint: Option<String> },

    /// A spawned command exited with a failure status.
    #[error("step '{step}' failed: `{command}` exited with status {code}")]
    ChildProcessFailure {
        step: String,
        command: String,
        code: i32,
    },

    /// The command could not be started at all.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// A per-step timeout elapsed before the child exited.
    #[error("step '{step}' timed out after {limit_secs}s")]
    Timeout { step: String, limit_secs: u64 },

    /// Readiness polling for a backing service was exhausted.
    #[error("service '{service}' did not become ready after {attempts} attempts")]
    ServiceUnready { service: String, attempts: u32 },

    /// The operator aborted the run.
    #[error("interrupted by operator")]
    Interrupted,

    #[error(transparent)]
    Io(#[from] io::Error),
}
