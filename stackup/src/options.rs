//! Configuration for the provisioning sequencer.

use crate::constants::defaults;
use std::path::PathBuf;
use std::time::Duration;

/// Options controlling a provisioning run.
///
/// Users can create it with defaults and modify fields as needed.
#[derive(Clone, Debug)]
pub struct SequencerOptions {
    /// Project directory containing the compose file and the dependency
    /// manifest. Passed explicitly to every child process spawn; the
    /// sequencer never changes its own working directory.
    pub project_dir: PathBuf,

    /// Compose file name, resolved relative to `project_dir`.
    pub compose_file: PathBuf,

    /// Treat failures of the dependency install and corpus download as
    /// fatal. Default: true, for consistency with the tool checks.
    pub strict: bool,

    /// Skip the operator acknowledgment prompt. Also implied when stdin is
    /// not a terminal.
    pub assume_yes: bool,

    /// Wall-clock limit applied to each provisioning step.
    ///
    /// None (default): a step blocks for as long as its child runs.
    pub step_timeout: Option<Duration>,

    /// Readiness polling: how many attempts per service.
    pub ready_attempts: u32,

    /// Readiness polling: delay between attempts.
    pub ready_interval: Duration,
}

impl Default for SequencerOptions {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            compose_file: PathBuf::from(defaults::COMPOSE_FILE),
            strict: true,
            assume_yes: false,
            step_timeout: None,
            ready_attempts: defaults::READY_ATTEMPTS,
            ready_interval: Duration::from_secs(defaults::READY_INTERVAL_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = SequencerOptions::default();
        assert!(opts.strict, "unguarded step failures should default to fatal");
        assert!(!opts.assume_yes);
        assert!(opts.step_timeout.is_none(), "no step timeout by default");
        assert_eq!(opts.ready_attempts, 30);
        assert_eq!(opts.ready_interval, Duration::from_secs(2));
    }
}
