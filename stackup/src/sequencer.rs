//! The provisioning sequencer: ordered steps, fail-fast.

use crate::errors::{ProvisionError, ProvisionResult};
use crate::step::{Step, StepKind, StepReport};
use std::io::ErrorKind;

/// Runs a fixed, ordered list of provisioning steps.
///
/// Steps execute strictly in declaration order. A required step's failure
/// immediately terminates the sequence without executing later steps; in
/// strict mode (the default) every failure is treated as required.
pub struct Sequencer {
    steps: Vec<Step>,
    strict: bool,
}

impl Sequencer {
    pub fn new(steps: Vec<Step>, strict: bool) -> Self {
        Self { steps, strict }
    }

    /// Execute every step in order.
    ///
    /// Progress is echoed to stdout as `Step N: <name>...` lines; that
    /// output is part of the operator contract, not logging.
    pub async fn run(&self) -> ProvisionResult<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.steps.len());

        for (idx, step) in self.steps.iter().enumerate() {
            println!("Step {}: {}...", idx + 1, step.name);

            let fatal = step.required || self.strict;
            match step.run().await {
                Ok(report) if report.success => {
                    tracing::debug!(step = %step.name, duration_ms = report.duration_ms, "step succeeded");
                    reports.push(report);
                }
                Ok(report) => {
                    let err = failure_error(step, report.exit_code);
                    if fatal {
                        return Err(err);
                    }
                    tracing::warn!(step = %step.name, code = ?report.exit_code, "step failed, continuing");
                    reports.push(report);
                }
                Err(err) => {
                    let err = adapt_spawn_error(step, err);
                    if fatal {
                        return Err(err);
                    }
                    tracing::warn!(step = %step.name, error = %err, "step could not run, continuing");
                    reports.push(StepReport {
                        name: step.name.clone(),
                        command: step.command_line(),
                        exit_code: None,
                        success: false,
                        duration_ms: 0,
                        finished_at: chrono::Utc::now(),
                    });
                }
            }
        }

        Ok(reports)
    }
}

/// A tool check that exits non-zero means the tool is broken or absent;
/// report it the same way as a missing binary.
fn failure_error(step: &Step, code: Option<i32>) -> ProvisionError {
    match &step.kind {
        StepKind::ToolCheck { tool } => ProvisionError::MissingDependency {
            tool: tool.clone(),
            hint: step.hint.clone(),
        },
        StepKind::Action => ProvisionError::ChildProcessFailure {
            step: step.name.clone(),
            command: step.command_line(),
            code: code.unwrap_or(-1),
        },
    }
}

/// `ENOENT` while spawning a tool check is the canonical "not installed"
/// signal; everything else passes through untouched.
fn adapt_spawn_error(step: &Step, err: ProvisionError) -> ProvisionError {
    match (&step.kind, &err) {
        (StepKind::ToolCheck { tool }, ProvisionError::Spawn { source, .. })
            if source.kind() == ErrorKind::NotFound =>
        {
            ProvisionError::MissingDependency {
                tool: tool.clone(),
                hint: step.hint.clone(),
            }
        }
        _ => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch_step(name: &str, dir: &std::path::Path, file: &str) -> Step {
        Step::action(name, "/bin/sh", &["-c", &format!("touch {file}")]).workdir(dir)
    }

    #[tokio::test]
    async fn test_steps_run_in_declared_order() {
        let dir = tempfile::tempdir().unwrap();
        let steps = vec![
            Step::action("first", "/bin/sh", &["-c", "echo a >> order.log"]).workdir(dir.path()),
            Step::action("second", "/bin/sh", &["-c", "echo b >> order.log"]).workdir(dir.path()),
            Step::action("third", "/bin/sh", &["-c", "echo c >> order.log"]).workdir(dir.path()),
        ];

        let reports = Sequencer::new(steps, true).run().await.unwrap();
        assert_eq!(reports.len(), 3);

        let log = std::fs::read_to_string(dir.path().join("order.log")).unwrap();
        assert_eq!(log, "a\nb\nc\n");
    }

    #[tokio::test]
    async fn test_required_failure_halts_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let steps = vec![
            touch_step("before", dir.path(), "before"),
            Step::action("boom", "/bin/sh", &["-c", "exit 1"]).required(),
            touch_step("after", dir.path(), "after"),
        ];

        let err = Sequencer::new(steps, false).run().await.unwrap_err();
        assert!(matches!(err, ProvisionError::ChildProcessFailure { code: 1, .. }));

        assert!(dir.path().join("before").exists());
        assert!(
            !dir.path().join("after").exists(),
            "no step may run after a required step has failed"
        );
    }

    #[tokio::test]
    async fn test_strict_makes_optional_failure_fatal() {
        let steps = vec![Step::action("boom", "/bin/sh", &["-c", "exit 1"])];
        let err = Sequencer::new(steps, true).run().await.unwrap_err();
        assert!(matches!(err, ProvisionError::ChildProcessFailure { .. }));
    }

    #[tokio::test]
    async fn test_lenient_continues_past_optional_failure() {
        let dir = tempfile::tempdir().unwrap();
        let steps = vec![
            Step::action("boom", "/bin/sh", &["-c", "exit 1"]),
            touch_step("after", dir.path(), "after"),
        ];

        let reports = Sequencer::new(steps, false).run().await.unwrap();
        assert_eq!(reports.len(), 2);
        assert!(!reports[0].success);
        assert!(reports[1].success);
        assert!(dir.path().join("after").exists());
    }

    #[tokio::test]
    async fn test_missing_tool_check_binary_reports_missing_dependency() {
        let steps = vec![Step::tool_check("Docker", "no-such-docker-binary-xyz", &["--version"])
            .hint("Download it from https://www.docker.com/products/docker-desktop")];

        let err = Sequencer::new(steps, true).run().await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Docker is not installed"));
        assert!(msg.contains("https://www.docker.com/products/docker-desktop"));
    }

    #[tokio::test]
    async fn test_failing_tool_check_reports_missing_dependency() {
        // The tool exists but its version probe fails.
        let steps =
            vec![Step::tool_check("Docker Compose", "/bin/sh", &["-c", "exit 127"])];

        let err = Sequencer::new(steps, true).run().await.unwrap_err();
        assert!(matches!(err, ProvisionError::MissingDependency { .. }));
        assert!(err.to_string().contains("Docker Compose"));
    }

    #[tokio::test]
    async fn test_missing_action_binary_stays_spawn_error() {
        let steps = vec![Step::action("ghost", "no-such-binary-xyz", &[]).required()];
        let err = Sequencer::new(steps, true).run().await.unwrap_err();
        assert!(matches!(err, ProvisionError::Spawn { .. }));
    }
}
