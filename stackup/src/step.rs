//! Provisioning step model and execution.

use crate::errors::{ProvisionError, ProvisionResult};
use serde::Serialize;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

/// What kind of action a step performs, which decides how its failure is
/// reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// Presence check for an external tool; failure means the tool is
    /// missing, surfaced as [`ProvisionError::MissingDependency`].
    ToolCheck {
        /// Human name used in the diagnostic ("Docker", not "docker").
        tool: String,
    },
    /// Setup action; failure is a [`ProvisionError::ChildProcessFailure`].
    Action,
}

/// A single ordered provisioning action.
///
/// Steps are created at program start from a fixed plan (see
/// [`crate::plan`]), run strictly in declaration order, and discarded when
/// the sequencer exits.
#[derive(Clone, Debug)]
pub struct Step {
    /// Human-readable label, shown in progress output.
    pub name: String,
    /// Program to invoke.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Whether failure always halts the sequence, regardless of strictness.
    pub required: bool,
    /// Remediation hint shown alongside the failure diagnostic.
    pub hint: Option<String>,
    /// Working directory for the child process.
    pub workdir: Option<PathBuf>,
    /// Optional wall-clock limit for the child process.
    pub timeout: Option<Duration>,
    /// Discard the child's output instead of inheriting the console.
    /// Tool checks are quiet; everything else shows its output.
    pub quiet: bool,
    pub kind: StepKind,
}

impl Step {
    /// A quiet presence check for an external tool. Required by default.
    pub fn tool_check(
        tool: impl Into<String>,
        program: impl Into<String>,
        args: &[&str],
    ) -> Self {
        let tool = tool.into();
        Self {
            name: format!("Checking {tool}"),
            program: program.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
            required: true,
            hint: None,
            workdir: None,
            timeout: None,
            quiet: true,
            kind: StepKind::ToolCheck { tool },
        }
    }

    /// A setup action whose output is shown on the caller's console.
    /// Not required by default; strict mode still makes its failure fatal.
    pub fn action(name: impl Into<String>, program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
            required: false,
            hint: None,
            workdir: None,
            timeout: None,
            quiet: false,
            kind: StepKind::Action,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// The full command line, for diagnostics.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    /// Run the step to completion.
    ///
    /// The child inherits the caller's console unless the step is quiet;
    /// stdin is always detached so children cannot eat operator keystrokes.
    /// Returns a [`StepReport`] whether or not the child succeeded; only
    /// spawn failures and timeouts are errors here. Interpreting a failed
    /// exit status is the sequencer's job.
    pub async fn run(&self) -> ProvisionResult<StepReport> {
        let started = Instant::now();

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).stdin(Stdio::null());
        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        // An operator interrupt must not leave the child running.
        cmd.kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|source| ProvisionError::Spawn {
            command: self.command_line(),
            source,
        })?;

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status?,
                Err(_elapsed) => {
                    let _ = child.start_kill();
                    let _ = child.wait().await;
                    return Err(ProvisionError::Timeout {
                        step: self.name.clone(),
                        limit_secs: limit.as_secs(),
                    });
                }
            },
            None => child.wait().await?,
        };

        Ok(StepReport {
            name: self.name.clone(),
            command: self.command_line(),
            exit_code: status.code(),
            success: status.success(),
            duration_ms: started.elapsed().as_millis() as u64,
            finished_at: chrono::Utc::now(),
        })
    }
}

/// Outcome record for one executed step.
#[derive(Clone, Debug, Serialize)]
pub struct StepReport {
    pub name: String,
    pub command: String,
    /// Exit code, if the child exited normally (None if killed by signal).
    pub exit_code: Option<i32>,
    pub success: bool,
    pub duration_ms: u64,
    pub finished_at: chrono::DateTime<chrono::Utc>,
}
