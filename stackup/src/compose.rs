//! Docker Compose stack control.
//!
//! Thin wrapper around `docker-compose -f <file> up -d` / `down`, always run
//! with an explicit working directory.

use crate::constants::tools;
use crate::errors::{ProvisionError, ProvisionResult};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Handle on the compose-managed service stack.
#[derive(Clone, Debug)]
pub struct ComposeStack {
    project_dir: PathBuf,
    compose_file: PathBuf,
}

impl ComposeStack {
    pub fn new(project_dir: impl Into<PathBuf>, compose_file: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            compose_file: compose_file.into(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(tools::DOCKER_COMPOSE);
        cmd.arg("-f")
            .arg(&self.compose_file)
            .args(args)
            .current_dir(&self.project_dir)
            .kill_on_drop(true);
        cmd
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!(
            "{} -f {} {}",
            tools::DOCKER_COMPOSE,
            self.compose_file.display(),
            args.join(" ")
        )
    }

    /// Start the service stack in detached mode. Fatal on failure, with the
    /// compose stderr surfaced to the operator.
    pub async fn up(&self) -> ProvisionResult<()> {
        let args = ["up", "-d"];
        let output = self
            .command(&args)
            .output()
            .await
            .map_err(|source| ProvisionError::Spawn {
                command: self.command_line(&args),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(stderr = %stderr.trim(), "compose up failed");
            return Err(ProvisionError::ChildProcessFailure {
                step: "Starting services".to_string(),
                command: self.command_line(&args),
                code: output.status.code().unwrap_or(-1),
            });
        }

        tracing::info!("service stack started");
        Ok(())
    }

    /// Tear the service stack down. Best effort: teardown runs on every exit
    /// path, so a failure here is logged rather than propagated.
    pub async fn down(&self) {
        let args = ["down"];
        match self.command(&args).output().await {
            Ok(output) if output.status.success() => {
                tracing::info!("service stack stopped");
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                tracing::warn!(
                    code = ?output.status.code(),
                    stderr = %stderr.trim(),
                    "compose down failed"
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not run compose down");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_rendering() {
        let stack = ComposeStack::new("/srv/app", "docker-compose.yml");
        assert_eq!(
            stack.command_line(&["up", "-d"]),
            "docker-compose -f docker-compose.yml up -d"
        );
    }
}
