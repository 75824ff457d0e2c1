#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Test harness: a throwaway project directory plus a controlled PATH of
/// stub tools, so runs never touch the real Docker or Python toolchain.
pub struct TestContext {
    pub project: TempDir,
    bin: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let project = tempfile::tempdir().expect("create project dir");
        let bin = project.path().join("stub-bin");
        fs::create_dir(&bin).expect("create stub bin dir");
        Self { project, bin }
    }

    /// Drop a stub executable onto the controlled PATH.
    pub fn stub_tool(&self, name: &str, script: &str) {
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).expect("write stub");
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }

    pub fn stub_ok(&self, name: &str) {
        self.stub_tool(name, "exit 0");
    }

    /// A stub that appends its arguments to a log file in the project dir,
    /// so tests can assert what was invoked. The path is absolute because
    /// tool checks run without a working directory override.
    pub fn stub_logging(&self, name: &str, log: &str) {
        let log_path = self.project.path().join(log);
        self.stub_tool(
            name,
            &format!("echo \"$@\" >> \"{}\"\nexit 0", log_path.display()),
        );
    }

    pub fn project_file(&self, name: &str) -> String {
        fs::read_to_string(self.project.path().join(name)).unwrap_or_default()
    }

    /// Command with PATH restricted to the stubs; tools not stubbed are
    /// genuinely absent from the child's point of view.
    pub fn cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_stackup");
        let mut cmd = Command::new(bin_path);
        cmd.env("PATH", &self.bin)
            .env_remove("STACKUP_PROJECT_DIR")
            .env_remove("RUST_LOG")
            .arg("--project-dir")
            .arg(self.project.path())
            .timeout(Duration::from_secs(60));
        cmd
    }

    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().expect("run stackup");
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

/// Context where every external tool is present and succeeds.
pub fn provisioned() -> TestContext {
    let ctx = TestContext::new();
    for tool in ["docker", "docker-compose", "pip", "python"] {
        ctx.stub_ok(tool);
    }
    ctx
}
