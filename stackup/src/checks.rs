//! Presence checks for the external tools the stack depends on.

use crate::constants::tools;
use crate::step::Step;

/// Container runtime check. Fatal when absent, with a download hint.
pub fn docker() -> Step {
    Step::tool_check("Docker", tools::DOCKER, &["--version"])
        .hint(format!("Download it from {}", tools::DOCKER_INSTALL_URL))
}

/// Orchestration CLI check.
pub fn docker_compose() -> Step {
    Step::tool_check("Docker Compose", tools::DOCKER_COMPOSE, &["--version"])
        .hint("It is bundled with Docker Desktop.")
}
