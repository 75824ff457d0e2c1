//! The fixed provisioning plan for the sentiment stack.
//!
//! Order matters and is part of the contract: tool checks first, setup
//! actions next, the application launch dead last. Launching the dashboard
//! before the checks pass leaves the operator with a dead stack and no
//! diagnostic, so the launch step never joins the provisioning list.

use crate::checks;
use crate::constants::{defaults, tools};
use crate::options::SequencerOptions;
use crate::step::Step;

/// The four provisioning steps, in execution order.
pub fn provisioning_steps(opts: &SequencerOptions) -> Vec<Step> {
    let mut steps = vec![
        checks::docker(),
        checks::docker_compose(),
        Step::action(
            "Installing Python dependencies",
            tools::PIP,
            &["install", "-r", defaults::REQUIREMENTS_FILE],
        )
        .workdir(&opts.project_dir),
        Step::action(
            "Downloading TextBlob corpora",
            tools::PYTHON,
            &["-m", "textblob.download_corpora"],
        )
        .workdir(&opts.project_dir),
    ];

    if let Some(limit) = opts.step_timeout {
        for step in &mut steps {
            step.timeout = Some(limit);
        }
    }

    steps
}

/// The final step: hand control to the dashboard application. Blocks until
/// the application exits.
pub fn launch_step(opts: &SequencerOptions) -> Step {
    Step::action(
        "Starting the dashboard",
        tools::PYTHON,
        &[defaults::APP_ENTRYPOINT],
    )
    .workdir(&opts.project_dir)
    .required()
}
