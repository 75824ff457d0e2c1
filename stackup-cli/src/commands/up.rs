use crate::cli::GlobalFlags;
use clap::Args;
use stackup::errors::ProvisionError;
use stackup::readiness::{self, ProbeOptions};
use stackup::{console, plan, SequencerOptions, Sequencer};

#[derive(Args, Debug)]
pub struct UpArgs {
    /// Run the provisioning steps and print the banner, nothing else
    #[arg(long)]
    pub provision_only: bool,

    /// Do not wait for the backing services to become ready
    #[arg(long)]
    pub no_wait: bool,

    /// Provision and start services but do not launch the dashboard
    #[arg(long)]
    pub skip_launch: bool,

    /// Keep going when the dependency install or corpus download fails
    #[arg(long)]
    pub lenient: bool,

    /// Skip the operator acknowledgment prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Per-step timeout in seconds (default: none)
    #[arg(long, value_name = "SECS")]
    pub step_timeout: Option<u64>,
}

impl UpArgs {
    fn options(&self, global: &GlobalFlags) -> SequencerOptions {
        SequencerOptions {
            project_dir: global.project_dir.clone(),
            compose_file: global.compose_file.clone(),
            strict: !self.lenient,
            assume_yes: self.yes,
            step_timeout: self.step_timeout.map(std::time::Duration::from_secs),
            ..Default::default()
        }
    }
}

pub async fn execute(args: UpArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let opts = args.options(global);

    // Checks first, launch last. The order is the contract.
    let sequencer = Sequencer::new(plan::provisioning_steps(&opts), opts.strict);
    sequencer.run().await?;

    if args.provision_only {
        console::print_banner();
        return Ok(());
    }

    let stack = global.compose_stack();
    println!("Starting services (Kafka, Elasticsearch, Kibana)...");
    stack.up().await?;

    if !args.no_wait {
        let probe_opts = ProbeOptions {
            attempts: opts.ready_attempts,
            interval: opts.ready_interval,
        };
        let client = readiness::probe_client()?;
        for service in readiness::awaited_services() {
            match readiness::wait_ready(&service, &probe_opts, &client).await {
                Ok(()) => {}
                Err(err) if !service.critical || !opts.strict => {
                    tracing::warn!(service = service.name, error = %err, "continuing without service");
                    println!("{} may not be fully ready", service.name);
                }
                Err(err) => {
                    stack.down().await;
                    return Err(err.into());
                }
            }
        }
    }

    console::print_banner();

    if args.skip_launch {
        return Ok(());
    }

    console::wait_for_acknowledgment(opts.assume_yes)?;

    // The launch blocks until the dashboard exits; Ctrl+C aborts it and
    // tears the services down, mirroring a normal shutdown.
    let launch = plan::launch_step(&opts);
    println!("Launching the dashboard ({})...", launch.command_line());
    let outcome = tokio::select! {
        result = launch.run() => result,
        _ = tokio::signal::ctrl_c() => Err(ProvisionError::Interrupted),
    };

    println!("Cleaning up services...");
    stack.down().await;

    match outcome {
        Ok(report) if report.success => Ok(()),
        Ok(report) => Err(ProvisionError::ChildProcessFailure {
            step: launch.name.clone(),
            command: report.command,
            code: report.exit_code.unwrap_or(-1),
        }
        .into()),
        Err(ProvisionError::Interrupted) => {
            println!("Shutting down...");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
