use crate::commands;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stackup",
    version,
    about = "Provision and launch the live chat sentiment analysis stack"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Project directory containing docker-compose.yml and requirements.txt
    #[arg(long, global = true, default_value = ".", env = "STACKUP_PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Compose file, relative to the project directory
    #[arg(long, global = true, default_value = "docker-compose.yml")]
    pub compose_file: PathBuf,
}

impl GlobalFlags {
    pub fn compose_stack(&self) -> stackup::compose::ComposeStack {
        stackup::compose::ComposeStack::new(&self.project_dir, &self.compose_file)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the provisioning sequence, start the services, launch the dashboard
    Up(commands::up::UpArgs),
    /// Stop the service stack
    Down(commands::down::DownArgs),
    /// Show which stack services are reachable
    Status(commands::status::StatusArgs),
}
