mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Operator-facing progress goes to stdout via println!; logs stay on
    // stderr so they never pollute the Step/banner contract.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Up(args) => commands::up::execute(args, &cli.global).await,
        Command::Down(args) => commands::down::execute(args, &cli.global).await,
        Command::Status(args) => commands::status::execute(args, &cli.global).await,
    }
}
