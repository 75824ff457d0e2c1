use crate::cli::GlobalFlags;
use clap::Args;

#[derive(Args, Debug)]
pub struct DownArgs {}

pub async fn execute(_args: DownArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    println!("Stopping services...");
    global.compose_stack().down().await;
    println!("Services stopped");
    Ok(())
}
