use clap::Args;
use comfy_table::Table;
use stackup::readiness;

use crate::cli::GlobalFlags;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit machine-readable JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: StatusArgs, _global: &GlobalFlags) -> anyhow::Result<()> {
    let client = readiness::probe_client()?;
    let statuses = readiness::stack_status(&client).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(["SERVICE", "ENDPOINT", "STATUS"]);
    for status in &statuses {
        table.add_row([
            status.name,
            status.endpoint.as_str(),
            if status.running {
                "running"
            } else {
                "not running"
            },
        ]);
    }
    println!("{table}");

    Ok(())
}
