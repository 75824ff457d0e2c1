//! Operator-facing console affordances: the success banner and the
//! acknowledgment pause.

use crate::constants::{defaults, endpoints, tools};
use std::io::{self, BufRead, IsTerminal, Write};

/// Print the success banner with operator instructions. Printed exactly once
/// per successful provisioning run, and self-sufficient when the launch step
/// is skipped: it names the command that starts the dashboard.
pub fn print_banner() {
    println!();
    println!("============================================================");
    println!("  Setup complete - live chat sentiment stack");
    println!();
    println!("  1. Make sure Docker Desktop is running");
    println!(
        "  2. Start the dashboard: stackup up  (runs: {} {})",
        tools::PYTHON,
        defaults::APP_ENTRYPOINT
    );
    println!("  3. Open it at: {}", endpoints::DASHBOARD_URL);
    println!();
    println!("  Kibana:         {}", endpoints::KIBANA_URL);
    println!("  Elasticsearch:  {}", endpoints::ELASTICSEARCH_URL);
    println!("  Kafka:          {}", endpoints::KAFKA_ADDR);
    println!();
    println!("  Press Ctrl+C to stop all services");
    println!("============================================================");
    println!();
}

/// Wait for the operator to acknowledge before continuing.
///
/// Skipped under `assume_yes` and whenever stdin is not a terminal, so
/// automated runs never block on a prompt.
pub fn wait_for_acknowledgment(assume_yes: bool) -> io::Result<()> {
    let stdin = io::stdin();
    if assume_yes || !stdin.is_terminal() {
        return Ok(());
    }

    print!("Press Enter to continue...");
    io::stdout().flush()?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(())
}
