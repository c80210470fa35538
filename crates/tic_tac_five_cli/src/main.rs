//! tic_tac_five - five in a row in the terminal.

use anyhow::Result;
use clap::Parser;
use tic_tac_five_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tic_tac_five_cli::run(&cli, std::io::stdout())
}
