//! Command-line entry point for tango

use clap::Parser;
use tango_cli::commands::Commands;

/// Generate printable A4 vocabulary word tests from CSV word lists
#[derive(Debug, Parser)]
#[command(name = "tango", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
