//! Command-line entry point for vachan

use clap::Parser;
use vachan_cli::commands::Commands;

/// Story import tool: split Devanagari stories into sentences and transliterate them
#[derive(Debug, Parser)]
#[command(name = "vachan", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
