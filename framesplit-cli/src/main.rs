//! framesplit command-line entry point

use clap::Parser;

use framesplit_cli::commands::Commands;

/// Split binary recordings into marker-aligned parts
#[derive(Debug, Parser)]
#[command(name = "framesplit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
