//! CLI command implementations

use clap::Subcommand;

use crate::error::CliResult;

pub mod generate;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a recording into marker-aligned parts
    Split(split::SplitArgs),

    /// Generate a synthetic recording of fixed-size frames
    Generate(generate::GenerateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Generate(args) => args.execute(),
        }
    }
}
