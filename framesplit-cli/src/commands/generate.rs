//! Generate command implementation

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use framesplit_core::fixture;

use crate::error::{CliError, CliResult};

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Number of frames to write
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub frames: u64,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        if self.frames == 0 {
            return Err(
                CliError::InvalidArgument("frame count must be greater than zero".to_string())
                    .into(),
            );
        }

        fixture::generate_file(&self.output, self.frames)
            .with_context(|| format!("failed to write {}", self.output.display()))?;

        let size = std::fs::metadata(&self.output)?.len();
        println!(
            "Wrote {} frame(s), {} bytes, to {}",
            self.frames,
            size,
            self.output.display()
        );
        Ok(())
    }
}
