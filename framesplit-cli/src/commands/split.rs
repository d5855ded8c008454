//! Split command implementation

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use framesplit_core::{Marker, SplitConfig, Splitter};

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};
use crate::progress::ProgressRenderer;

/// How often the progress cell is polled while the worker runs
const PROGRESS_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input recording file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output directory for part files
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Frame marker as hex text, e.g. "55 AA BB CC"
    #[arg(short, long, value_name = "HEX", default_value = "55 AA")]
    pub marker: String,

    /// Maximum part size in GB
    #[arg(short = 's', long, value_name = "GB", default_value_t = 1.0)]
    pub max_size_gb: f64,

    /// Backward search margin, in marker lengths
    #[arg(long, value_name = "N", default_value_t = framesplit_core::config::DEFAULT_BACKWARD_MARGIN)]
    pub backward_margin: usize,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        // Configuration errors surface before any file I/O begins
        let marker = Marker::from_hex(&self.marker)?;
        let config = SplitConfig::builder(marker)
            .max_size_gb(self.max_size_gb)
            .backward_margin(self.backward_margin)
            .build()?;

        if !self.input.is_file() {
            return Err(CliError::MissingInput(self.input.display().to_string()).into());
        }

        log::info!(
            "using marker {} ({} bytes)",
            config.marker(),
            config.marker().len()
        );

        let report = self.run_split(Splitter::with_config(config))?;

        for warning in &report.oversize {
            eprintln!(
                "warning: part {} exceeds the size limit ({} > {} bytes)",
                warning.index, warning.len, warning.limit
            );
        }

        output::write_report(&report, self.format, &mut std::io::stdout())?;
        Ok(())
    }

    /// Run the splitter on its worker thread, rendering progress until
    /// the worker finishes
    fn run_split(&self, splitter: Splitter) -> Result<framesplit_core::SplitReport> {
        let handle = splitter.spawn(self.input.clone(), self.output.clone());

        let mut renderer = ProgressRenderer::new(self.quiet);
        renderer.init();
        while !handle.is_finished() {
            renderer.update(handle.progress().get());
            std::thread::sleep(PROGRESS_POLL_INTERVAL);
        }

        match handle.join() {
            Ok(report) => {
                renderer.finish();
                Ok(report)
            }
            Err(err) => {
                renderer.abandon();
                Err(err).context("split failed")
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
