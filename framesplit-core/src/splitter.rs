//! Split session orchestration
//!
//! Ties the planner and copier together behind one entry point, either
//! on the calling thread or on a dedicated worker so a long-running
//! split does not block its observer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crate::config::SplitConfig;
use crate::copier;
use crate::error::{Result, SplitError};
use crate::marker::Marker;
use crate::plan;
use crate::progress::{CancelToken, ProgressCell};
use crate::report::SplitReport;

/// Splits one recording file into marker-aligned parts
#[derive(Debug, Clone)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Create a splitter with the given configuration
    pub fn with_config(config: SplitConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Plan and copy on the calling thread
    pub fn split(&self, input: &Path, output_dir: &Path) -> Result<SplitReport> {
        self.run(input, output_dir, &ProgressCell::new(), &CancelToken::new())
    }

    /// Run the split on a dedicated worker thread
    ///
    /// The returned handle owns the progress cell, a cancel token, and
    /// the final result, delivered as a plain value from
    /// [`SplitHandle::join`]. Exactly one split is in flight per handle;
    /// segments are planned and copied strictly in increasing offset
    /// order, so progress observed through the cell never decreases
    /// while the run is healthy.
    pub fn spawn(&self, input: PathBuf, output_dir: PathBuf) -> SplitHandle {
        let splitter = self.clone();
        let progress = ProgressCell::new();
        let cancel = CancelToken::new();
        let worker_progress = progress.clone();
        let worker_cancel = cancel.clone();
        let thread = thread::spawn(move || {
            splitter.run(&input, &output_dir, &worker_progress, &worker_cancel)
        });
        SplitHandle {
            progress,
            cancel,
            thread,
        }
    }

    fn run(
        &self,
        input: &Path,
        output_dir: &Path,
        progress: &ProgressCell,
        cancel: &CancelToken,
    ) -> Result<SplitReport> {
        let outcome = self.run_inner(input, output_dir, progress, cancel);
        if let Err(err) = &outcome {
            log::info!("split of {} failed: {err}", input.display());
            progress.reset();
        }
        outcome
    }

    fn run_inner(
        &self,
        input: &Path,
        output_dir: &Path,
        progress: &ProgressCell,
        cancel: &CancelToken,
    ) -> Result<SplitReport> {
        if !input.is_file() {
            return Err(SplitError::MissingInput {
                path: input.to_path_buf(),
            });
        }

        let mut file = File::open(input)?;
        let file_size = file.metadata()?.len();
        log::info!("splitting {} ({file_size} bytes)", input.display());

        let plan = plan::plan(&mut file, file_size, &self.config, progress, cancel)?;
        log::debug!("plan has {} part(s)", plan.part_count());

        copier::copy_segments(&mut file, &plan, output_dir, &self.config, progress, cancel)
    }
}

/// Handle to a split running on its worker thread
pub struct SplitHandle {
    progress: ProgressCell,
    cancel: CancelToken,
    thread: JoinHandle<Result<SplitReport>>,
}

impl SplitHandle {
    /// The run's progress cell
    pub fn progress(&self) -> &ProgressCell {
        &self.progress
    }

    /// Token to request cooperative cancellation
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Whether the worker has finished
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the worker and return its result
    pub fn join(self) -> Result<SplitReport> {
        match self.thread.join() {
            Ok(outcome) => outcome,
            Err(_) => Err(SplitError::Io(std::io::Error::other(
                "split worker panicked",
            ))),
        }
    }
}

/// Split `input` into parts of at most `max_size_gb` GB in `output_dir`
///
/// Convenience wrapper over [`Splitter`] with default margins.
pub fn split_file(
    input: &Path,
    output_dir: &Path,
    marker: Marker,
    max_size_gb: f64,
) -> Result<SplitReport> {
    let config = SplitConfig::builder(marker).max_size_gb(max_size_gb).build()?;
    Splitter::with_config(config).split(input, output_dir)
}
