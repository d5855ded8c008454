//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};

/// Renders split progress as a percentage bar
///
/// The bar is fed from the core's latest-value progress cell, so the
/// rendered position only ever moves forward.
pub struct ProgressRenderer {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressRenderer {
    /// Create a new progress renderer
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the percentage bar
    pub fn init(&mut self) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}% {msg}")
                .unwrap()
                .progress_chars("##-"),
        );

        self.progress_bar = Some(pb);
    }

    /// Move the bar to the latest observed percentage
    pub fn update(&self, percent: u8) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(u64::from(percent));
        }
    }

    /// Finish rendering after a successful run
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(100);
            pb.finish_with_message("Complete");
        }
    }

    /// Stop rendering after a failed run, leaving the bar where it was
    pub fn abandon(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.abandon();
        }
    }
}
