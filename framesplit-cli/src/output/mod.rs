//! Split report output formatting

use std::io::Write;

use anyhow::Result;
use framesplit_core::SplitReport;

pub mod json;
pub mod text;

/// Report output format
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON report with per-part offsets
    Json,
}

/// Write `report` to `writer` in the selected format
pub fn write_report<W: Write>(
    report: &SplitReport,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => text::write(report, writer),
        OutputFormat::Json => json::write(report, writer),
    }
}
