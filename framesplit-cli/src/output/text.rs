//! Human-readable report output

use std::io::Write;

use anyhow::Result;
use framesplit_core::SplitReport;

/// Write a plain-text summary of the split
pub fn write<W: Write>(report: &SplitReport, writer: &mut W) -> Result<()> {
    writeln!(
        writer,
        "Wrote {} part(s), {} bytes total",
        report.part_count(),
        report.total_bytes
    )?;
    for part in &report.parts {
        writeln!(
            writer,
            "  {}: {} bytes [{}, {})",
            part.file_name, part.len, part.start, part.end
        )?;
    }
    Ok(())
}
