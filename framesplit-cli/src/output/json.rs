//! JSON report output

use std::io::Write;

use anyhow::Result;
use framesplit_core::SplitReport;

/// Write the split report as pretty-printed JSON
pub fn write<W: Write>(report: &SplitReport, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
