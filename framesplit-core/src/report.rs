//! Split run reporting

use serde::{Deserialize, Serialize};

/// One written part file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartInfo {
    /// 1-based part index
    pub index: usize,
    /// File name inside the output directory, e.g. `part_1.dat`
    pub file_name: String,
    /// Inclusive start offset in the source file
    pub start: u64,
    /// Exclusive end offset in the source file
    pub end: u64,
    /// Part length in bytes
    pub len: u64,
}

/// A part that exceeded the configured size limit
///
/// Non-fatal: the part is still written. Only the final segment can
/// legitimately run past the limit, since it simply extends to the end
/// of the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OversizeWarning {
    /// 1-based part index
    pub index: usize,
    /// Actual part length in bytes
    pub len: u64,
    /// The configured limit it exceeded
    pub limit: u64,
}

/// Summary of a completed split run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    /// Written parts, in index order
    pub parts: Vec<PartInfo>,
    /// Parts that exceeded the size limit
    pub oversize: Vec<OversizeWarning>,
    /// Total bytes copied across all parts
    pub total_bytes: u64,
}

impl SplitReport {
    /// Number of parts written
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}
