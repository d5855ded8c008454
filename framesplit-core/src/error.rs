//! Error types for split operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while configuring, planning, or executing a split
#[derive(Error, Debug)]
pub enum SplitError {
    /// No usable marker occurrence near a planned split target
    #[error("no frame marker found near offset {near}")]
    MarkerNotFound {
        /// Byte offset the failing search window was centered on
        near: u64,
    },

    /// Marker text could not be parsed into a byte sequence
    #[error("invalid marker format: {reason}")]
    InvalidMarkerFormat {
        /// Why parsing failed
        reason: String,
    },

    /// Part size limit is not a usable positive value
    #[error("invalid size limit: {reason}")]
    InvalidSizeLimit {
        /// Why the limit was rejected
        reason: String,
    },

    /// A supplied plan violates the plan invariants
    #[error("invalid split plan: {reason}")]
    InvalidPlan {
        /// Which invariant was violated
        reason: String,
    },

    /// Input file does not exist or is not a regular file
    #[error("input file not found: {}", path.display())]
    MissingInput {
        /// The path that was checked
        path: PathBuf,
    },

    /// Underlying I/O failure, surfaced verbatim
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The run was stopped through its [`CancelToken`](crate::CancelToken)
    #[error("split cancelled")]
    Cancelled,
}

/// Result type for core split operations
pub type Result<T> = std::result::Result<T, SplitError>;
