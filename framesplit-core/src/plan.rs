//! Split-point planning: bounded-window marker search
//!
//! Walks the file from the start, repeatedly proposing a target offset
//! one part-size past the previous split point and searching a bounded
//! window around that target for the marker occurrence closest to, but
//! not past, the target. Reading one small window per step keeps the
//! search O(file size) amortized instead of rescanning the file.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use crate::config::SplitConfig;
use crate::error::{Result, SplitError};
use crate::marker::Marker;
use crate::progress::{CancelToken, ProgressCell};

/// One contiguous byte range of the source file, mapped to one part file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// 1-based part index
    pub index: usize,
    /// Inclusive start offset
    pub start: u64,
    /// Exclusive end offset
    pub end: u64,
}

impl Segment {
    /// Segment length in bytes
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the segment covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An ordered list of split offsets covering the whole source file
///
/// `offsets[0]` is 0, the last offset is the file size, and every
/// interior offset is the start of a marker occurrence in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPlan {
    offsets: Vec<u64>,
}

impl SplitPlan {
    /// Build a plan from raw offsets
    ///
    /// Offsets must start at 0 and be strictly increasing; fails with
    /// [`SplitError::InvalidPlan`] otherwise. Marker alignment of the
    /// interior offsets is the caller's responsibility.
    pub fn from_offsets(offsets: Vec<u64>) -> Result<Self> {
        if offsets.len() < 2 {
            return Err(SplitError::InvalidPlan {
                reason: "a plan needs at least a start and an end offset".to_string(),
            });
        }
        if offsets[0] != 0 {
            return Err(SplitError::InvalidPlan {
                reason: format!("first offset must be 0, got {}", offsets[0]),
            });
        }
        if let Some(pair) = offsets.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(SplitError::InvalidPlan {
                reason: format!("offsets not strictly increasing at {} >= {}", pair[0], pair[1]),
            });
        }
        Ok(Self { offsets })
    }

    pub(crate) fn new_unchecked(offsets: Vec<u64>) -> Self {
        Self { offsets }
    }

    /// The raw split offsets
    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    /// Number of segments the plan describes
    pub fn part_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Size of the file the plan covers
    pub fn file_size(&self) -> u64 {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// The segments between consecutive offsets, in increasing order
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.offsets.windows(2).enumerate().map(|(i, pair)| Segment {
            index: i + 1,
            start: pair[0],
            end: pair[1],
        })
    }
}

/// Compute split offsets for `file`
///
/// Each planning step reads one window of at most
/// `marker_len * (backward_margin + 2)` bytes and picks the last marker
/// occurrence at or before the step's target. Fails with
/// [`SplitError::MarkerNotFound`] when a step finds no occurrence, or
/// only one that would not advance past the previous split point; a
/// retry without widening the margin would fail identically, so the
/// whole operation aborts.
pub fn plan(
    file: &mut File,
    file_size: u64,
    config: &SplitConfig,
    progress: &ProgressCell,
    cancel: &CancelToken,
) -> Result<SplitPlan> {
    let marker = config.marker();
    let marker_len = marker.len() as u64;
    let max_part = config.max_part_size();
    let back_span = marker_len * config.backward_margin() as u64;

    let mut offsets = vec![0u64];
    let mut current: u64 = 0;
    let mut window = Vec::new();

    while current + max_part < file_size {
        if cancel.is_cancelled() {
            return Err(SplitError::Cancelled);
        }

        let target = current + max_part;
        let window_start = target.saturating_sub(back_span);
        let window_end = (target + marker_len * 2).min(file_size);
        read_window(file, window_start, window_end, &mut window)?;

        match last_occurrence_at_or_before(marker, &window, window_start, target) {
            Some(offset) if offset > current => {
                log::debug!("split point at {offset} (target {target})");
                offsets.push(offset);
                current = offset;
            }
            _ => return Err(SplitError::MarkerNotFound { near: target }),
        }

        progress.publish(percent_of(current, file_size));
    }

    offsets.push(file_size);
    Ok(SplitPlan::new_unchecked(offsets))
}

fn read_window(file: &mut File, start: u64, end: u64, buf: &mut Vec<u8>) -> Result<()> {
    buf.resize((end - start) as usize, 0);
    file.seek(SeekFrom::Start(start))?;
    file.read_exact(buf)?;
    Ok(())
}

/// Scan marker occurrences in increasing offset order, keeping the last
/// one at or before `target`; the first occurrence strictly past the
/// target ends the scan. This yields the closest-from-below occurrence,
/// not the closest in absolute distance.
fn last_occurrence_at_or_before(
    marker: &Marker,
    window: &[u8],
    window_start: u64,
    target: u64,
) -> Option<u64> {
    let mut best = None;
    let mut pos = 0usize;
    while let Some(hit) = marker.find_in(window, pos) {
        let global = window_start + hit as u64;
        if global > target {
            break;
        }
        best = Some(global);
        pos = hit + marker.len();
    }
    best
}

pub(crate) fn percent_of(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    ((done as f64 / total as f64) * 100.0).round() as u8
}
