//! Segment copying: streamed transfer of plan segments to part files
//!
//! Each segment is written under a temporary name and renamed on
//! completion, so a crashed or cancelled run never leaves a truncated
//! file under a final part name.

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::config::SplitConfig;
use crate::error::{Result, SplitError};
use crate::plan::{percent_of, Segment, SplitPlan};
use crate::progress::{CancelToken, ProgressCell};
use crate::report::{OversizeWarning, PartInfo, SplitReport};

fn part_file_name(index: usize) -> String {
    format!("part_{index}.dat")
}

/// Copy every plan segment into a numbered part file in `output_dir`
///
/// The output directory is created if absent. Transfers use a fixed-size
/// buffer of [`SplitConfig::copy_buffer_size`] bytes (clamped to the file
/// size), bounding peak memory regardless of segment length. Returns the
/// report of written parts; a segment longer than the size limit is
/// recorded as a warning, not an error.
pub fn copy_segments(
    file: &mut File,
    plan: &SplitPlan,
    output_dir: &Path,
    config: &SplitConfig,
    progress: &ProgressCell,
    cancel: &CancelToken,
) -> Result<SplitReport> {
    fs::create_dir_all(output_dir)?;

    let file_size = plan.file_size();
    let buf_len = (config.copy_buffer_size() as u64).min(file_size.max(1)) as usize;
    let mut buf = vec![0u8; buf_len];

    let mut parts = Vec::with_capacity(plan.part_count());
    let mut oversize = Vec::new();

    for segment in plan.segments() {
        if cancel.is_cancelled() {
            return Err(SplitError::Cancelled);
        }

        if segment.len() > config.max_part_size() {
            log::warn!(
                "part {} exceeds the size limit: {} > {} bytes",
                segment.index,
                segment.len(),
                config.max_part_size()
            );
            oversize.push(OversizeWarning {
                index: segment.index,
                len: segment.len(),
                limit: config.max_part_size(),
            });
        }

        let file_name = part_file_name(segment.index);
        let final_path = output_dir.join(&file_name);
        let tmp_path = output_dir.join(format!("{file_name}.tmp"));

        if let Err(err) = copy_one(file, &segment, &tmp_path, &mut buf, file_size, progress, cancel)
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }
        fs::rename(&tmp_path, &final_path)?;

        parts.push(PartInfo {
            index: segment.index,
            file_name,
            start: segment.start,
            end: segment.end,
            len: segment.len(),
        });
        progress.publish(percent_of(segment.end, file_size));
    }

    Ok(SplitReport {
        parts,
        oversize,
        total_bytes: file_size,
    })
}

fn copy_one(
    src: &mut File,
    segment: &Segment,
    dest_path: &Path,
    buf: &mut [u8],
    file_size: u64,
    progress: &ProgressCell,
    cancel: &CancelToken,
) -> Result<()> {
    src.seek(SeekFrom::Start(segment.start))?;
    let mut dest = File::create(dest_path)?;

    let mut remaining = segment.len();
    while remaining > 0 {
        if cancel.is_cancelled() {
            return Err(SplitError::Cancelled);
        }
        let chunk = remaining.min(buf.len() as u64) as usize;
        src.read_exact(&mut buf[..chunk])?;
        dest.write_all(&buf[..chunk])?;
        remaining -= chunk as u64;
        progress.publish(percent_of(segment.end - remaining, file_size));
    }
    dest.flush()?;
    Ok(())
}
