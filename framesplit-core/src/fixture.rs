//! Synthetic recording generator
//!
//! Writes files made of fixed-size frames: the 4-byte marker
//! `55 AA BB CC` followed by [`COUNTERS_PER_FRAME`] little-endian `u32`
//! counters, with one counter sequence incrementing continuously across
//! the whole file. This is the de facto schema the splitter's default
//! test scenarios are built against; it exists only to produce inputs
//! for the splitter.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::marker::Marker;

/// Marker bytes used by generated recordings
pub const FIXTURE_MARKER: [u8; 4] = [0x55, 0xAA, 0xBB, 0xCC];

/// Little-endian `u32` counters per frame
pub const COUNTERS_PER_FRAME: usize = 33;

/// Total frame length in bytes
pub const FRAME_LEN: usize = FIXTURE_MARKER.len() + COUNTERS_PER_FRAME * 4;

/// The fixture marker as a [`Marker`]
pub fn fixture_marker() -> Marker {
    Marker::new(FIXTURE_MARKER.to_vec()).expect("fixture marker is non-empty")
}

/// Write `frame_count` frames to `writer`
pub fn write_frames<W: Write>(writer: &mut W, frame_count: u64) -> io::Result<()> {
    let mut counter: u32 = 0;
    for _ in 0..frame_count {
        writer.write_all(&FIXTURE_MARKER)?;
        for _ in 0..COUNTERS_PER_FRAME {
            writer.write_all(&counter.to_le_bytes())?;
            counter = counter.wrapping_add(1);
        }
    }
    Ok(())
}

/// Generate a recording of `frame_count` frames at `path`
pub fn generate_file(path: &Path, frame_count: u64) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_frames(&mut writer, frame_count)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_have_fixed_length_and_marker() {
        let mut data = Vec::new();
        write_frames(&mut data, 5).unwrap();
        assert_eq!(data.len(), 5 * FRAME_LEN);
        for frame in data.chunks(FRAME_LEN) {
            assert_eq!(&frame[..4], &FIXTURE_MARKER);
        }
    }

    #[test]
    fn counter_increments_across_frames() {
        let mut data = Vec::new();
        write_frames(&mut data, 3).unwrap();

        let mut expected: u32 = 0;
        for frame in data.chunks(FRAME_LEN) {
            for counter in frame[4..].chunks(4) {
                let value = u32::from_le_bytes(counter.try_into().unwrap());
                assert_eq!(value, expected);
                expected += 1;
            }
        }
        assert_eq!(expected, 3 * COUNTERS_PER_FRAME as u32);
    }

    #[test]
    fn zero_frames_writes_nothing() {
        let mut data = Vec::new();
        write_frames(&mut data, 0).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn generates_file_on_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("frames.dat");
        generate_file(&path, 10).unwrap();
        assert_eq!(
            std::fs::metadata(&path).unwrap().len(),
            (10 * FRAME_LEN) as u64
        );
    }
}
