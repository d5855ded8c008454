//! Property tests for plan invariants

use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

use framesplit_core::plan::plan;
use framesplit_core::{CancelToken, Marker, ProgressCell, SplitConfig};

const MARKER: [u8; 2] = [0xFF, 0xFE];

/// Variable-length frames led by the test marker; payload bytes stay
/// below 0x80 so the marker never appears inside a frame
fn build_recording(payload_lens: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();
    for (frame, &len) in payload_lens.iter().enumerate() {
        data.extend_from_slice(&MARKER);
        for offset in 0..len as usize {
            data.push(((frame + offset) % 0x80) as u8);
        }
    }
    data
}

proptest! {
    /// Plans cover `[0, file_size)` with strictly increasing offsets,
    /// every interior offset on a marker, and no non-final segment over
    /// the limit
    #[test]
    fn plan_covers_and_aligns(
        payload_lens in prop::collection::vec(8u8..=48, 20..120),
        max_part in 100u64..500,
    ) {
        let data = build_recording(&payload_lens);
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&data).unwrap();

        let config = SplitConfig::builder(Marker::new(MARKER.to_vec()).unwrap())
            .max_part_size(max_part)
            .build()
            .unwrap();
        let mut file = tmp.reopen().unwrap();
        let plan = plan(
            &mut file,
            data.len() as u64,
            &config,
            &ProgressCell::new(),
            &CancelToken::new(),
        )
        .unwrap();

        let offsets = plan.offsets();
        prop_assert_eq!(offsets[0], 0);
        prop_assert_eq!(*offsets.last().unwrap(), data.len() as u64);
        prop_assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));

        for &offset in &offsets[1..offsets.len() - 1] {
            let at = offset as usize;
            prop_assert_eq!(&data[at..at + MARKER.len()], &MARKER[..]);
        }

        for segment in plan.segments() {
            if segment.end != data.len() as u64 {
                prop_assert!(segment.len() <= max_part);
            }
        }
    }

    /// Hex text written from arbitrary bytes parses back to the same
    /// marker regardless of case and spacing
    #[test]
    fn hex_marker_roundtrip(
        bytes in prop::collection::vec(any::<u8>(), 1..16),
        uppercase in any::<bool>(),
        spaced in any::<bool>(),
    ) {
        let sep = if spaced { " " } else { "" };
        let text: String = bytes
            .iter()
            .map(|byte| {
                if uppercase {
                    format!("{byte:02X}")
                } else {
                    format!("{byte:02x}")
                }
            })
            .collect::<Vec<_>>()
            .join(sep);

        let marker = Marker::from_hex(&text).unwrap();
        prop_assert_eq!(marker.as_bytes(), &bytes[..]);
    }
}
