//! Split configuration

use crate::error::{Result, SplitError};
use crate::marker::Marker;

/// Default backward search margin, in marker lengths
///
/// Wide enough to absorb long runs of sparse marker occurrences; tune
/// per recording via [`SplitConfigBuilder::backward_margin`].
pub const DEFAULT_BACKWARD_MARGIN: usize = 100;

/// Default transfer buffer size for segment copying (100 MiB)
pub const DEFAULT_COPY_BUFFER_SIZE: usize = 100 * 1024 * 1024;

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// Configuration for one split run
///
/// Built through [`SplitConfig::builder`], which validates the size limit
/// before any file I/O happens.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    marker: Marker,
    max_part_size: u64,
    backward_margin: usize,
    copy_buffer_size: usize,
}

impl SplitConfig {
    /// Start building a configuration around `marker`
    ///
    /// Defaults: 1 GB part limit, backward margin of
    /// [`DEFAULT_BACKWARD_MARGIN`] marker lengths, 100 MiB copy buffer.
    pub fn builder(marker: Marker) -> SplitConfigBuilder {
        SplitConfigBuilder {
            marker,
            max_part_size: MaxSize::Bytes(1 << 30),
            backward_margin: DEFAULT_BACKWARD_MARGIN,
            copy_buffer_size: DEFAULT_COPY_BUFFER_SIZE,
        }
    }

    /// The frame marker split points must land on
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Maximum part size in bytes
    pub fn max_part_size(&self) -> u64 {
        self.max_part_size
    }

    /// Backward search margin, in marker lengths
    pub fn backward_margin(&self) -> usize {
        self.backward_margin
    }

    /// Transfer buffer size for segment copying, in bytes
    pub fn copy_buffer_size(&self) -> usize {
        self.copy_buffer_size
    }
}

#[derive(Debug, Clone, Copy)]
enum MaxSize {
    Bytes(u64),
    Gb(f64),
}

/// Builder for [`SplitConfig`]
#[derive(Debug)]
pub struct SplitConfigBuilder {
    marker: Marker,
    max_part_size: MaxSize,
    backward_margin: usize,
    copy_buffer_size: usize,
}

impl SplitConfigBuilder {
    /// Maximum part size in bytes
    pub fn max_part_size(mut self, bytes: u64) -> Self {
        self.max_part_size = MaxSize::Bytes(bytes);
        self
    }

    /// Maximum part size in GB, converted as `gb * 1024^3` bytes
    pub fn max_size_gb(mut self, gb: f64) -> Self {
        self.max_part_size = MaxSize::Gb(gb);
        self
    }

    /// Backward search margin, in marker lengths
    pub fn backward_margin(mut self, margin: usize) -> Self {
        self.backward_margin = margin;
        self
    }

    /// Transfer buffer size for segment copying, in bytes
    pub fn copy_buffer_size(mut self, bytes: usize) -> Self {
        self.copy_buffer_size = bytes;
        self
    }

    /// Validate and build the configuration
    ///
    /// The size limit must be positive and strictly greater than the
    /// marker length, otherwise no planning step can make progress.
    pub fn build(self) -> Result<SplitConfig> {
        let max_part_size = match self.max_part_size {
            MaxSize::Bytes(bytes) => bytes,
            MaxSize::Gb(gb) => {
                if !gb.is_finite() || gb <= 0.0 {
                    return Err(SplitError::InvalidSizeLimit {
                        reason: format!("size must be a positive number of GB, got {gb}"),
                    });
                }
                (gb * BYTES_PER_GB) as u64
            }
        };

        if max_part_size <= self.marker.len() as u64 {
            return Err(SplitError::InvalidSizeLimit {
                reason: format!(
                    "size limit of {max_part_size} bytes does not exceed the {}-byte marker",
                    self.marker.len()
                ),
            });
        }
        if self.copy_buffer_size == 0 {
            return Err(SplitError::InvalidSizeLimit {
                reason: "copy buffer size must be greater than zero".to_string(),
            });
        }

        Ok(SplitConfig {
            marker: self.marker,
            max_part_size,
            backward_margin: self.backward_margin,
            copy_buffer_size: self.copy_buffer_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> Marker {
        Marker::new(vec![0x55, 0xAA]).unwrap()
    }

    #[test]
    fn defaults_to_one_gb_limit() {
        let config = SplitConfig::builder(marker()).build().unwrap();
        assert_eq!(config.max_part_size(), 1 << 30);
        assert_eq!(config.backward_margin(), DEFAULT_BACKWARD_MARGIN);
        assert_eq!(config.copy_buffer_size(), DEFAULT_COPY_BUFFER_SIZE);
    }

    #[test]
    fn converts_fractional_gb_to_bytes() {
        let config = SplitConfig::builder(marker())
            .max_size_gb(0.001)
            .build()
            .unwrap();
        // 0.001 * 1024^3, truncated
        assert_eq!(config.max_part_size(), 1_073_741);
    }

    #[test]
    fn rejects_zero_gb() {
        let err = SplitConfig::builder(marker()).max_size_gb(0.0).build();
        assert!(matches!(
            err,
            Err(SplitError::InvalidSizeLimit { .. })
        ));
    }

    #[test]
    fn rejects_negative_gb() {
        assert!(SplitConfig::builder(marker()).max_size_gb(-1.0).build().is_err());
    }

    #[test]
    fn rejects_non_finite_gb() {
        assert!(SplitConfig::builder(marker())
            .max_size_gb(f64::NAN)
            .build()
            .is_err());
        assert!(SplitConfig::builder(marker())
            .max_size_gb(f64::INFINITY)
            .build()
            .is_err());
    }

    #[test]
    fn rejects_limit_not_exceeding_marker() {
        let err = SplitConfig::builder(marker()).max_part_size(2).build();
        assert!(err.is_err());

        let config = SplitConfig::builder(marker()).max_part_size(3).build();
        assert!(config.is_ok());
    }

    #[test]
    fn rejects_zero_copy_buffer() {
        assert!(SplitConfig::builder(marker())
            .copy_buffer_size(0)
            .build()
            .is_err());
    }
}
