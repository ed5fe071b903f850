//! Error types for isomesh operations.

use thiserror::Error;

/// Errors that can occur while building a grid or extracting a surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsoError {
    /// A grid axis has fewer than the 2 samples extraction requires.
    #[error("grid axis {axis} has {len} samples, need at least 2")]
    DimensionTooSmall {
        /// Axis index (0 = x, 1 = y, 2 = z).
        axis: usize,
        /// Sample count on that axis.
        len: usize,
    },

    /// The sample array does not match the grid dimensions.
    #[error("expected {expected} samples for the grid dimensions, got {got}")]
    SampleCountMismatch {
        /// Expected number of samples (nx * ny * nz).
        expected: usize,
        /// Number of samples provided.
        got: usize,
    },

    /// An attribute channel does not match the grid dimensions.
    #[error("attribute channel {channel} has {got} values, expected {expected}")]
    AttributeLengthMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Expected number of values (nx * ny * nz).
        expected: usize,
        /// Number of values provided.
        got: usize,
    },

    /// An up-front buffer reservation failed; no partial result is kept.
    #[error("failed to reserve memory for {what}")]
    Allocation {
        /// The buffer that could not be reserved.
        what: &'static str,
    },

    /// Extraction was cancelled at a layer boundary.
    #[error("extraction cancelled before layer {layer}")]
    Cancelled {
        /// Index of the first z-layer that was not processed.
        layer: usize,
    },
}

/// Result type alias for isomesh operations.
pub type Result<T> = std::result::Result<T, IsoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IsoError::DimensionTooSmall { axis: 1, len: 1 };
        assert_eq!(format!("{}", err), "grid axis 1 has 1 samples, need at least 2");

        let err = IsoError::AttributeLengthMismatch {
            channel: 2,
            expected: 64,
            got: 63,
        };
        assert!(format!("{}", err).contains("channel 2"));
        assert!(format!("{}", err).contains("64"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            IsoError::Allocation { what: "vertices" },
            IsoError::Allocation { what: "vertices" }
        );
        assert_ne!(
            IsoError::Cancelled { layer: 1 },
            IsoError::Cancelled { layer: 2 }
        );
    }
}
