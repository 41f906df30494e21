use ndarray::Array2;
use std::path::PathBuf;

use crate::error::{Result, SimatrixError};

/// A single grayscale image frame.
/// Pixel values are f32 in [0.0, 255.0] (promoted from 8-bit, not
/// normalized: the SSIM stabilizers are tuned for the 8-bit range).
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Optional per-frame metadata
    pub metadata: FrameMetadata,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self {
            data,
            metadata: FrameMetadata::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// (height, width)
    pub fn dims(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Check that `other` has the same shape, for pairwise comparison.
    /// Mismatched frames are a usage error, never cropped or resized.
    pub fn check_same_shape(&self, other: &Frame) -> Result<()> {
        if self.dims() != other.dims() {
            let (eh, ew) = self.dims();
            let (ah, aw) = other.dims();
            return Err(SimatrixError::ShapeMismatch {
                expected_height: eh,
                expected_width: ew,
                actual_height: ah,
                actual_width: aw,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameMetadata {
    /// Ordinal of the frame in the loaded sequence; this is its
    /// row/column index in the similarity matrix.
    pub frame_index: usize,
    /// Path the frame was decoded from, when it came from disk.
    pub source: Option<PathBuf>,
}
