use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimatrixError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Shape mismatch: expected {expected_height}x{expected_width}, got {actual_height}x{actual_width}")]
    ShapeMismatch {
        expected_height: usize,
        expected_width: usize,
        actual_height: usize,
        actual_width: usize,
    },

    #[error("Empty frame sequence")]
    EmptySequence,

    #[error("No image files found in {0}")]
    NoImagesFound(PathBuf),

    #[error("Could not load any image from {0}")]
    AllLoadsFailed(PathBuf),

    #[error("Malformed matrix file: {0}")]
    MalformedMatrix(String),
}

pub type Result<T> = std::result::Result<T, SimatrixError>;
