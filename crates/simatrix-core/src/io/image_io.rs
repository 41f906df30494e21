use std::path::{Path, PathBuf};

use ndarray::Array2;
use tracing::warn;

use crate::consts::IMAGE_EXTENSIONS;
use crate::error::{Result, SimatrixError};
use crate::frame::{Frame, FrameMetadata};

/// Load an image file as a grayscale Frame with pixel values in [0, 255].
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<f32>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = gray.get_pixel(col as u32, row as u32);
            data[[row, col]] = pixel.0[0] as f32;
        }
    }

    let mut frame = Frame::new(data);
    frame.metadata.source = Some(path.to_path_buf());
    Ok(frame)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// List the image files in a directory, sorted by path.
///
/// The sorted order is what fixes each frame's row/column index in the
/// matrix, so downstream consumers can map indices back to files.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && has_image_extension(p))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(SimatrixError::NoImagesFound(dir.to_path_buf()));
    }
    Ok(paths)
}

/// Scan a directory and decode every image file in it.
///
/// Files that fail to decode are logged and skipped; the matrix is then
/// computed over the surviving subset, so a skip shifts the indices of
/// every later frame. Fails with `AllLoadsFailed` only when nothing
/// decodes.
pub fn load_directory(dir: &Path) -> Result<Vec<Frame>> {
    let paths = scan_directory(dir)?;

    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_image(path) {
            Ok(mut frame) => {
                frame.metadata = FrameMetadata {
                    frame_index: frames.len(),
                    source: Some(path.clone()),
                };
                frames.push(frame);
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable image");
            }
        }
    }

    if frames.is_empty() {
        return Err(SimatrixError::AllLoadsFailed(dir.to_path_buf()));
    }
    Ok(frames)
}
