use crate::consts::PIXEL_MAX;
use crate::error::Result;
use crate::frame::Frame;

/// Similarity from normalized mean absolute pixel difference:
/// `1.0 - mean(|a - b|) / 255`. Returns 1.0 for identical frames and
/// 0.0 for maximally divergent ones, matching the SSIM polarity.
pub fn pixel_diff(a: &Frame, b: &Frame) -> Result<f64> {
    a.check_same_shape(b)?;

    let mut sum = 0.0f64;
    for (&x, &y) in a.data.iter().zip(b.data.iter()) {
        sum += (x - y).abs() as f64;
    }
    let mean = sum / a.data.len() as f64;

    Ok(1.0 - mean / PIXEL_MAX as f64)
}
