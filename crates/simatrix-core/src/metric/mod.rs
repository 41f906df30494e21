pub mod blur;
pub mod pixel_diff;
pub mod ssim;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frame::Frame;

/// Pairwise similarity metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Windowed structural similarity (11x11 Gaussian, sigma 1.5).
    Ssim,
    /// Normalized mean absolute pixel difference, inverted so that
    /// 1.0 means identical.
    PixelDiff,
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Ssim
    }
}

/// Score a pair of frames with the specified metric.
///
/// Pure and deterministic; safe to call concurrently on disjoint pairs.
pub fn compare_with_metric(a: &Frame, b: &Frame, metric: Metric) -> Result<f64> {
    match metric {
        Metric::Ssim => ssim::ssim(a, b),
        Metric::PixelDiff => pixel_diff::pixel_diff(a, b),
    }
}
