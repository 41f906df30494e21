use ndarray::Array2;

use crate::consts::{SSIM_C1, SSIM_C2, SSIM_SIGMA, SSIM_WINDOW_RADIUS};
use crate::error::Result;
use crate::frame::Frame;
use crate::metric::blur::{gaussian_blur_array, make_gaussian_kernel};

/// Mean structural similarity (Wang et al. 2004) between two
/// equally-shaped grayscale frames.
///
/// Local means, variances and the covariance are estimated with an
/// 11x11 Gaussian window (sigma 1.5); the per-pixel SSIM map
///
///   [(2*mu1*mu2 + C1)(2*sigma12 + C2)]
///   ----------------------------------------------
///   [(mu1^2 + mu2^2 + C1)(sigma1^2 + sigma2^2 + C2)]
///
/// is averaged over all pixels. Scores land in [-1, 1], practically
/// [0, 1] for natural images, with 1.0 for identical inputs. The
/// stabilizers C1/C2 assume pixel values in the 8-bit range.
pub fn ssim(a: &Frame, b: &Frame) -> Result<f64> {
    a.check_same_shape(b)?;
    Ok(ssim_arrays(&a.data, &b.data))
}

fn ssim_arrays(i1: &Array2<f32>, i2: &Array2<f32>) -> f64 {
    let kernel = make_gaussian_kernel(SSIM_WINDOW_RADIUS, SSIM_SIGMA);

    let i1_2 = i1 * i1;
    let i2_2 = i2 * i2;
    let i1_i2 = i1 * i2;

    let mu1 = gaussian_blur_array(i1, &kernel);
    let mu2 = gaussian_blur_array(i2, &kernel);

    let mu1_2 = &mu1 * &mu1;
    let mu2_2 = &mu2 * &mu2;
    let mu1_mu2 = &mu1 * &mu2;

    let sigma1_2 = gaussian_blur_array(&i1_2, &kernel) - &mu1_2;
    let sigma2_2 = gaussian_blur_array(&i2_2, &kernel) - &mu2_2;
    let sigma12 = gaussian_blur_array(&i1_i2, &kernel) - &mu1_mu2;

    let (h, w) = i1.dim();
    let mut sum = 0.0f64;
    for row in 0..h {
        for col in 0..w {
            let numerator = (2.0 * mu1_mu2[[row, col]] + SSIM_C1)
                * (2.0 * sigma12[[row, col]] + SSIM_C2);
            let denominator = (mu1_2[[row, col]] + mu2_2[[row, col]] + SSIM_C1)
                * (sigma1_2[[row, col]] + sigma2_2[[row, col]] + SSIM_C2);
            sum += (numerator / denominator) as f64;
        }
    }

    sum / (h * w) as f64
}
