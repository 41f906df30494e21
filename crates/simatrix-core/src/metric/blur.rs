use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Build a normalized Gaussian kernel of `2 * radius + 1` taps.
pub fn make_gaussian_kernel(radius: usize, sigma: f32) -> Vec<f32> {
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

/// Gaussian-smooth an array using separable 1D convolution with
/// clamp-at-edge borders.
pub fn gaussian_blur_array(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let row_pass = convolve_rows(data, kernel);
    convolve_cols(&row_pass, kernel)
}

fn convolve_row(data: &Array2<f32>, kernel: &[f32], row: usize, w: usize) -> Vec<f32> {
    let radius = kernel.len() / 2;
    (0..w)
        .map(|col| {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_col =
                    (col as isize + ki as isize - radius as isize).clamp(0, w as isize - 1) as usize;
                sum += data[[row, src_col]] * kv;
            }
            sum
        })
        .collect()
}

fn convolve_col(data: &Array2<f32>, kernel: &[f32], row: usize, h: usize, w: usize) -> Vec<f32> {
    let radius = kernel.len() / 2;
    (0..w)
        .map(|col| {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_row =
                    (row as isize + ki as isize - radius as isize).clamp(0, h as isize - 1) as usize;
                sum += data[[src_row, col]] * kv;
            }
            sum
        })
        .collect()
}

fn assemble(rows: Vec<Vec<f32>>, h: usize, w: usize) -> Array2<f32> {
    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(|row| convolve_row(data, kernel, row, w))
            .collect()
    } else {
        (0..h).map(|row| convolve_row(data, kernel, row, w)).collect()
    };

    assemble(rows, h, w)
}

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(|row| convolve_col(data, kernel, row, h, w))
            .collect()
    } else {
        (0..h)
            .map(|row| convolve_col(data, kernel, row, h, w))
            .collect()
    };

    assemble(rows, h, w)
}
