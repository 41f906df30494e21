use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::debug;

use crate::error::{Result, SimatrixError};
use crate::frame::Frame;
use crate::matrix::SimilarityMatrix;
use crate::metric::{compare_with_metric, Metric};

/// Number of unordered pairs {i, j}, i < j, over `n` frames.
pub fn pair_count(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    n * (n - 1) / 2
}

fn upper_triangle_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect()
}

/// Fill the full similarity matrix for an ordered frame sequence.
///
/// The diagonal is set to 1.0 directly, without invoking the metric.
/// Each off-diagonal pair {i, j} is scored once on the Rayon pool and
/// mirrored into both cells, so workers never share output cells and
/// no locking is needed. The result is deterministic regardless of
/// thread count.
///
/// An empty sequence is an `EmptySequence` error. A shape mismatch on
/// any pair aborts the whole fill.
pub fn compute_matrix(frames: &[Frame], metric: Metric) -> Result<SimilarityMatrix> {
    compute_matrix_inner(frames, metric, None)
}

/// Fill the matrix with per-pair progress reporting.
///
/// Calls `on_progress(pairs_done)` as each pair is scored.
pub fn compute_matrix_with_progress(
    frames: &[Frame],
    metric: Metric,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Result<SimilarityMatrix> {
    compute_matrix_inner(frames, metric, Some(&on_progress))
}

fn compute_matrix_inner(
    frames: &[Frame],
    metric: Metric,
    on_progress: Option<&(dyn Fn(usize) + Send + Sync)>,
) -> Result<SimilarityMatrix> {
    if frames.is_empty() {
        return Err(SimatrixError::EmptySequence);
    }

    let n = frames.len();
    debug!(n, pairs = pair_count(n), ?metric, "filling similarity matrix");

    let done = AtomicUsize::new(0);
    let scored: Vec<(usize, usize, f64)> = upper_triangle_pairs(n)
        .par_iter()
        .map(|&(i, j)| {
            let score = compare_with_metric(&frames[i], &frames[j], metric)?;
            if let Some(report) = on_progress {
                report(done.fetch_add(1, Ordering::Relaxed) + 1);
            }
            Ok((i, j, score))
        })
        .collect::<Result<_>>()?;

    let mut matrix = SimilarityMatrix::identity(n);
    for (i, j, score) in scored {
        matrix.set_pair(i, j, score);
    }
    Ok(matrix)
}
