pub mod fill;

use ndarray::Array2;

/// Symmetric n x n table of pairwise similarity scores.
///
/// Invariants: the diagonal is exactly 1.0, and `get(i, j) == get(j, i)`
/// bit-identically, since each unordered pair is scored once and the
/// value mirrored into both cells.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityMatrix {
    scores: Array2<f64>,
}

impl SimilarityMatrix {
    /// n x n matrix with 1.0 on the diagonal and 0.0 elsewhere.
    pub fn identity(n: usize) -> Self {
        let mut scores = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            scores[[i, i]] = 1.0;
        }
        Self { scores }
    }

    /// Number of images the matrix covers (one row/column each).
    pub fn n_images(&self) -> usize {
        self.scores.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.scores[[i, j]]
    }

    /// Write the score for the unordered pair {i, j} into both cells.
    pub fn set_pair(&mut self, i: usize, j: usize, score: f64) {
        self.scores[[i, j]] = score;
        self.scores[[j, i]] = score;
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.scores
    }

    pub(crate) fn from_array(scores: Array2<f64>) -> Self {
        Self { scores }
    }
}
