use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::Array2;

use crate::error::{Result, SimatrixError};
use crate::matrix::SimilarityMatrix;

/// Write the matrix as a text grid: one row per line, comma-separated
/// decimal values with a trailing comma after the last value.
pub fn write_matrix(matrix: &SimilarityMatrix, path: &Path) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut out = BufWriter::new(file);

    for row in matrix.as_array().rows() {
        for value in row {
            write!(out, "{},", value)?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

/// Parse a matrix written by [`write_matrix`] back into memory.
///
/// Tolerates the trailing empty field left by the terminal comma;
/// ragged or non-square grids are `MalformedMatrix` errors.
pub fn read_matrix(path: &Path) -> Result<SimilarityMatrix> {
    let text = fs::read_to_string(path)?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<f64> = line
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    SimatrixError::MalformedMatrix(format!(
                        "line {}: bad value {:?}",
                        line_no + 1,
                        field
                    ))
                })
            })
            .collect::<Result<_>>()?;
        rows.push(row);
    }

    let n = rows.len();
    if rows.iter().any(|row| row.len() != n) {
        return Err(SimatrixError::MalformedMatrix(format!(
            "expected a square {n}x{n} grid"
        )));
    }

    let mut scores = Array2::<f64>::zeros((n, n));
    for (i, row) in rows.into_iter().enumerate() {
        for (j, value) in row.into_iter().enumerate() {
            scores[[i, j]] = value;
        }
    }
    Ok(SimilarityMatrix::from_array(scores))
}
