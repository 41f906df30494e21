use std::fs;

use simatrix_core::error::SimatrixError;
use simatrix_core::io::matrix_io::{read_matrix, write_matrix};
use simatrix_core::matrix::SimilarityMatrix;

fn sample_matrix() -> SimilarityMatrix {
    let mut m = SimilarityMatrix::identity(3);
    m.set_pair(0, 1, 0.875);
    m.set_pair(0, 2, 0.12345678901234567);
    m.set_pair(1, 2, -0.25);
    m
}

#[test]
fn test_write_read_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix.csv");

    let matrix = sample_matrix();
    write_matrix(&matrix, &path).unwrap();
    let loaded = read_matrix(&path).unwrap();

    assert_eq!(matrix, loaded);
}

#[test]
fn test_grid_format_has_trailing_commas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix.csv");

    write_matrix(&SimilarityMatrix::identity(2), &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert_eq!(text, "1,0,\n0,1,\n");
}

#[test]
fn test_ragged_grid_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "1,0,\n0,\n").unwrap();

    let err = read_matrix(&path).unwrap_err();
    assert!(matches!(err, SimatrixError::MalformedMatrix(_)));
}

#[test]
fn test_unparsable_value_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "1,zero,\nzero,1,\n").unwrap();

    let err = read_matrix(&path).unwrap_err();
    assert!(matches!(err, SimatrixError::MalformedMatrix(_)));
}
