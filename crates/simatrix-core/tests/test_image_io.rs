use std::fs;
use std::path::Path;

use image::{GrayImage, Luma};

use simatrix_core::error::SimatrixError;
use simatrix_core::io::image_io::{load_directory, load_image, scan_directory};

fn write_png(path: &Path, w: u32, h: u32, value: u8) {
    let mut img = GrayImage::new(w, h);
    for p in img.pixels_mut() {
        *p = Luma([value]);
    }
    img.save(path).unwrap();
}

#[test]
fn test_load_image_keeps_8bit_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    write_png(&path, 4, 3, 128);

    let frame = load_image(&path).unwrap();
    assert_eq!(frame.width(), 4);
    assert_eq!(frame.height(), 3);
    assert_eq!(frame.data[[0, 0]], 128.0);
    assert_eq!(frame.metadata.source.as_deref(), Some(path.as_path()));
}

#[test]
fn test_scan_directory_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("b.png"), 2, 2, 10);
    write_png(&dir.path().join("a.png"), 2, 2, 20);
    write_png(&dir.path().join("c.JPG"), 2, 2, 30);
    fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

    let paths = scan_directory(dir.path()).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a.png", "b.png", "c.JPG"]);
}

#[test]
fn test_scan_empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "nothing here").unwrap();

    let err = scan_directory(dir.path()).unwrap_err();
    assert!(matches!(err, SimatrixError::NoImagesFound(_)));
}

#[test]
fn test_load_directory_skips_undecodable_files() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("a.png"), 4, 4, 50);
    fs::write(dir.path().join("b.png"), b"garbage bytes").unwrap();
    write_png(&dir.path().join("c.png"), 4, 4, 200);

    let frames = load_directory(dir.path()).unwrap();
    assert_eq!(frames.len(), 2);
    // Indices are reassigned over the surviving subset.
    assert_eq!(frames[0].metadata.frame_index, 0);
    assert_eq!(frames[1].metadata.frame_index, 1);
    assert_eq!(frames[0].data[[0, 0]], 50.0);
    assert_eq!(frames[1].data[[0, 0]], 200.0);
}

#[test]
fn test_all_loads_failed_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.png"), b"not a png").unwrap();
    fs::write(dir.path().join("b.jpg"), b"not a jpg").unwrap();

    let err = load_directory(dir.path()).unwrap_err();
    assert!(matches!(err, SimatrixError::AllLoadsFailed(_)));
}
