use crate::scan::{LineScanner, open_input};
use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::io::{self, Write};
use tempfile::tempdir;

#[test]
fn opens_plain_text_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "GET 0.1\nPOST 0.2\n").unwrap();

    // Act
    let reader = open_input(&path).unwrap();
    let lines: Vec<String> = LineScanner::new(reader, 1024).map(|r| r.unwrap()).collect();

    // Assert
    assert_eq!(lines, vec!["GET 0.1", "POST 0.2"]);
}

#[test]
fn decompresses_gz_by_extension() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log.GZ");
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    encoder.write_all(b"GET 0.1\nPOST 0.2\n").unwrap();
    encoder.finish().unwrap();

    // Act
    let reader = open_input(&path).unwrap();
    let lines: Vec<String> = LineScanner::new(reader, 1024).map(|r| r.unwrap()).collect();

    // Assert
    assert_eq!(lines, vec!["GET 0.1", "POST 0.2"]);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = open_input(&dir.path().join("nope.log")).err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
