//! Fixture generator tests
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use large_file_generator::{
    verify_zero_file, FixtureFile, GeneratorError, WriteStrategy, DEFAULT_FILE_SIZE,
};
use std::{fs, path::Path};
use tempfile::TempDir;

fn read_fixture(path: &Path) -> Vec<u8> {
    fs::read(path).expect("Failed to read generated fixture")
}

#[test]
fn default_size_is_all_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large_file.bin");

    let report = FixtureFile::new(&path, DEFAULT_FILE_SIZE)
        .generate(WriteStrategy::default())
        .unwrap();

    assert_eq!(report.bytes_written, 10_485_760);
    let content = read_fixture(&path);
    assert_eq!(content.len(), 10_485_760);
    assert!(content.iter().all(|b| *b == 0));
}

#[test]
fn single_buffer_matches_chunked() {
    let dir = TempDir::new().unwrap();
    let single = dir.path().join("single.bin");
    let chunked = dir.path().join("chunked.bin");

    FixtureFile::new(&single, 70_001)
        .generate(WriteStrategy::SingleBuffer)
        .unwrap();
    FixtureFile::new(&chunked, 70_001)
        .generate(WriteStrategy::Chunked(4096))
        .unwrap();

    assert_eq!(read_fixture(&single), read_fixture(&chunked));
}

#[test]
fn zero_size_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.bin");

    let report = FixtureFile::new(&path, 0)
        .generate(WriteStrategy::default())
        .unwrap();

    assert_eq!(report.bytes_written, 0);
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    assert!(report.to_string().ends_with("with size 0 bytes"));
}

#[test]
fn regenerating_truncates_previous_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.bin");
    fs::write(&path, vec![0xffu8; 8192]).unwrap();

    let fixture = FixtureFile::new(&path, 1000);
    fixture.generate(WriteStrategy::Chunked(256)).unwrap();
    let first = read_fixture(&path);
    fixture.generate(WriteStrategy::Chunked(256)).unwrap();
    let second = read_fixture(&path);

    assert_eq!(first, vec![0u8; 1000]);
    assert_eq!(first, second);
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("fixture.bin");

    let result = FixtureFile::new(&path, 16).generate(WriteStrategy::default());

    assert!(matches!(result, Err(GeneratorError::IOError(_))));
    assert!(!path.exists());
}

#[test]
fn invalid_chunk_size_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.bin");
    fs::write(&path, b"keep me").unwrap();

    let result = FixtureFile::new(&path, 16).generate(WriteStrategy::Chunked(0));

    assert!(matches!(result, Err(GeneratorError::InvalidChunkSize)));
    assert_eq!(read_fixture(&path), b"keep me");
}

#[test]
fn verify_accepts_generated_fixture() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.bin");

    FixtureFile::new(&path, 123_457)
        .generate(WriteStrategy::Chunked(1000))
        .unwrap();

    verify_zero_file(&path, 123_457).unwrap();
}

#[test]
fn verify_rejects_wrong_length() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.bin");
    fs::write(&path, vec![0u8; 10]).unwrap();

    match verify_zero_file(&path, 11) {
        Err(GeneratorError::SizeMismatch(expected, actual)) => {
            assert_eq!(expected, 11);
            assert_eq!(actual, 10);
        }
        other => panic!("Unexpected verification result: {:?}", other),
    }
}

#[test]
fn verify_reports_first_non_zero_offset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.bin");
    let mut content = vec![0u8; 20_000];
    content[12_345] = 1;
    content[19_000] = 7;
    fs::write(&path, &content).unwrap();

    match verify_zero_file(&path, 20_000) {
        Err(GeneratorError::NonZeroByte(offset)) => assert_eq!(offset, 12_345),
        other => panic!("Unexpected verification result: {:?}", other),
    }
}

#[test]
fn verify_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let result = verify_zero_file(dir.path().join("absent.bin"), 0);
    assert!(matches!(result, Err(GeneratorError::IOError(_))));
}
