use serial_test::serial;
use symnmf_core::{Matrix, SymNmfError};
use tempfile::TempDir;

use crate::storage::text::*;

#[test]
fn test_parse_dataset_basic() {
    crate::tests::init();
    let m = parse_dataset("0,0\n0,1\n5,5\n").unwrap();

    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.row(2), &[5.0, 5.0]);
}

#[test]
fn test_parse_dataset_tolerates_whitespace_and_trailing_blank_lines() {
    crate::tests::init();
    let m = parse_dataset(" 1.5 , -2e-1\r\n3,4\n\n\n").unwrap();

    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.row(0), &[1.5, -0.2]);
}

#[test]
fn test_parse_dataset_missing_token() {
    crate::tests::init();
    let err = parse_dataset("1.0,2.0\n3.0,\n5.0,6.0\n").unwrap_err();
    match err {
        SymNmfError::MalformedInput { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("missing"), "unexpected reason: {}", reason);
        }
        other => panic!("Expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_parse_dataset_short_row() {
    crate::tests::init();
    let err = parse_dataset("1.0,2.0\n3.0\n5.0,6.0\n").unwrap_err();
    assert!(matches!(err, SymNmfError::MalformedInput { line: 2, .. }));
}

#[test]
fn test_parse_dataset_non_numeric() {
    crate::tests::init();
    let err = parse_dataset("1.0,abc\n").unwrap_err();
    assert!(matches!(err, SymNmfError::MalformedInput { line: 1, .. }));
}

#[test]
fn test_parse_dataset_empty() {
    crate::tests::init();
    assert!(matches!(
        parse_dataset("\n\n").unwrap_err(),
        SymNmfError::MalformedInput { line: 0, .. }
    ));
}

#[test]
#[serial]
fn test_load_dataset_from_file() {
    crate::tests::init();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("load.txt");
    std::fs::write(&path, "0.5,1.5,2.5\n3.5,4.5,5.5\n").unwrap();

    let m = load_dataset(&path).unwrap();

    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.get(1, 2), 5.5);
}

#[test]
#[serial]
fn test_load_dataset_missing_file() {
    crate::tests::init();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");
    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, SymNmfError::Io(_)));
}

#[test]
fn test_format_matrix_four_decimals() {
    crate::tests::init();
    let m = Matrix::from_rows(&[vec![0.60653, 1.0], vec![-0.00004, 2.5]]).unwrap();

    assert_eq!(format_matrix(&m), "0.6065,1.0000\n-0.0000,2.5000\n");
}

#[test]
fn test_write_matrix() {
    crate::tests::init();
    let m = Matrix::identity(2).unwrap();
    let mut buf: Vec<u8> = Vec::new();

    write_matrix(&mut buf, &m).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), "1.0000,0.0000\n0.0000,1.0000\n");
}
