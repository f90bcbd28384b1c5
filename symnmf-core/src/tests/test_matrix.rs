// symnmf-core/src/tests/test_matrix.rs

use crate::error::SymNmfError;
use crate::matrix::Matrix;

use smartcore::linalg::basic::arrays::Array;

#[test]
fn test_zeros_shape_and_contents() {
    crate::init();
    let m = Matrix::zeros(3, 4).unwrap();

    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.as_slice().len(), 12);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_zeros_overflow_is_allocation_failure() {
    crate::init();
    let err = Matrix::zeros(usize::MAX, 2).unwrap_err();
    assert_eq!(
        err,
        SymNmfError::AllocationFailure {
            rows: usize::MAX,
            cols: 2
        }
    );
}

#[test]
fn test_zeros_unreservable_is_allocation_failure() {
    crate::init();
    // element count fits in usize, byte count does not fit in isize
    let rows = usize::MAX / 8 + 1;
    let err = Matrix::zeros(rows, 1).unwrap_err();
    assert!(
        matches!(err, SymNmfError::AllocationFailure { .. }),
        "Expected AllocationFailure, got {:?}",
        err
    );
}

#[test]
fn test_identity() {
    crate::init();
    let id = Matrix::identity(3).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(id.get(i, j), if i == j { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn test_from_rows_row_major_layout() {
    crate::init();
    let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();

    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(m.get(0, 2), 3.0);
}

#[test]
fn test_from_rows_rejects_ragged_input() {
    crate::init();
    let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    match err {
        SymNmfError::MalformedInput { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_from_vec_length_checked() {
    crate::init();
    assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).is_ok());
    assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
}

#[test]
fn test_to_rows_keeps_empty_rows() {
    crate::init();
    let m = Matrix::zeros(3, 0).unwrap();
    assert_eq!(m.to_rows(), vec![Vec::<f64>::new(); 3]);
}

#[test]
fn test_clone_does_not_alias() {
    crate::init();
    let original = Matrix::identity(2).unwrap();
    let mut copy = original.clone();
    copy.set(0, 0, 42.0);

    assert_eq!(original.get(0, 0), 1.0);
    assert_eq!(copy.get(0, 0), 42.0);
}

#[test]
fn test_dense_matrix_conversion() {
    crate::init();
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();

    let dense = m.to_dense().unwrap();
    assert_eq!(dense.shape(), (3, 2));
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(*dense.get((i, j)), m.get(i, j), "cell ({}, {})", i, j);
        }
    }

    let back = Matrix::from_dense(&dense).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_dense_matrix_conversion_wide() {
    crate::init();
    // two point groups far apart along the first feature
    let m = Matrix::from_rows(&[
        vec![0.1, 1.0, 2.0],
        vec![0.2, 1.0, 2.0],
        vec![100.0, 1.0, 2.0],
        vec![100.1, 1.0, 2.0],
    ])
    .unwrap();

    let dense = m.to_dense().unwrap();
    assert_eq!(dense.shape(), (4, 3));
    assert_eq!(*dense.get((0, 1)), 1.0);
    assert_eq!(*dense.get((2, 0)), 100.0);
    assert_eq!(*dense.get((3, 2)), 2.0);

    assert_eq!(Matrix::from_dense(&dense).unwrap(), m);
}

#[test]
fn test_is_symmetric() {
    crate::init();
    let sym = Matrix::from_rows(&[vec![0.0, 0.3], vec![0.3, 0.0]]).unwrap();
    let asym = Matrix::from_rows(&[vec![0.0, 0.3], vec![0.2, 0.0]]).unwrap();
    let rect = Matrix::zeros(2, 3).unwrap();

    assert!(sym.is_symmetric(0.0));
    assert!(!asym.is_symmetric(1e-6));
    assert!(!rect.is_symmetric(1.0));
}
