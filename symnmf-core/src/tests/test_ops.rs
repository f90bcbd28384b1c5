// symnmf-core/src/tests/test_ops.rs

use crate::error::SymNmfError;
use crate::matrix::Matrix;
use crate::ops::*;

use approx::assert_relative_eq;

fn sample() -> Matrix {
    Matrix::from_rows(&[vec![1.0, -2.0, 3.0], vec![0.5, 4.0, -1.0]]).unwrap()
}

#[test]
fn test_multiply_known_product() {
    crate::init();
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![5.0, 6.0, 7.0], vec![8.0, 9.0, 10.0]]).unwrap();

    let c = multiply(&a, &b).unwrap();

    assert_eq!(c.shape(), (2, 3));
    assert_eq!(c.row(0), &[21.0, 24.0, 27.0]);
    assert_eq!(c.row(1), &[47.0, 54.0, 61.0]);
}

#[test]
fn test_multiply_identity_is_noop() {
    crate::init();
    let m = sample();
    let id = Matrix::identity(2).unwrap();

    let left = multiply(&id, &m).unwrap();
    assert_eq!(left, m, "I · M should equal M");

    let id3 = Matrix::identity(3).unwrap();
    let right = multiply(&m, &id3).unwrap();
    assert_eq!(right, m, "M · I should equal M");
}

#[test]
fn test_multiply_dimension_mismatch() {
    crate::init();
    let m = sample();
    let err = multiply(&m, &m).unwrap_err();
    assert_eq!(
        err,
        SymNmfError::DimensionMismatch {
            op: "multiply",
            left: (2, 3),
            right: (2, 3)
        }
    );
}

#[test]
fn test_multiply_matches_naive_loop() {
    crate::init();
    let n = 17;
    let a = Matrix::from_vec(n, n, (0..n * n).map(|x| (x as f64 * 0.37).sin()).collect()).unwrap();
    let b = Matrix::from_vec(n, 5, (0..n * 5).map(|x| (x as f64 * 0.11).cos()).collect()).unwrap();

    let c = multiply(&a, &b).unwrap();

    for i in 0..n {
        for j in 0..5 {
            let mut expected = 0.0;
            for k in 0..n {
                expected += a.get(i, k) * b.get(k, j);
            }
            assert_eq!(c.get(i, j), expected, "cell ({}, {})", i, j);
        }
    }
}

#[test]
fn test_transpose_shape_and_values() {
    crate::init();
    let m = sample();
    let t = transpose(&m).unwrap();

    assert_eq!(t.shape(), (3, 2));
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(t.get(j, i), m.get(i, j));
        }
    }
}

#[test]
fn test_transpose_round_trip() {
    crate::init();
    let m = sample();
    assert_eq!(transpose(&transpose(&m).unwrap()).unwrap(), m);
}

#[test]
fn test_subtract() {
    crate::init();
    let m = sample();
    let zero = subtract(&m, &m).unwrap();
    assert!(zero.as_slice().iter().all(|&v| v == 0.0));

    let id = Matrix::identity(2).unwrap();
    assert!(subtract(&m, &id).is_err());
}

#[test]
fn test_frobenius_norm_values() {
    crate::init();
    let m = Matrix::from_rows(&[vec![3.0, 0.0], vec![0.0, 4.0]]).unwrap();
    assert_relative_eq!(frobenius_norm(&m), 5.0);

    let zero = Matrix::zeros(4, 3).unwrap();
    assert_eq!(frobenius_norm(&zero), 0.0);

    let mut single = Matrix::zeros(4, 3).unwrap();
    single.set(3, 2, -1e-3);
    assert!(
        frobenius_norm(&single) > 0.0,
        "Any non-zero entry must give a positive norm"
    );
}
