mod test_matrix;
mod test_ops;

use crate::matrix::Matrix;

/// Three points: two close together, one far away.
pub(crate) fn three_points() -> Matrix {
    Matrix::from_rows(&[vec![0.0, 0.0], vec![0.0, 1.0], vec![5.0, 5.0]]).unwrap()
}

/// Two tight groups of points on a line, `per_group` points each.
pub(crate) fn two_groups(per_group: usize) -> Matrix {
    let mut rows = Vec::with_capacity(2 * per_group);
    for g in 0..2 {
        for p in 0..per_group {
            let offset = g as f64 * 1.5;
            rows.push(vec![offset + 0.05 * p as f64, 0.1 * (p % 3) as f64]);
        }
    }
    Matrix::from_rows(&rows).unwrap()
}
