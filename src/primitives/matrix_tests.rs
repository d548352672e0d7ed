pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_set_get() {
    let mut m = Matrix::zeros(2, 2);
    m.set(1, 0, 7.5);
    assert!((m.get(1, 0) - 7.5).abs() < 1e-12);
    assert!((m.get(0, 1) - 0.0).abs() < 1e-12);
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((t.get(0, 1) - 4.0).abs() < 1e-12);
    assert!((t.get(2, 1) - 6.0).abs() < 1e-12);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1);
    assert_eq!(row.len(), 3);
    assert!((row[0] - 4.0).abs() < 1e-12);
    assert!((row[2] - 6.0).abs() < 1e-12);
}

#[test]
fn test_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let col = m.column(1);
    assert_eq!(col.len(), 2);
    assert!((col[0] - 2.0).abs() < 1e-12);
    assert!((col[1] - 5.0).abs() < 1e-12);
}

#[test]
fn test_matmul() {
    let a = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0]).expect("2x2 requires 4 elements");
    let b = Matrix::from_vec(2, 2, vec![5.0_f64, 6.0, 7.0, 8.0]).expect("2x2 requires 4 elements");
    let c = a.matmul(&b).expect("2x2 times 2x2 is defined");
    assert!((c.get(0, 0) - 19.0).abs() < 1e-12);
    assert!((c.get(0, 1) - 22.0).abs() < 1e-12);
    assert!((c.get(1, 0) - 43.0).abs() < 1e-12);
    assert!((c.get(1, 1) - 50.0).abs() < 1e-12);
}

#[test]
fn test_matmul_dimension_error() {
    let a = Matrix::from_vec(2, 3, vec![0.0_f64; 6]).expect("2x3 requires 6 elements");
    let b = Matrix::from_vec(2, 2, vec![0.0_f64; 4]).expect("2x2 requires 4 elements");
    assert!(a.matmul(&b).is_err());
}

#[test]
fn test_mul_scalar() {
    let m = Matrix::from_vec(1, 2, vec![2.0_f64, -3.0]).expect("1x2 requires 2 elements");
    let scaled = m.mul_scalar(0.5);
    assert!((scaled.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((scaled.get(0, 1) + 1.5).abs() < 1e-12);
}

#[test]
fn test_row_sums() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let sums = m.row_sums();
    assert_eq!(sums.len(), 2);
    assert!((sums[0] - 6.0).abs() < 1e-12);
    assert!((sums[1] - 15.0).abs() < 1e-12);
}

#[test]
fn test_column_sums() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let sums = m.column_sums();
    assert_eq!(sums.len(), 3);
    assert!((sums[0] - 5.0).abs() < 1e-12);
    assert!((sums[1] - 7.0).abs() < 1e-12);
    assert!((sums[2] - 9.0).abs() < 1e-12);
}

#[test]
fn test_total() {
    let m = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0]).expect("2x2 requires 4 elements");
    assert!((m.total() - 10.0).abs() < 1e-12);
}

#[test]
fn test_total_equals_row_and_column_sum_totals() {
    let m = Matrix::from_vec(3, 2, vec![1.0_f64, 0.5, 2.0, 0.0, 3.0, 1.5])
        .expect("3x2 requires 6 elements");
    assert!((m.total() - m.row_sums().sum()).abs() < 1e-12);
    assert!((m.total() - m.column_sums().sum()).abs() < 1e-12);
}
