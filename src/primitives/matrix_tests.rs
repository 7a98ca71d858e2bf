pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_get_set() {
    let mut m = Matrix::zeros(2, 2);
    m.set(1, 0, 3.5);
    assert!((m.get(1, 0) - 3.5).abs() < 1e-6);
    assert!((m.get(0, 0) - 0.0).abs() < 1e-6);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1);
    assert_eq!(row.len(), 3);
    assert!((row[0] - 4.0).abs() < 1e-6);
    assert!((row[2] - 6.0).abs() < 1e-6);
}

#[test]
fn test_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let col = m.column(2);
    assert_eq!(col.len(), 2);
    assert!((col[0] - 3.0).abs() < 1e-6);
    assert!((col[1] - 6.0).abs() < 1e-6);
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((t.get(0, 1) - 4.0).abs() < 1e-6);
    assert!((t.get(2, 1) - 6.0).abs() < 1e-6);
}

#[test]
fn test_transpose_twice_is_identity() {
    let m = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0, 4.0]).expect("valid matrix");
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn test_matmul() {
    let a = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid matrix");
    let b = Matrix::from_vec(3, 2, vec![7.0_f32, 8.0, 9.0, 10.0, 11.0, 12.0]).expect("valid matrix");
    let c = a.matmul(&b).expect("inner dimensions match");
    assert_eq!(c.shape(), (2, 2));
    assert!((c.get(0, 0) - 58.0).abs() < 1e-6);
    assert!((c.get(0, 1) - 64.0).abs() < 1e-6);
    assert!((c.get(1, 0) - 139.0).abs() < 1e-6);
    assert!((c.get(1, 1) - 154.0).abs() < 1e-6);
}

#[test]
fn test_matmul_dimension_mismatch() {
    let a = Matrix::from_vec(2, 3, vec![0.0_f32; 6]).expect("valid matrix");
    let b = Matrix::from_vec(2, 2, vec![0.0_f32; 4]).expect("valid matrix");
    assert!(a.matmul(&b).is_err());
}

#[test]
fn test_matmul_with_transpose_gives_gram_matrix() {
    // P * P^T is symmetric
    let p = Matrix::from_vec(3, 2, vec![1.0_f32, 0.0, 0.5, 0.5, 0.0, 1.0]).expect("valid matrix");
    let gram = p.matmul(&p.transpose()).expect("dimensions match");
    assert_eq!(gram.shape(), (3, 3));
    for i in 0..3 {
        for j in 0..3 {
            assert!((gram.get(i, j) - gram.get(j, i)).abs() < 1e-6);
        }
    }
}
