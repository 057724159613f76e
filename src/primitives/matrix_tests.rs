use super::*;

#[test]
fn test_from_vec_valid() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 2);
}

#[test]
fn test_from_vec_wrong_length() {
    let result = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_get() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.get(1, 2), 6.0);
    assert_eq!(m.get(0, 0), 1.0);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let row = m.row(1);
    assert_eq!(row.as_slice(), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_row_slice_borrows() {
    let m = Matrix::from_vec(3, 2, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(m.row_slice(0), &[0.0, 1.0]);
    assert_eq!(m.row_slice(2), &[4.0, 5.0]);
}

#[test]
#[should_panic]
fn test_row_slice_out_of_bounds() {
    let m = Matrix::from_vec(1, 2, vec![0.0, 1.0]).unwrap();
    let _ = m.row_slice(1);
}

#[test]
fn test_as_slice() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_serde_round_trip() {
    let m = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0, 4.0]).unwrap();
    let json = serde_json::to_string(&m).expect("serialize");
    let back: Matrix<f32> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(m, back);
}
