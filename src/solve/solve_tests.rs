pub(crate) use super::*;

fn augmented(rows: &[Vec<f64>]) -> Matrix {
    Matrix::from_rows(rows).expect("test rows are rectangular")
}

#[test]
fn test_solve_2x2() {
    // 2x + 3y = 8, 4x + 5y = 14 => x = 1, y = 2
    let system = augmented(&[vec![2.0, 3.0, 8.0], vec![4.0, 5.0, 14.0]]);
    let reduced = GaussianElimination::new()
        .solve(&system)
        .expect("system is regular");

    // left block reduced to the identity
    assert!((reduced.get(0, 0) - 1.0).abs() < 1e-9);
    assert!((reduced.get(1, 0) - 0.0).abs() < 1e-9);
    assert!((reduced.get(0, 1) - 0.0).abs() < 1e-9);
    assert!((reduced.get(1, 1) - 1.0).abs() < 1e-9);
    // last column holds the solution
    assert!((reduced.get(2, 0) - 1.0).abs() < 1e-9);
    assert!((reduced.get(2, 1) - 2.0).abs() < 1e-9);
}

#[test]
fn test_solution_vector() {
    let system = augmented(&[vec![2.0, 3.0, 8.0], vec![4.0, 5.0, 14.0]]);
    let x = GaussianElimination::new()
        .solution(&system)
        .expect("system is regular");
    assert_eq!(x.len(), 2);
    assert!((x[0] - 1.0).abs() < 1e-9);
    assert!((x[1] - 2.0).abs() < 1e-9);
}

#[test]
fn test_solve_3x3() {
    // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27 => x = 5, y = 3, z = -2
    let system = augmented(&[
        vec![1.0, 1.0, 1.0, 6.0],
        vec![0.0, 2.0, 5.0, -4.0],
        vec![2.0, 5.0, -1.0, 27.0],
    ]);
    let x = GaussianElimination::new()
        .solution(&system)
        .expect("system is regular");
    assert!((x[0] - 5.0).abs() < 1e-9);
    assert!((x[1] - 3.0).abs() < 1e-9);
    assert!((x[2] + 2.0).abs() < 1e-9);
}

#[test]
fn test_zero_leading_pivot_needs_swap() {
    // first pivot entry is zero; partial pivoting must swap before dividing
    let system = augmented(&[vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 3.0]]);
    let x = GaussianElimination::new()
        .solution(&system)
        .expect("system is regular after a row swap");
    assert!((x[0] - 3.0).abs() < 1e-9);
    assert!((x[1] - 2.0).abs() < 1e-9);
}

#[test]
fn test_singular_identical_rows() {
    let system = augmented(&[vec![1.0, 1.0, 2.0], vec![1.0, 1.0, 2.0]]);
    let err = GaussianElimination::new().solve(&system).unwrap_err();
    assert!(matches!(err, MatrizError::Singular { column: 1, .. }));
}

#[test]
fn test_singular_zero_column() {
    let system = augmented(&[vec![0.0, 1.0, 1.0], vec![0.0, 2.0, 2.0]]);
    let err = GaussianElimination::new().solve(&system).unwrap_err();
    assert!(matches!(err, MatrizError::Singular { column: 0, .. }));
}

#[test]
fn test_wrong_shape_rejected() {
    // square matrix without the augmented column
    let system = augmented(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert!(matches!(
        GaussianElimination::new().solve(&system).unwrap_err(),
        MatrizError::InvalidArgument { .. }
    ));
}

#[test]
fn test_input_not_mutated() {
    let system = augmented(&[vec![2.0, 3.0, 8.0], vec![4.0, 5.0, 14.0]]);
    let before = system.clone();
    let _ = GaussianElimination::new().solve(&system).expect("system is regular");
    assert_eq!(system, before);
}

#[test]
fn test_custom_epsilon() {
    // pivot magnitudes of 1e-6 are fine by default but singular at 1e-3
    let system = augmented(&[vec![1e-6, 0.0, 1e-6], vec![0.0, 1.0, 1.0]]);
    assert!(GaussianElimination::new().solve(&system).is_ok());
    assert!(GaussianElimination::new()
        .with_epsilon(1e-3)
        .solve(&system)
        .is_err());
}

#[test]
fn test_swap_rows() {
    let mut m = augmented(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    swap_rows(&mut m, 0, 1).expect("both rows exist");
    assert!((m.get(0, 0) - 3.0).abs() < 1e-12);
    assert!((m.get(0, 1) - 1.0).abs() < 1e-12);
}

#[test]
fn test_swap_rows_self_is_noop() {
    let mut m = augmented(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    let before = m.clone();
    swap_rows(&mut m, 1, 1).expect("row exists");
    assert_eq!(m, before);
}

#[test]
fn test_swap_rows_out_of_range() {
    let mut m = Matrix::zeros(2, 2);
    assert!(swap_rows(&mut m, 0, 2).is_err());
    assert!(swap_rows(&mut m, 2, 0).is_err());
}

#[test]
fn test_add_scaled_row() {
    let mut m = augmented(&[vec![1.0, 2.0], vec![10.0, 20.0]]);
    add_scaled_row(&mut m, 0, 1, -10.0).expect("both rows exist");
    assert!((m.get(0, 1) - 0.0).abs() < 1e-12);
    assert!((m.get(1, 1) - 0.0).abs() < 1e-12);
    // source row untouched
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_add_scaled_row_out_of_range() {
    let mut m = Matrix::zeros(2, 2);
    assert!(add_scaled_row(&mut m, 2, 0, 1.0).is_err());
    assert!(add_scaled_row(&mut m, 0, 2, 1.0).is_err());
}

#[test]
fn test_solution_matches_multiplication() {
    // verify A * x = b for the computed solution
    let a = Matrix::from_rows(&[vec![3.0, 1.0], vec![1.0, 2.0]]).expect("rectangular rows");
    let b = Matrix::from_rows(&[vec![9.0], vec![8.0]]).expect("rectangular rows");

    let mut system = a.clone();
    system.concatenate(&b).expect("heights match");

    let x = GaussianElimination::new()
        .solution(&system)
        .expect("system is regular");
    let x_column = Matrix::from_vec(1, 2, x.as_slice().to_vec()).expect("2 values fill 1x2");
    let product = a.multiply(&x_column).expect("shapes are compatible");
    assert!((product.get(0, 0) - 9.0).abs() < 1e-9);
    assert!((product.get(0, 1) - 8.0).abs() < 1e-9);
}
