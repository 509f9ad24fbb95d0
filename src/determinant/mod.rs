//! Determinant algorithms.
//!
//! Two independent O(n!) derivations of the same quantity: recursive
//! cofactor expansion along the first row, and the Leibniz sum over all
//! permutations. Both exist as a correctness baseline against each other
//! (and against faster algorithms elsewhere); they must agree on every
//! square input.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

/// Strategy selector for [`determinant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeterminantMethod {
    /// Recursive expansion along the first row into signed minors.
    CofactorExpansion,
    /// Leibniz sum over all permutations of the column indices.
    PermutationExpansion,
}

/// Computes the determinant of a square matrix with the chosen method.
///
/// # Examples
///
/// ```
/// use matriz::determinant::{determinant, DeterminantMethod};
/// use matriz::primitives::Matrix;
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular rows");
/// let det = determinant(&a, DeterminantMethod::CofactorExpansion).expect("a is square");
/// assert!((det - (-2.0)).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// Returns [`MatrizError::InvalidArgument`] if the matrix is not square.
pub fn determinant(matrix: &Matrix, method: DeterminantMethod) -> Result<f64> {
    match method {
        DeterminantMethod::CofactorExpansion => cofactor_determinant(matrix),
        DeterminantMethod::PermutationExpansion => permutation_determinant(matrix),
    }
}

/// Computes the determinant by recursive cofactor expansion along row 0.
///
/// The input is never mutated; each recursion step works on a fresh copy of
/// the minor. O(n!) multiplications.
///
/// # Errors
///
/// Returns [`MatrizError::InvalidArgument`] if the matrix is not square.
pub fn cofactor_determinant(matrix: &Matrix) -> Result<f64> {
    require_square(matrix)?;
    cofactor_expand(matrix)
}

fn cofactor_expand(matrix: &Matrix) -> Result<f64> {
    let n = matrix.height();
    if n == 0 {
        // empty product convention
        return Ok(1.0);
    }
    if n == 1 {
        return Ok(matrix.get(0, 0));
    }

    let mut det = 0.0;
    for x in 0..matrix.width() {
        let mut minor = matrix.clone();
        minor.remove_row(0)?;
        minor.remove_column(x)?;

        let term = matrix.get(x, 0) * cofactor_expand(&minor)?;
        if x % 2 == 0 {
            det += term;
        } else {
            det -= term;
        }
    }
    Ok(det)
}

/// Computes the determinant with the Leibniz formula:
/// `det(A) = Σ_σ sgn(σ) · Π_i A[row=i, col=σ(i)]`.
///
/// Permutations are enumerated in lexicographic order starting from the
/// identity; the order does not affect the sum. O(n!).
///
/// # Errors
///
/// Returns [`MatrizError::InvalidArgument`] if the matrix is not square.
pub fn permutation_determinant(matrix: &Matrix) -> Result<f64> {
    require_square(matrix)?;

    let n = matrix.height();
    let mut perm: Vec<usize> = (0..n).collect();
    let mut det = 0.0;

    loop {
        let mut term = permutation_sign(&perm);
        for (y, &x) in perm.iter().enumerate() {
            term *= matrix.get(x, y);
        }
        det += term;

        if !next_permutation(&mut perm) {
            break;
        }
    }
    Ok(det)
}

fn require_square(matrix: &Matrix) -> Result<()> {
    if !matrix.is_square() {
        return Err(MatrizError::invalid_argument(format!(
            "determinant requires a square matrix, got {}x{}",
            matrix.width(),
            matrix.height()
        )));
    }
    Ok(())
}

/// Sign of a permutation as +1.0 or -1.0, by inversion-count parity.
fn permutation_sign(perm: &[usize]) -> f64 {
    let mut inversions = 0usize;
    for i in 0..perm.len() {
        for j in i + 1..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    if inversions % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Advances `perm` to its lexicographic successor.
///
/// Finds the rightmost ascent, swaps it with the smallest larger element to
/// its right, then reverses the suffix. Returns false once `perm` is the
/// last (descending) permutation.
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    // rightmost i with perm[i] < perm[i + 1]
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;

    // smallest element right of the pivot that is still larger
    let mut j = perm.len() - 1;
    while perm[j] <= perm[pivot] {
        j -= 1;
    }
    perm.swap(pivot, j);
    perm[i..].reverse();
    true
}

#[cfg(test)]
#[path = "determinant_tests.rs"]
mod tests;
