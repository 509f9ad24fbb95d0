//! Gaussian elimination over augmented systems.
//!
//! The solver reduces an n×(n+1) augmented matrix `A | b` to the form
//! `I | x` using the three elementary row transformations: swapping two rows
//! (type 1), scaling a row (type 2, [`Matrix::scale_row`]), and adding a
//! scaled row to another (type 3). The transformations are public on their
//! own; the solver is just a particular sequence of them.

use crate::error::{MatrizError, Result};
use crate::primitives::{Matrix, Vector};

/// Default magnitude below which a pivot candidate counts as zero.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Gaussian elimination solver with partial pivoting.
///
/// # Examples
///
/// ```
/// use matriz::solve::GaussianElimination;
/// use matriz::primitives::Matrix;
///
/// // 2x + 3y = 8, 4x + 5y = 14  =>  x = 1, y = 2
/// let system = Matrix::from_rows(&[
///     vec![2.0, 3.0, 8.0],
///     vec![4.0, 5.0, 14.0],
/// ]).expect("rectangular rows");
///
/// let solution = GaussianElimination::new().solution(&system).expect("system is regular");
/// assert!((solution[0] - 1.0).abs() < 1e-9);
/// assert!((solution[1] - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct GaussianElimination {
    epsilon: f64,
}

impl Default for GaussianElimination {
    fn default() -> Self {
        Self::new()
    }
}

impl GaussianElimination {
    /// Creates a solver with the default singularity threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Sets the magnitude below which a pivot counts as zero.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Row-reduces an augmented system to `I | x`.
    ///
    /// The input is cloned; the caller's matrix is never mutated. On success
    /// the left n×n block of the returned matrix is the identity and the
    /// last column holds the solution.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidArgument`] if the matrix is not
    /// n×(n+1), or [`MatrizError::Singular`] if a pivot column has no entry
    /// above the threshold.
    pub fn solve(&self, system: &Matrix) -> Result<Matrix> {
        let n = system.height();
        if system.width() != n + 1 {
            return Err(MatrizError::invalid_argument(format!(
                "augmented system of height {n} must have width {}, got {}",
                n + 1,
                system.width()
            )));
        }

        let mut a = system.clone();
        for r in 0..n {
            // partial pivoting: largest magnitude in column r, rows r..
            let mut pivot_row = r;
            let mut pivot_magnitude = a.get(r, r).abs();
            for y in r + 1..n {
                let candidate = a.get(r, y).abs();
                if candidate > pivot_magnitude {
                    pivot_row = y;
                    pivot_magnitude = candidate;
                }
            }
            if pivot_magnitude <= self.epsilon {
                return Err(MatrizError::Singular {
                    column: r,
                    pivot: pivot_magnitude,
                });
            }

            swap_rows(&mut a, r, pivot_row)?;
            a.scale_row(r, 1.0 / a.get(r, r))?;

            for y in 0..n {
                if y == r {
                    continue;
                }
                let factor = -a.get(r, y);
                if factor != 0.0 {
                    add_scaled_row(&mut a, r, y, factor)?;
                }
            }
        }
        Ok(a)
    }

    /// Solves the system and returns the solution vector (the last column of
    /// the reduced matrix).
    ///
    /// # Errors
    ///
    /// Same conditions as [`GaussianElimination::solve`].
    pub fn solution(&self, system: &Matrix) -> Result<Vector> {
        let reduced = self.solve(system)?;
        Ok(reduced.column(system.height()))
    }
}

/// Type 1 transformation: swaps two rows of the matrix.
///
/// # Errors
///
/// Returns [`MatrizError::OutOfRange`] if either row index is out of bounds.
pub fn swap_rows(matrix: &mut Matrix, first: usize, second: usize) -> Result<()> {
    if first >= matrix.height() {
        return Err(MatrizError::out_of_range(first, matrix.height()));
    }
    if second >= matrix.height() {
        return Err(MatrizError::out_of_range(second, matrix.height()));
    }
    if first == second {
        return Ok(());
    }
    let first_row = matrix.row(first);
    let second_row = matrix.row(second);
    matrix.paste_row(first, &second_row)?;
    matrix.paste_row(second, &first_row)
}

/// Type 3 transformation: adds `factor` times row `source` into row `target`.
///
/// The type 2 transformation is [`Matrix::scale_row`].
///
/// # Errors
///
/// Returns [`MatrizError::OutOfRange`] if either row index is out of bounds.
pub fn add_scaled_row(matrix: &mut Matrix, source: usize, target: usize, factor: f64) -> Result<()> {
    if source >= matrix.height() {
        return Err(MatrizError::out_of_range(source, matrix.height()));
    }
    let mut row = matrix.row(source);
    row.scale(factor);
    matrix.add_to_row(target, &row)
}

#[cfg(test)]
#[path = "solve_tests.rs"]
mod tests;
