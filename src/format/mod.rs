//! Tabular text rendering for matrices and vectors.
//!
//! The core types never print; these functions build the human-readable
//! tab-separated form and leave the output channel to the caller.

use crate::primitives::{Matrix, Vector};
use std::fmt::Write;

/// Renders a matrix as tab-separated rows.
///
/// Each entry is followed by a tab, each row by a newline, and the whole
/// table by one blank line.
///
/// # Examples
///
/// ```
/// use matriz::format::matrix_tabular;
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::identity(2);
/// assert_eq!(matrix_tabular(&m), "1\t0\t\n0\t1\t\n\n");
/// ```
#[must_use]
pub fn matrix_tabular(matrix: &Matrix) -> String {
    let mut out = String::new();
    for y in 0..matrix.height() {
        for x in 0..matrix.width() {
            let _ = write!(out, "{}\t", matrix.get(x, y));
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Renders a vector on a single line, entries separated by tabs.
#[must_use]
pub fn vector_horizontal(vector: &Vector) -> String {
    let mut out = String::new();
    for value in vector.iter() {
        let _ = write!(out, "{value}\t");
    }
    out.push('\n');
    out
}

/// Renders a vector with one entry per line, followed by a blank line.
#[must_use]
pub fn vector_vertical(vector: &Vector) -> String {
    let mut out = String::new();
    for value in vector.iter() {
        let _ = writeln!(out, "{value}\t");
    }
    out.push('\n');
    out
}
