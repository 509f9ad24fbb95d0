//! Core numeric primitives (Vector, Matrix).
//!
//! These types are the foundation the determinant and elimination
//! algorithms operate on.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
