//! Matriz: a small dense-linear-algebra kernel in pure Rust.
//!
//! Provides a rectangular [`Matrix`](primitives::Matrix) and a fixed-length
//! [`Vector`](primitives::Vector) of `f64` values, plus three algorithms
//! built on them: two O(n!) determinant baselines (cofactor expansion and
//! the Leibniz permutation sum) and a Gaussian-elimination solver with
//! partial pivoting.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! // 2x + 3y = 8, 4x + 5y = 14
//! let system = Matrix::from_rows(&[
//!     vec![2.0, 3.0, 8.0],
//!     vec![4.0, 5.0, 14.0],
//! ]).unwrap();
//!
//! let x = GaussianElimination::new().solution(&system).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-9);
//! assert!((x[1] - 2.0).abs() < 1e-9);
//!
//! // both determinant derivations agree
//! let a = system.copy(0, 0, 2, 2).unwrap();
//! let cofactor = determinant(&a, DeterminantMethod::CofactorExpansion).unwrap();
//! let leibniz = determinant(&a, DeterminantMethod::PermutationExpansion).unwrap();
//! assert!((cofactor - leibniz).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`determinant`]: Cofactor and permutation determinant algorithms
//! - [`solve`]: Gaussian elimination and the elementary row transformations
//! - [`format`]: Tab-separated text rendering (the core never prints)
//! - [`error`]: Error type and `Result` alias

pub mod determinant;
pub mod error;
pub mod format;
pub mod prelude;
pub mod primitives;
pub mod solve;
