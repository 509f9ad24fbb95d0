//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::determinant::{
    cofactor_determinant, determinant, permutation_determinant, DeterminantMethod,
};
pub use crate::error::{MatrizError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::solve::GaussianElimination;
