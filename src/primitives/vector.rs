//! Vector type for fixed-length 1D numeric data.

use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::slice::Iter;

/// A fixed-length vector of `f64` values.
///
/// The length is set at construction and never changes; elements are mutated
/// in place by [`add`](Vector::add), [`scale`](Vector::scale) and
/// [`set`](Vector::set).
///
/// # Examples
///
/// ```
/// use matriz::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// assert!((v.sum() - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Creates a zero vector of the given length.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Creates a vector that takes ownership of the given values.
    #[must_use]
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying the given slice.
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| MatrizError::out_of_range(index, self.data.len()))
    }

    /// Sets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MatrizError::out_of_range(index, len)),
        }
    }

    /// Adds another vector element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::SizeMismatch`] if the lengths differ.
    pub fn add(&mut self, other: &Vector) -> Result<()> {
        if other.len() != self.len() {
            return Err(MatrizError::size_mismatch(
                format!("len {}", self.len()),
                format!("len {}", other.len()),
            ));
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Multiplies every element by `factor`, in place.
    pub fn scale(&mut self, factor: f64) {
        for value in &mut self.data {
            *value *= factor;
        }
    }

    /// Computes the scalar (dot) product with another vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::SizeMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        if other.len() != self.len() {
            return Err(MatrizError::size_mismatch(
                format!("len {}", self.len()),
                format!("len {}", other.len()),
            ));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Returns the sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Use [`Vector::get`] for a
    /// fallible lookup.
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
