//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};

/// A rectangular matrix of `f64` values (row-major storage).
///
/// Entries are addressed as `(x, y)` where `x` is the column and `y` is the
/// row. Structural operations (`resize`, `remove_row`, `concatenate`, ...)
/// mutate the matrix in place; `copy` and `clone` produce independent
/// matrices.
///
/// Matrix sizes are `usize`, so a negative width or height cannot be
/// expressed; the only invalid construction left is a data buffer whose
/// length does not match the requested shape.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("6 values fill 3x2");
/// assert_eq!(m.shape(), (3, 2));
/// assert!((m.get(2, 1) - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    width: usize,
    height: usize,
}

impl Matrix {
    /// Creates the zero matrix with the given size.
    #[must_use]
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// Creates a matrix from row-major data, taking ownership of the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidArgument`] if `data.len()` is not
    /// `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != width * height {
            return Err(MatrizError::invalid_argument(format!(
                "buffer of length {} cannot fill a {width}x{height} matrix",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a matrix from a slice of rows, copying the values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidArgument`] if the rows have unequal
    /// lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MatrizError::invalid_argument(format!(
                    "row {y} has length {}, expected {width}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates the identity matrix with the given size.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.data[i * size + i] = 1.0;
        }
        m
    }

    /// Returns the width (number of columns).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height (number of rows).
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the shape as (width, height).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Checks whether the matrix is equally wide and tall.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Returns the value at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds. Accessors are the hot path
    /// of every algorithm in this crate, so they stay panicking; all
    /// structural operations validate and return `Result` instead.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(
            x < self.width && y < self.height,
            "position ({x}, {y}) out of bounds for {}x{} matrix",
            self.width,
            self.height
        );
        self.data[self.offset(x, y)]
    }

    /// Sets the value at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        assert!(
            x < self.width && y < self.height,
            "position ({x}, {y}) out of bounds for {}x{} matrix",
            self.width,
            self.height
        );
        let offset = self.offset(x, y);
        self.data[offset] = value;
    }

    /// Multiplies every entry of row `y` by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `y >= height`.
    pub fn scale_row(&mut self, y: usize, factor: f64) -> Result<()> {
        if y >= self.height {
            return Err(MatrizError::out_of_range(y, self.height));
        }
        let start = y * self.width;
        for value in &mut self.data[start..start + self.width] {
            *value *= factor;
        }
        Ok(())
    }

    /// Multiplies every entry of column `x` by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `x >= width`.
    pub fn scale_column(&mut self, x: usize, factor: f64) -> Result<()> {
        if x >= self.width {
            return Err(MatrizError::out_of_range(x, self.width));
        }
        for y in 0..self.height {
            let offset = self.offset(x, y);
            self.data[offset] *= factor;
        }
        Ok(())
    }

    /// Multiplies every entry by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for value in &mut self.data {
            *value *= factor;
        }
    }

    /// Adds another matrix element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::SizeMismatch`] unless `other` has identical
    /// width and height.
    pub fn add(&mut self, other: &Matrix) -> Result<()> {
        if other.width != self.width || other.height != self.height {
            return Err(MatrizError::size_mismatch(
                format!("{}x{}", self.width, self.height),
                format!("{}x{}", other.width, other.height),
            ));
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Adds a vector element-wise into row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `y >= height`, or
    /// [`MatrizError::SizeMismatch`] if the vector length is not the width.
    pub fn add_to_row(&mut self, y: usize, row: &Vector) -> Result<()> {
        if y >= self.height {
            return Err(MatrizError::out_of_range(y, self.height));
        }
        if row.len() != self.width {
            return Err(MatrizError::size_mismatch(
                format!("len {}", self.width),
                format!("len {}", row.len()),
            ));
        }
        let start = y * self.width;
        for (slot, value) in self.data[start..start + self.width]
            .iter_mut()
            .zip(row.iter())
        {
            *slot += value;
        }
        Ok(())
    }

    /// Adds a vector element-wise into column `x`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `x >= width`, or
    /// [`MatrizError::SizeMismatch`] if the vector length is not the height.
    pub fn add_to_column(&mut self, x: usize, column: &Vector) -> Result<()> {
        if x >= self.width {
            return Err(MatrizError::out_of_range(x, self.width));
        }
        if column.len() != self.height {
            return Err(MatrizError::size_mismatch(
                format!("len {}", self.height),
                format!("len {}", column.len()),
            ));
        }
        for (y, value) in column.iter().enumerate() {
            let offset = self.offset(x, y);
            self.data[offset] += value;
        }
        Ok(())
    }

    /// Computes the matrix product `self * b`.
    ///
    /// `b` must be as tall as `self` is wide; the result entry `(x, y)` is
    /// the dot product of row `y` of `self` and column `x` of `b`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::SizeMismatch`] if `b.height != self.width`.
    pub fn multiply(&self, b: &Matrix) -> Result<Matrix> {
        if b.height != self.width {
            return Err(MatrizError::size_mismatch(
                format!("height {}", self.width),
                format!("height {}", b.height),
            ));
        }
        let mut result = Matrix::zeros(b.width, self.height);
        for y in 0..self.height {
            for x in 0..b.width {
                let mut sum = 0.0;
                for k in 0..self.width {
                    sum += self.get(k, y) * b.get(x, k);
                }
                result.set(x, y, sum);
            }
        }
        Ok(result)
    }

    /// Resizes the matrix in place, keeping the overlapping top-left region.
    ///
    /// New entries are zero; entries outside the new bounds are discarded.
    /// A zero size is legal.
    pub fn resize(&mut self, width: usize, height: usize) {
        let mut data = vec![0.0; width * height];
        for y in 0..height.min(self.height) {
            for x in 0..width.min(self.width) {
                data[y * width + x] = self.data[self.offset(x, y)];
            }
        }
        self.data = data;
        self.width = width;
        self.height = height;
    }

    /// Copies a rectangular area into a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidArgument`] unless the rectangle lies
    /// entirely within this matrix.
    pub fn copy(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Matrix> {
        if x + width > self.width || y + height > self.height {
            return Err(MatrizError::invalid_argument(format!(
                "area {width}x{height} at ({x}, {y}) exceeds the {}x{} source",
                self.width, self.height
            )));
        }
        let mut copy = Matrix::zeros(width, height);
        for py in 0..height {
            for px in 0..width {
                copy.set(px, py, self.get(x + px, y + py));
            }
        }
        Ok(copy)
    }

    /// Writes another matrix into this one at offset `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidArgument`] unless the pasted region lies
    /// entirely within this matrix.
    pub fn paste(&mut self, other: &Matrix, x: usize, y: usize) -> Result<()> {
        if x + other.width > self.width || y + other.height > self.height {
            return Err(MatrizError::invalid_argument(format!(
                "pasting {}x{} at ({x}, {y}) exceeds the {}x{} target",
                other.width, other.height, self.width, self.height
            )));
        }
        for py in 0..other.height {
            for px in 0..other.width {
                self.set(x + px, y + py, other.get(px, py));
            }
        }
        Ok(())
    }

    /// Overwrites row `y` with the vector's values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `y >= height`, or
    /// [`MatrizError::SizeMismatch`] if the vector length is not the width.
    pub fn paste_row(&mut self, y: usize, row: &Vector) -> Result<()> {
        if y >= self.height {
            return Err(MatrizError::out_of_range(y, self.height));
        }
        if row.len() != self.width {
            return Err(MatrizError::size_mismatch(
                format!("len {}", self.width),
                format!("len {}", row.len()),
            ));
        }
        let start = y * self.width;
        self.data[start..start + self.width].copy_from_slice(row.as_slice());
        Ok(())
    }

    /// Overwrites column `x` with the vector's values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `x >= width`, or
    /// [`MatrizError::SizeMismatch`] if the vector length is not the height.
    pub fn paste_column(&mut self, x: usize, column: &Vector) -> Result<()> {
        if x >= self.width {
            return Err(MatrizError::out_of_range(x, self.width));
        }
        if column.len() != self.height {
            return Err(MatrizError::size_mismatch(
                format!("len {}", self.height),
                format!("len {}", column.len()),
            ));
        }
        for (y, value) in column.iter().enumerate() {
            let offset = self.offset(x, y);
            self.data[offset] = *value;
        }
        Ok(())
    }

    /// Appends another matrix on the right, growing the width.
    ///
    /// Implemented as a `resize` followed by a `paste`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::SizeMismatch`] unless the heights are equal.
    pub fn concatenate(&mut self, other: &Matrix) -> Result<()> {
        if other.height != self.height {
            return Err(MatrizError::size_mismatch(
                format!("height {}", self.height),
                format!("height {}", other.height),
            ));
        }
        let old_width = self.width;
        self.resize(old_width + other.width, self.height);
        self.paste(other, old_width, 0)
    }

    /// Removes row `y`, shrinking the height by one.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `y >= height`.
    pub fn remove_row(&mut self, y: usize) -> Result<()> {
        if y >= self.height {
            return Err(MatrizError::out_of_range(y, self.height));
        }
        let start = y * self.width;
        self.data.drain(start..start + self.width);
        self.height -= 1;
        Ok(())
    }

    /// Removes column `x`, shrinking the width by one.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::OutOfRange`] if `x >= width`.
    pub fn remove_column(&mut self, x: usize) -> Result<()> {
        if x >= self.width {
            return Err(MatrizError::out_of_range(x, self.width));
        }
        let width = self.width;
        let mut kept = 0;
        self.data.retain(|_| {
            let keep = kept % width != x;
            kept += 1;
            keep
        });
        self.width -= 1;
        Ok(())
    }

    /// Returns row `y` as an independent vector.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[must_use]
    pub fn row(&self, y: usize) -> Vector {
        assert!(
            y < self.height,
            "row {y} out of bounds for height {}",
            self.height
        );
        let start = y * self.width;
        Vector::from_slice(&self.data[start..start + self.width])
    }

    /// Returns column `x` as an independent vector.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width`.
    #[must_use]
    pub fn column(&self, x: usize) -> Vector {
        assert!(
            x < self.width,
            "column {x} out of bounds for width {}",
            self.width
        );
        Vector::from_vec((0..self.height).map(|y| self.data[self.offset(x, y)]).collect())
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
