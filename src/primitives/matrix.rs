//! Matrix type for 2D numeric data.

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{MatrizError, Result};

/// A dense 2D matrix of double-precision values (row-major storage).
///
/// Each matrix exclusively owns its element buffer: every operation that
/// returns a new matrix allocates fresh storage and never mutates its
/// operands. Storage is released when the matrix is dropped.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or if data length
    /// doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{rows}x{cols} = {} elements", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix with every element set to `value`.
    ///
    /// Elements are always initialized explicitly, independent of the
    /// requested fill value.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates an identity matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    pub fn identity(size: usize) -> Result<Self> {
        let mut matrix = Self::filled(size, size, 0.0)?;
        for i in 0..size {
            matrix.data[i * size + i] = 1.0;
        }
        Ok(matrix)
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// Output rows are independent, so they are computed in parallel when
    /// the `parallel` feature is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.cols != other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{} inner rows", self.cols),
                actual: format!("{} inner rows", other.rows),
            });
        }

        #[cfg(feature = "parallel")]
        let row_results: Vec<Vec<f64>> = (0..self.rows)
            .into_par_iter()
            .map(|i| self.product_row(other, i))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let row_results: Vec<Vec<f64>> = (0..self.rows)
            .map(|i| self.product_row(other, i))
            .collect();

        let mut data = Vec::with_capacity(self.rows * other.cols);
        for row in row_results {
            data.extend_from_slice(&row);
        }

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Applies a function to every element, producing a new matrix.
    ///
    /// With the `parallel` feature enabled, `f` runs across elements with
    /// no ordering guarantee, so it must be a pure numeric function with
    /// no shared mutable state.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Sync,
    {
        #[cfg(feature = "parallel")]
        let data: Vec<f64> = self.data.par_iter().map(|&x| f(x)).collect();

        #[cfg(not(feature = "parallel"))]
        let data: Vec<f64> = self.data.iter().map(|&x| f(x)).collect();

        Self {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Builds the submatrix obtained by deleting one row and one column.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is smaller than 2x2 or if either
    /// index is out of range.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        if self.rows < 2 || self.cols < 2 {
            return Err(MatrizError::InvalidDimensions {
                rows: self.rows.saturating_sub(1),
                cols: self.cols.saturating_sub(1),
            });
        }
        if row >= self.rows {
            return Err(MatrizError::IndexOutOfBounds {
                index: row,
                bound: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MatrizError::IndexOutOfBounds {
                index: col,
                bound: self.cols,
            });
        }
        Ok(self.submatrix(row, col))
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// Base case: a 1x1 matrix returns its single element. Otherwise
    /// `det = Σ_j a[0,j] * det(minor(0,j)) * (-1)^j`. Cost is O(n!), so
    /// this is only suitable for small matrices. With the `parallel`
    /// feature the cofactor terms are computed concurrently and then
    /// summed in column order, so the result is deterministic and equal
    /// to the serial one.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn det(&self) -> Result<f64> {
        if self.rows != self.cols {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_square())
    }

    // Recursion body; the matrix is known square and non-empty here.
    fn det_square(&self) -> f64 {
        if self.rows == 1 {
            return self.data[0];
        }

        let term = |j: usize| {
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            self.data[j] * self.submatrix(0, j).det_square() * sign
        };

        #[cfg(feature = "parallel")]
        let terms: Vec<f64> = (0..self.cols).into_par_iter().map(term).collect();

        #[cfg(not(feature = "parallel"))]
        let terms: Vec<f64> = (0..self.cols).map(term).collect();

        // Fixed summation order keeps parallel and serial results identical.
        terms.iter().sum()
    }

    // One output row of the matrix product, accumulated from an explicit
    // zero so no uninitialized storage is ever read.
    fn product_row(&self, other: &Self, i: usize) -> Vec<f64> {
        let mut row = Vec::with_capacity(other.cols);
        for j in 0..other.cols {
            let mut sum = 0.0;
            for k in 0..self.cols {
                sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
            }
            row.push(sum);
        }
        row
    }

    // Unchecked minor used by the determinant recursion.
    fn submatrix(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{}x{}", self.rows, self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
