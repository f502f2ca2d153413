//! Matrix type for 2D real-valued data.

use crate::error::MatrizError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D matrix of values (row-major storage).
///
/// Both dimensions are fixed at construction and may be zero; the 0x0
/// matrix is the canonical null sentinel returned by operations that
/// receive invalid shapes. Cloning deep-copies the backing storage, so
/// distinct matrix values never alias.
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
    /// Creates a new matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrizError> {
        if data.len() != rows * cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{} elements ({rows}x{cols})", rows * cols),
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

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns true if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true for a single-row matrix.
    #[must_use]
    pub fn is_row_vector(&self) -> bool {
        self.rows == 1
    }

    /// Returns true for a single-column matrix.
    #[must_use]
    pub fn is_column_vector(&self) -> bool {
        self.cols == 1
    }

    /// Returns true for the 0x0 null sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    /// Returns row `i` as a new 1xC matrix.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> Self {
        let start = i * self.cols;
        let end = start + self.cols;
        Self {
            data: self.data[start..end].to_vec(),
            rows: 1,
            cols: self.cols,
        }
    }

    /// Returns column `j` as a new Rx1 matrix.
    ///
    /// # Panics
    ///
    /// Panics if `j` is out of bounds.
    #[must_use]
    pub fn column(&self, j: usize) -> Self {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + j])
            .collect();
        Self {
            data,
            rows: self.rows,
            cols: 1,
        }
    }

    /// Returns the transpose as a new matrix.
    ///
    /// `transpose` is an involution: applying it twice reproduces the
    /// original bit-for-bit.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// The 0x0 null sentinel.
    #[must_use]
    pub fn null() -> Self {
        Self::zeros(0, 0)
    }

    /// Creates an identity matrix of size n x n.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Elementary swap matrix: left-multiplying a matrix by this one
    /// swaps its rows `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    #[must_use]
    pub fn row_swap(n: usize, a: usize, b: usize) -> Self {
        let mut m = Self::eye(n);
        m.set(a, a, 0.0);
        m.set(b, b, 0.0);
        m.set(a, b, 1.0);
        m.set(b, a, 1.0);
        m
    }

    /// Elementary row-addition matrix: left-multiplying a matrix by this
    /// one adds `factor` times row `src` to row `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `src` or `dst` is out of bounds.
    #[must_use]
    pub fn row_addition(n: usize, src: usize, dst: usize, factor: f64) -> Self {
        let mut m = Self::eye(n);
        m.set(dst, src, factor);
        m
    }

    /// Creates a matrix from a two-level literal grid.
    ///
    /// An empty grid yields the 0x0 null sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrizError> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * m);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != m {
                return Err(MatrizError::RaggedRows {
                    row: i,
                    expected: m,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, rows: n, cols: m })
    }

    /// Creates a matrix with entries drawn uniformly from `[0, 1)` using
    /// the supplied random source.
    pub fn random_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
        Self { data, rows, cols }
    }

    /// Creates a matrix with entries drawn uniformly from `[0, 1)`.
    ///
    /// Passing `Some(seed)` makes the result reproducible.
    #[must_use]
    pub fn random(rows: usize, cols: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self::random_with(rows, cols, &mut rng)
    }

    /// Returns true if every entry is exactly `0.0`.
    ///
    /// An empty matrix is zero; a matrix containing NaN is not.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// Returns a copy with row `index` excluded, remaining rows keeping
    /// their relative order. An out-of-range index yields the null
    /// sentinel.
    #[must_use]
    pub fn remove_row(&self, index: usize) -> Self {
        self.try_remove_row(index).unwrap_or_else(|_| Self::null())
    }

    /// Checked variant of [`Matrix::remove_row`].
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn try_remove_row(&self, index: usize) -> Result<Self, MatrizError> {
        if index >= self.rows {
            return Err(MatrizError::IndexOutOfRange {
                index,
                len: self.rows,
            });
        }
        let mut out = Self::zeros(self.rows - 1, self.cols);
        let mut row = 0;
        for i in 0..self.rows {
            if i == index {
                continue;
            }
            for j in 0..self.cols {
                out.set(row, j, self.get(i, j));
            }
            row += 1;
        }
        Ok(out)
    }

    /// Returns a copy with column `index` excluded, remaining columns
    /// keeping their relative order. An out-of-range index yields the
    /// null sentinel.
    #[must_use]
    pub fn remove_col(&self, index: usize) -> Self {
        self.try_remove_col(index).unwrap_or_else(|_| Self::null())
    }

    /// Checked variant of [`Matrix::remove_col`].
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn try_remove_col(&self, index: usize) -> Result<Self, MatrizError> {
        if index >= self.cols {
            return Err(MatrizError::IndexOutOfRange {
                index,
                len: self.cols,
            });
        }
        let mut out = Self::zeros(self.rows, self.cols - 1);
        for i in 0..self.rows {
            let mut col = 0;
            for j in 0..self.cols {
                if j == index {
                    continue;
                }
                out.set(i, col, self.get(i, j));
                col += 1;
            }
        }
        Ok(out)
    }

    /// Returns a copy of `self` with `sub`'s values written in starting
    /// at column `col_offset` (row 0). Copying clips silently at the
    /// destination bounds.
    #[must_use]
    pub fn implant(&self, sub: &Self, col_offset: usize) -> Self {
        self.emplace(sub, 0, col_offset)
    }

    /// Returns a copy of `self` with `sub`'s values written in starting
    /// at (`row_offset`, `col_offset`). Copying clips silently at the
    /// destination bounds.
    #[must_use]
    pub fn emplace(&self, sub: &Self, row_offset: usize, col_offset: usize) -> Self {
        let mut out = self.clone();
        for i in 0..sub.rows {
            if row_offset + i >= self.rows {
                break;
            }
            for j in 0..sub.cols {
                if col_offset + j >= self.cols {
                    break;
                }
                out.set(row_offset + i, col_offset + j, sub.get(i, j));
            }
        }
        out
    }

    /// Element-wise addition over the overlapping rectangle of the two
    /// operands: the result is min(rows) x min(cols). Mismatched shapes
    /// do not fail; entries outside the overlap are dropped.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let rows = self.rows.min(other.rows);
        let cols = self.cols.min(other.cols);
        let mut out = Self::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                out.set(i, j, self.get(i, j) + other.get(i, j));
            }
        }
        out
    }

    /// Element-wise subtraction over the overlapping rectangle, with the
    /// same clipping behavior as [`Matrix::add`].
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let rows = self.rows.min(other.rows);
        let cols = self.cols.min(other.cols);
        let mut out = Self::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                out.set(i, j, self.get(i, j) - other.get(i, j));
            }
        }
        out
    }

    /// Returns the matrix scaled by `factor`.
    #[must_use]
    pub fn mul_scalar(&self, factor: f64) -> Self {
        let data = self.data.iter().map(|&x| x * factor).collect();
        Self {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix multiplication. An inner-dimension mismatch yields the
    /// null sentinel.
    #[must_use]
    pub fn matmul(&self, other: &Self) -> Self {
        if self.cols != other.rows {
            return Self::null();
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.get(i, k) * other.get(k, j);
                }
                out.set(i, j, acc);
            }
        }
        out
    }

    /// Checked variant of [`Matrix::matmul`].
    ///
    /// # Errors
    ///
    /// Returns an error if the inner dimensions don't match.
    pub fn try_matmul(&self, other: &Self) -> Result<Self, MatrizError> {
        if self.cols != other.rows {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{} rows on right operand", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }
        Ok(self.matmul(other))
    }
}

/// Prints each value in a fixed 8-character field: six decimals, padded
/// with zeros and truncated. Diagnostic only, not meant to round-trip.
fn format_entry(value: f64) -> String {
    let mut s = format!("{value:.6}");
    while s.len() < 8 {
        s.push('0');
    }
    s.truncate(8);
    s
}

impl fmt::Display for Matrix<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "[NULL]");
        }
        writeln!(f, "[{} {}]", self.rows, self.cols)?;
        for i in 0..self.rows {
            write!(f, "[ ")?;
            for j in 0..self.cols {
                write!(f, "{} ", format_entry(self.get(i, j)))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
