//! Gram-Schmidt orthonormalization and QR factorization.

use crate::error::MatrizError;
use crate::primitives::Matrix;

impl Matrix<f64> {
    /// Gram-Schmidt process: a matrix whose leading columns form an
    /// orthonormal basis for the column space of `self`.
    ///
    /// Columns are processed left to right. A column that is linearly
    /// dependent on the columns accepted before it (its residual after
    /// subtracting the accumulated projection is exactly zero) is
    /// skipped, leaving one more trailing zero column in the output.
    /// A rank-r input therefore yields r orthonormal columns followed by
    /// `cols - r` zero columns, and the output slot no longer maps 1:1
    /// to the input column index once a skip occurs.
    #[must_use]
    pub fn gram_schmidt(&self) -> Self {
        let (n, m) = self.shape();
        let mut out = Self::zeros(n, m);
        let mut accepted = 0;
        for i in 0..m {
            let column = self.column(i);
            let mut projection = Self::zeros(n, 1);
            for j in 0..accepted {
                projection = projection.add(&column.project_onto(&out.column(j)));
            }
            let residual = column.sub(&projection);
            if residual.is_zero() {
                continue;
            }
            out = out.implant(&residual.unit(), accepted);
            accepted += 1;
        }
        out
    }

    /// QR factorization: `(Q, R)` with `Q x R ~= self` when `self` is
    /// full rank, `Q` from [`Matrix::gram_schmidt`] and `R` upper
    /// triangular with `R[i][j] = dot(Q column i, A column j)`.
    ///
    /// A non-square input yields two null sentinels.
    #[must_use]
    pub fn qr(&self) -> (Self, Self) {
        if !self.is_square() {
            return (Self::null(), Self::null());
        }
        let n = self.n_rows();
        let q = self.gram_schmidt();
        let mut r = Self::zeros(n, n);
        for i in 0..n {
            for j in i..n {
                r.set(i, j, q.column(i).dot(&self.column(j)));
            }
        }
        (q, r)
    }

    /// Checked variant of [`Matrix::qr`].
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn try_qr(&self) -> Result<(Self, Self), MatrizError> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        Ok(self.qr())
    }
}

#[cfg(test)]
#[path = "orthogonal_tests.rs"]
mod tests;
