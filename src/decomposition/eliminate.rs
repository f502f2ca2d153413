//! The elimination engine: row echelon form, determinant, inverse, PLU.
//!
//! All four walk the same pivot state: row index `h` and column index
//! `k` both start at 0 and advance until one runs off the matrix. Each
//! step picks the largest-magnitude entry in column `k` at or below row
//! `h` (first occurrence wins ties), swaps it up if needed, and
//! eliminates everything below. A column whose remaining entries are
//! exactly zero advances `k` alone, which is how rank-deficient columns
//! pass through.

use crate::error::MatrizError;
use crate::primitives::Matrix;

/// Index of the largest-magnitude entry in column `k`, rows `h..`.
/// `None` when the column below `h` is exactly zero.
fn pivot_row(work: &Matrix<f64>, h: usize, k: usize) -> Option<usize> {
    let mut best = 0.0_f64;
    let mut row = None;
    for i in h..work.n_rows() {
        let test = work.get(i, k).abs();
        if test > best {
            best = test;
            row = Some(i);
        }
    }
    row
}

fn swap_rows(work: &mut Matrix<f64>, a: usize, b: usize) {
    for j in 0..work.n_cols() {
        let tmp = work.get(a, j);
        work.set(a, j, work.get(b, j));
        work.set(b, j, tmp);
    }
}

impl Matrix<f64> {
    /// Row echelon form via partial-pivoting Gaussian elimination.
    ///
    /// Defined for any shape; the input is never modified.
    #[must_use]
    pub fn echelon_form(&self) -> Self {
        let (n, m) = self.shape();
        let mut work = self.clone();
        let mut h = 0;
        let mut k = 0;
        while h < n && k < m {
            let Some(pivot) = pivot_row(&work, h, k) else {
                k += 1;
                continue;
            };
            if pivot != h {
                swap_rows(&mut work, pivot, h);
            }
            for i in (h + 1)..n {
                let mult = work.get(i, k) / work.get(h, k);
                work.set(i, k, 0.0);
                for j in (k + 1)..m {
                    work.set(i, j, work.get(i, j) - mult * work.get(h, j));
                }
            }
            h += 1;
            k += 1;
        }
        work
    }

    /// Determinant.
    ///
    /// A non-square input yields `0.0` immediately, which is
    /// indistinguishable from a genuine zero determinant; use
    /// [`Matrix::try_det`] when the two cases must be told apart. The
    /// empty 0x0 matrix has determinant `1.0` (empty diagonal product).
    #[must_use]
    pub fn det(&self) -> f64 {
        if !self.is_square() {
            return 0.0;
        }
        let n = self.n_rows();
        let mut work = self.clone();
        let mut sign = 1.0;
        let mut h = 0;
        let mut k = 0;
        while h < n && k < n {
            let Some(pivot) = pivot_row(&work, h, k) else {
                k += 1;
                continue;
            };
            if pivot != h {
                sign = -sign;
                swap_rows(&mut work, pivot, h);
            }
            for i in (h + 1)..n {
                let mult = work.get(i, k) / work.get(h, k);
                work.set(i, k, 0.0);
                for j in (k + 1)..n {
                    work.set(i, j, work.get(i, j) - mult * work.get(h, j));
                }
            }
            h += 1;
            k += 1;
        }
        let mut det = sign;
        for i in 0..n {
            det *= work.get(i, i);
        }
        det
    }

    /// Checked determinant, distinguishing a non-square input from a
    /// genuinely zero determinant.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn try_det(&self) -> Result<f64, MatrizError> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        Ok(self.det())
    }

    /// Matrix inverse via Gauss-Jordan elimination.
    ///
    /// A non-square or singular input yields the null sentinel; use
    /// [`Matrix::try_inverse`] to distinguish the two.
    #[must_use]
    pub fn inverse(&self) -> Self {
        if !self.is_square() {
            return Self::null();
        }
        self.gauss_jordan().unwrap_or_else(|_| Self::null())
    }

    /// Checked variant of [`Matrix::inverse`].
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square, or if it is
    /// singular (a zero pivot survives to the diagonal after forward
    /// elimination).
    pub fn try_inverse(&self) -> Result<Self, MatrizError> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        self.gauss_jordan()
    }

    /// Forward elimination carrying an identity through the same row
    /// operations, then the backward pass reducing upper-triangular to
    /// diagonal. Caller guarantees squareness.
    fn gauss_jordan(&self) -> Result<Self, MatrizError> {
        let n = self.n_rows();
        let mut work = self.clone();
        let mut inv = Self::eye(n);
        let mut h = 0;
        let mut k = 0;
        while h < n && k < n {
            let Some(pivot) = pivot_row(&work, h, k) else {
                k += 1;
                continue;
            };
            if pivot != h {
                swap_rows(&mut work, pivot, h);
                swap_rows(&mut inv, pivot, h);
            }
            for i in (h + 1)..n {
                let mult = work.get(i, k) / work.get(h, k);
                work.set(i, k, 0.0);
                for j in (k + 1)..n {
                    work.set(i, j, work.get(i, j) - mult * work.get(h, j));
                }
                for j in 0..n {
                    inv.set(i, j, inv.get(i, j) - mult * inv.get(h, j));
                }
            }
            h += 1;
            k += 1;
        }

        for i in 0..n {
            if work.get(i, i) == 0.0 {
                return Err(MatrizError::SingularMatrix { pivot: i });
            }
        }

        // Upper triangular -> diagonal. Here h is both the row being
        // pivoted off of and the column checked for entries to clear.
        for h in 1..n {
            for i in 0..h {
                if work.get(i, h) == 0.0 {
                    continue;
                }
                let mult = work.get(i, h) / work.get(h, h);
                for j in 0..n {
                    work.set(i, j, work.get(i, j) - mult * work.get(h, j));
                    inv.set(i, j, inv.get(i, j) - mult * inv.get(h, j));
                }
            }
        }

        for i in 0..n {
            let diag = work.get(i, i);
            for j in 0..n {
                inv.set(i, j, inv.get(i, j) / diag);
            }
        }
        Ok(inv)
    }

    /// PLU factorization: returns `(P, L, U)` with `P x A = L x U`,
    /// `L` unit lower triangular and `U` the eliminated matrix.
    ///
    /// `P` is the permutation applied to the rows of `A`; callers
    /// wanting `A = P' x L x U` must transpose it. A non-square input
    /// yields three null sentinels.
    #[must_use]
    pub fn plu(&self) -> (Self, Self, Self) {
        if !self.is_square() {
            return (Self::null(), Self::null(), Self::null());
        }
        let n = self.n_rows();
        let mut u = self.clone();
        let mut l = Self::zeros(n, n);
        let mut p = Self::eye(n);
        let mut h = 0;
        let mut k = 0;
        while h < n && k < n {
            let Some(pivot) = pivot_row(&u, h, k) else {
                k += 1;
                continue;
            };
            if pivot != h {
                swap_rows(&mut p, pivot, h);
                swap_rows(&mut l, pivot, h);
                swap_rows(&mut u, pivot, h);
            }
            for i in (h + 1)..n {
                let mult = u.get(i, k) / u.get(h, k);
                u.set(i, k, 0.0);
                for j in (k + 1)..n {
                    u.set(i, j, u.get(i, j) - mult * u.get(h, j));
                }
                // Subtracting multiples of row h from row i affects
                // L at row i, column h.
                l.set(i, h, mult);
            }
            h += 1;
            k += 1;
        }
        for i in 0..n {
            l.set(i, i, 1.0);
        }
        (p, l, u)
    }

    /// Checked variant of [`Matrix::plu`].
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn try_plu(&self) -> Result<(Self, Self, Self), MatrizError> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        Ok(self.plu())
    }
}

#[cfg(test)]
#[path = "eliminate_tests.rs"]
mod tests;
