//! Column-vector operations on single-column matrices.
//!
//! These helpers treat their operands as column vectors but are defined
//! through generic multiply/transpose, so wider matrices are accepted;
//! only the top-left scalar of the intermediate product is meaningful in
//! that case. The projection and unit-vector operations are deliberately
//! unguarded against zero operands: dividing by a zero norm produces
//! infinities/NaNs that propagate to the result.

use super::Matrix;

impl Matrix<f64> {
    /// Dot product: the top-left scalar of `self^T x other`.
    ///
    /// Defined even for non-column inputs (only that single scalar is
    /// meaningful). A height mismatch, where the intermediate product is
    /// the null sentinel, yields the scalar sentinel `0.0`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let product = self.transpose().matmul(other);
        if product.is_null() {
            return 0.0;
        }
        product.get(0, 0)
    }

    /// Squared Euclidean norm: `dot(self, self)`.
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Projects `self` onto the direction of `other`:
    /// `other x (dot(self, other) / norm_squared(other))`.
    ///
    /// A zero `other` divides by zero and fills the result with NaN.
    #[must_use]
    pub fn project_onto(&self, other: &Self) -> Self {
        other.mul_scalar(self.dot(other) / other.norm_squared())
    }

    /// Scales `self` to unit length.
    ///
    /// A zero vector divides by zero and fills the result with NaN.
    #[must_use]
    pub fn unit(&self) -> Self {
        self.mul_scalar(1.0 / self.norm())
    }
}

#[cfg(test)]
#[path = "column_tests.rs"]
mod tests;
