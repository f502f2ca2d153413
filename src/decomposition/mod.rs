//! Matrix decompositions built on partial-pivoting Gaussian elimination.
//!
//! Everything here is exposed as inherent methods on
//! [`Matrix<f64>`](crate::primitives::Matrix): row echelon form,
//! determinant, inverse, and PLU share one elimination engine
//! (`eliminate`); Gram-Schmidt and QR build on the column-vector
//! helpers (`orthogonal`).
//!
//! Pivot-zero comparisons use exact equality to `0.0` throughout, with
//! no epsilon tolerance. This matches the kernel's compatibility
//! contract and is numerically fragile on ill-conditioned inputs.

mod eliminate;
mod orthogonal;


#[cfg(test)]
#[path = "tests_eliminate_contract.rs"]
mod tests_eliminate_contract;

#[cfg(test)]
#[path = "tests_orthogonal_contract.rs"]
mod tests_orthogonal_contract;
