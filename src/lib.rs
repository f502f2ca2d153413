//! Matriz: dense real-valued linear algebra kernel.
//!
//! Matriz provides a rectangular-matrix abstraction with partial-pivoting
//! Gaussian elimination and the factorizations built on top of it:
//! determinant, inversion, PLU, Gram-Schmidt orthonormalization, and QR.
//! Column-vector operations (dot product, norm, projection, unit vector)
//! are expressed on single-column matrices.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_rows(vec![
//!     vec![2.0, 1.0],
//!     vec![1.0, 1.0],
//! ]).unwrap();
//!
//! assert!((a.det() - 1.0).abs() < 1e-12);
//!
//! let inv = a.inverse();
//! let product = a.matmul(&inv);
//! for i in 0..2 {
//!     for j in 0..2 {
//!         let expected = if i == j { 1.0 } else { 0.0 };
//!         assert!((product.get(i, j) - expected).abs() < 1e-12);
//!     }
//! }
//! ```
//!
//! # Error handling
//!
//! The default API signals invalid inputs with sentinel values rather than
//! errors: the 0x0 null matrix for shape failures, the scalar `0.0` for a
//! non-square determinant. Sentinels propagate through subsequent
//! operations, so unchecked call chains degrade instead of crashing.
//! Every fallible operation also has a checked `try_*` variant returning
//! [`error::MatrizError`], which distinguishes shape mismatch from
//! singularity.
//!
//! # Modules
//!
//! - [`primitives`]: the [`primitives::Matrix`] type — storage,
//!   construction, structural editors, arithmetic, vector helpers
//! - [`decomposition`]: elimination engine, determinant, inverse, PLU,
//!   Gram-Schmidt, QR (inherent methods on `Matrix<f64>`)
//! - [`error`]: the [`error::MatrizError`] type for the checked API
//! - [`prelude`]: convenience re-exports

pub mod decomposition;
pub mod error;
pub mod prelude;
pub mod primitives;
