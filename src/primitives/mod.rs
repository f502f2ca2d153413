//! Core matrix primitive.
//!
//! [`Matrix`] is the sole entity of the kernel: a fixed-shape, row-major
//! grid of values with pure value semantics. Every producing operation
//! returns a newly allocated matrix; the 0x0 matrix doubles as the
//! null/error sentinel.

mod column;
mod matrix;

pub use matrix::Matrix;
