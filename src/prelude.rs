//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::error::MatrizError;
pub use crate::primitives::Matrix;
