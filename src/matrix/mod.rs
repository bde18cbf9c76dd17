//! Matrix module: the dense `Matrix<T>` type, its operators and faer interop.

pub mod dense;
pub use dense::Matrix;
pub mod interop;
pub mod ops;
