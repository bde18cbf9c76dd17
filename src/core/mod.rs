//! Core traits shared by the matrix types.

pub mod traits;
pub use traits::{Element, MatShape};
