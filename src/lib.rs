//! matrik: dense row-major matrices for scripts and teaching.
//!
//! This crate provides a single value type, [`Matrix`], with in-place and operator
//! forms of addition, subtraction and multiplication, chained multiplication over
//! mixed scalar/matrix operands, integer powers, transpose, and text rendering.
//! Chained operations accept an optional monitor that observes every step.

pub mod chain;
pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use crate::chain::*;
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::matrix::*;
pub use crate::utils::*;
