//! Multiplication: operands, chained in-place products and exponentiation.

pub mod multiply;
pub mod operand;
pub mod power;

pub use multiply::ChainMultiply;
pub use operand::Operand;
