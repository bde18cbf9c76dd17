use thiserror::Error;

// Unified error type for matrik

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("matrix must be square for this operation (got {rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("invalid dimensions {rows}x{cols}: rows and cols must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("invalid exponent {0}: must be at least 1")]
    InvalidExponent(i64),
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("element at flat index {0} is not representable in the target type")]
    Cast(usize),
}
