//! Operands for chained multiplication.

use std::fmt;

use crate::core::traits::Element;
use crate::error::MatError;
use crate::matrix::Matrix;

/// One factor in a multiplication chain: either a scalar or a borrowed matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a, T> {
    Scalar(T),
    Matrix(&'a Matrix<T>),
}

impl<'a, T: Element> Operand<'a, T> {
    /// Compute `m op self` as a new matrix; `m` is not modified.
    pub fn apply_to(&self, m: &Matrix<T>) -> Result<Matrix<T>, MatError> {
        match *self {
            Operand::Scalar(k) => {
                let mut out = m.clone();
                out.scale(k);
                Ok(out)
            }
            Operand::Matrix(rhs) => m.product(rhs),
        }
    }

    /// Shape of `m op self`, without computing it.
    pub fn result_shape(&self, m: &Matrix<T>) -> Result<(usize, usize), MatError> {
        match *self {
            Operand::Scalar(_) => Ok(m.shape()),
            Operand::Matrix(rhs) => {
                m.check_chainable(rhs)?;
                Ok((m.rows(), rhs.cols()))
            }
        }
    }
}

impl<'a, T> From<&'a Matrix<T>> for Operand<'a, T> {
    fn from(m: &'a Matrix<T>) -> Self {
        Operand::Matrix(m)
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {$(
        impl<'a> From<$t> for Operand<'a, $t> {
            fn from(k: $t) -> Self {
                Operand::Scalar(k)
            }
        }
    )*};
}

impl_scalar_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: fmt::Display> fmt::Display for Operand<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(k) => writeln!(f, "{k}"),
            Operand::Matrix(m) => write!(f, "{m}"),
        }
    }
}
