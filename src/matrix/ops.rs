//! Operator forms of the matrix arithmetic.
//!
//! Every operator returns a fresh `Matrix` and leaves both operands untouched.
//! Shape-checked operators (`+`, `-`, matrix `*`) return `Result<Matrix<T>, MatError>`;
//! scalar `*` and unary `-` cannot fail.

use crate::core::traits::Element;
use crate::error::MatError;
use crate::matrix::dense::Matrix;

impl<'a, T: Element> std::ops::Add<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatError>;

    fn add(self, rhs: &'a Matrix<T>) -> Self::Output {
        let mut out = self.clone();
        Matrix::add(&mut out, rhs)?;
        Ok(out)
    }
}

impl<T: Element> std::ops::Add for Matrix<T> {
    type Output = Result<Matrix<T>, MatError>;

    fn add(mut self, rhs: Matrix<T>) -> Self::Output {
        Matrix::add(&mut self, &rhs)?;
        Ok(self)
    }
}

impl<'a, T: Element> std::ops::Sub<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatError>;

    fn sub(self, rhs: &'a Matrix<T>) -> Self::Output {
        let mut out = self.clone();
        Matrix::subtract(&mut out, rhs)?;
        Ok(out)
    }
}

impl<T: Element> std::ops::Sub for Matrix<T> {
    type Output = Result<Matrix<T>, MatError>;

    fn sub(mut self, rhs: Matrix<T>) -> Self::Output {
        Matrix::subtract(&mut self, &rhs)?;
        Ok(self)
    }
}

impl<'a, T: Element> std::ops::Mul<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatError>;

    fn mul(self, rhs: &'a Matrix<T>) -> Self::Output {
        self.product(rhs)
    }
}

impl<T: Element> std::ops::Mul for Matrix<T> {
    type Output = Result<Matrix<T>, MatError>;

    fn mul(self, rhs: Matrix<T>) -> Self::Output {
        self.product(&rhs)
    }
}

impl<T: Element + std::ops::Neg<Output = T>> std::ops::Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| -v).collect(),
        }
    }
}

impl<T: Element + std::ops::Neg<Output = T>> std::ops::Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

// Scalar multiplication is implemented per primitive so `Mul<T>` never overlaps
// with `Mul<&Matrix<T>>`.
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {$(
        impl std::ops::Mul<$t> for &Matrix<$t> {
            type Output = Matrix<$t>;

            fn mul(self, k: $t) -> Matrix<$t> {
                let mut out = self.clone();
                out.scale(k);
                out
            }
        }

        impl std::ops::Mul<$t> for Matrix<$t> {
            type Output = Matrix<$t>;

            fn mul(mut self, k: $t) -> Matrix<$t> {
                self.scale(k);
                self
            }
        }

        impl std::ops::Mul<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, m: &Matrix<$t>) -> Matrix<$t> {
                m * self
            }
        }
    )*};
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
