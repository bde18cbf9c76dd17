//! Conversions between `Matrix<T>` and `faer::Mat<T>`.
//!
//! faer stores column-major, `Matrix` stores row-major; both conversions go
//! through `(i, j)` indexing so the layout difference never leaks.

use faer::Mat;

use crate::core::traits::{Element, MatShape};
use crate::error::MatError;
use crate::matrix::dense::Matrix;

impl<T: Element> Matrix<T> {
    /// Copy into a freshly allocated faer matrix.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.rows, self.cols, |i, j| self.data[i * self.cols + j])
    }

    /// Copy a faer matrix into row-major storage.
    ///
    /// Fails with `InvalidDimension` for faer matrices with zero rows or columns.
    pub fn from_faer(m: &Mat<T>) -> Result<Self, MatError> {
        Matrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl<T: Element> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}
