//! Dense row-major matrix storage.
//!
//! `Matrix<T>` keeps its elements in one contiguous `Vec<T>`; element `(i, j)`
//! lives at flat index `i * cols + j`. This module covers construction,
//! element access, element-wise addition/subtraction, scaling and transpose.
//! Multiplication and exponentiation live in [`crate::chain`].

use std::ops::{Index, IndexMut};

use num_traits::NumCast;

use crate::core::traits::{Element, MatShape};
use crate::error::MatError;

/// Dense matrix with row-major storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>,
}

fn check_dims(rows: usize, cols: usize) -> Result<(), MatError> {
    if rows == 0 || cols == 0 {
        return Err(MatError::InvalidDimension { rows, cols });
    }
    Ok(())
}

impl<T: Element> Matrix<T> {
    /// Build a `rows x cols` matrix from row-major `elements`.
    ///
    /// # Errors
    /// * `InvalidDimension` if `rows` or `cols` is zero
    /// * `ShapeMismatch` if `elements.len() != rows * cols`
    pub fn new(rows: usize, cols: usize, elements: Vec<T>) -> Result<Self, MatError> {
        check_dims(rows, cols)?;
        if elements.len() != rows * cols {
            return Err(MatError::ShapeMismatch(format!(
                "{} elements supplied for a {}x{} matrix (expected {})",
                elements.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        Ok(Self { rows, cols, data: elements })
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        check_dims(nrows, ncols)?;
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatError::ShapeMismatch(format!(
                    "row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    ncols
                )));
            }
            data.extend(row);
        }
        Ok(Self { rows: nrows, cols: ncols, data })
    }

    /// Build a matrix by evaluating `f(i, j)` for every position.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, MatError>
    where
        F: FnMut(usize, usize) -> T,
    {
        check_dims(rows, cols)?;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Self { rows, cols, data })
    }

    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, MatError> {
        check_dims(rows, cols)?;
        Ok(Self { rows, cols, data: vec![value; rows * cols] })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatError> {
        Self::filled(rows, cols, T::zero())
    }

    /// Copy with storage disjoint from `self`. Same as `clone`.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a matrix has at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Row `i` as a contiguous slice. Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Column `j` copied out of the row-major buffer. Panics if `j >= cols`.
    pub fn column(&self, j: usize) -> Vec<T> {
        assert!(j < self.cols, "column {j} out of bounds for {} columns", self.cols);
        (0..self.rows).map(|i| self.data[i * self.cols + j]).collect()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    /// Convert every element to `U`, e.g. to promote an integer matrix to `f64`.
    pub fn cast<U: Element + NumCast>(&self) -> Result<Matrix<U>, MatError>
    where
        T: NumCast,
    {
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(idx, &v)| <U as NumCast>::from(v).ok_or(MatError::Cast(idx)))
            .collect::<Result<Vec<U>, MatError>>()?;
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    pub(crate) fn check_same_shape(&self, other: &Self, op: &str) -> Result<(), MatError> {
        log::trace!("{op}: {}x{} with {}x{}", self.rows, self.cols, other.rows, other.cols);
        if self.shape() != other.shape() {
            return Err(MatError::ShapeMismatch(format!(
                "cannot {} a {}x{} matrix and a {}x{} matrix",
                op, self.rows, self.cols, other.rows, other.cols
            )));
        }
        Ok(())
    }

    /// In-place element-wise sum: `self <- self + other`.
    pub fn add(&mut self, other: &Self) -> Result<(), MatError> {
        self.check_same_shape(other, "add")?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a = *a + b;
        }
        Ok(())
    }

    /// In-place element-wise difference: `self <- self - other`.
    pub fn subtract(&mut self, other: &Self) -> Result<(), MatError> {
        self.check_same_shape(other, "subtract")?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a = *a - b;
        }
        Ok(())
    }

    /// In-place scalar multiplication.
    pub fn scale(&mut self, k: T) {
        for a in self.data.iter_mut() {
            *a = *a * k;
        }
    }

    /// Transpose in place; shape `(r, c)` becomes `(c, r)`.
    pub fn transpose(&mut self) {
        let (rows, cols) = (self.cols, self.rows);
        let src = std::mem::take(&mut self.data);
        let mut data = Vec::with_capacity(src.len());
        for i in 0..rows {
            for j in 0..cols {
                // new(i, j) = old(j, i); old row stride is `rows` (= old cols)
                data.push(src[j * rows + i]);
            }
        }
        self.rows = rows;
        self.cols = cols;
        self.data = data;
    }

    /// Transposed copy; `self` is left untouched.
    pub fn transposed(&self) -> Self {
        let mut t = self.clone();
        t.transpose();
        t
    }
}

impl<T> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}
