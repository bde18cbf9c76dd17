//! Core numeric traits for matrik.

use std::fmt::{Debug, Display};

/// Scalar types a `Matrix` can hold.
///
/// Arithmetic stays in the element type: integer matrices accumulate exactly,
/// floating matrices accumulate in floating point.
pub trait Element: num_traits::Num + Copy + PartialEq + Debug + Display {}

impl<T> Element for T where T: num_traits::Num + Copy + PartialEq + Debug + Display {}

/// Shape queries shared by dense matrix types.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;

    /// (rows, cols)
    fn dims(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
