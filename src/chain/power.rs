//! Integer exponentiation by repeated multiplication.

use crate::chain::operand::Operand;
use crate::core::traits::Element;
use crate::error::MatError;
use crate::matrix::Matrix;
use crate::utils::trace::{Step, print_step};

impl<T: Element> Matrix<T> {
    /// Raise a square matrix to `exponent` in place.
    ///
    /// Multiplies by a frozen copy of the original `exponent - 1` times, so
    /// `power(1)` leaves the matrix unchanged. Memory use does not depend on
    /// `exponent`.
    ///
    /// # Errors
    /// * `NotSquare` if `rows != cols` (checked first)
    /// * `InvalidExponent` if `exponent < 1`
    pub fn power(&mut self, exponent: i64) -> Result<(), MatError> {
        raise(self, exponent, None)
    }

    /// [`Matrix::power`] with a monitor called after each multiplication.
    pub fn power_with_monitor<F>(&mut self, exponent: i64, mut monitor: F) -> Result<(), MatError>
    where
        F: FnMut(&Step<'_, T>),
    {
        raise(self, exponent, Some(&mut monitor))
    }

    /// [`Matrix::power`], printing every multiplication to stdout when `show_steps` is set.
    pub fn power_traced(&mut self, exponent: i64, show_steps: bool) -> Result<(), MatError> {
        if show_steps {
            self.power_with_monitor(exponent, print_step::<T>)
        } else {
            self.power(exponent)
        }
    }
}

fn raise<T: Element>(
    m: &mut Matrix<T>,
    exponent: i64,
    mut monitor: Option<&mut dyn FnMut(&Step<'_, T>)>,
) -> Result<(), MatError> {
    if !m.is_square() {
        return Err(MatError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    if exponent < 1 {
        return Err(MatError::InvalidExponent(exponent));
    }
    let steps = usize::try_from(exponent - 1).map_err(|_| MatError::InvalidExponent(exponent))?;
    log::debug!("power: {}x{} matrix to the {exponent}", m.rows(), m.cols());

    let base = m.clone();
    for index in 0..steps {
        let next = m.product(&base)?;
        if let Some(ref mut monitor) = monitor {
            monitor(&Step {
                index,
                before: &*m,
                operand: Operand::Matrix(&base),
                result: &next,
            });
        }
        *m = next;
    }
    Ok(())
}
