//! Matrix products and chained (variadic) in-place multiplication.
//!
//! `Matrix::product` is the pure A·B kernel. `ChainMultiply` folds an ordered
//! list of operands into a target matrix, `M <- ((M op1) op2) ...`, checking
//! chainability against the target's current shape before every step.
//!
//! Each step is computed into a fresh matrix and only then swapped into the
//! target, so a rejected step never touches the target. Steps that already
//! succeeded stay applied.

use crate::chain::operand::Operand;
use crate::core::traits::Element;
use crate::error::MatError;
use crate::matrix::Matrix;
use crate::utils::trace::{Step, print_step};

impl<T: Element> Matrix<T> {
    pub(crate) fn check_chainable(&self, rhs: &Self) -> Result<(), MatError> {
        log::trace!("multiply: {}x{} by {}x{}", self.rows, self.cols, rhs.rows, rhs.cols);
        if self.cols != rhs.rows {
            return Err(MatError::ShapeMismatch(format!(
                "cannot multiply a {}x{} matrix by a {}x{} matrix (left cols {} != right rows {})",
                self.rows, self.cols, rhs.rows, rhs.cols, self.cols, rhs.rows
            )));
        }
        Ok(())
    }

    /// Matrix product `self * rhs` as a new matrix.
    ///
    /// Entry `(i, j)` is `sum_k self(i, k) * rhs(k, j)`, accumulated from zero in
    /// ascending `k` in the element type.
    pub fn product(&self, rhs: &Self) -> Result<Self, MatError> {
        self.check_chainable(rhs)?;
        let (p, q, r) = (self.rows, self.cols, rhs.cols);
        let mut data = Vec::with_capacity(p * r);
        for i in 0..p {
            let row = &self.data[i * q..(i + 1) * q];
            for j in 0..r {
                let mut acc = T::zero();
                for (k, &a) in row.iter().enumerate() {
                    acc = acc + a * rhs.data[k * r + j];
                }
                data.push(acc);
            }
        }
        Ok(Matrix { rows: p, cols: r, data })
    }

    /// Multiply in place by each operand in turn.
    ///
    /// # Errors
    /// `ShapeMismatch` at the first operand that is not chainable with the
    /// current shape. Earlier steps remain applied; later ones are not run.
    ///
    /// Operands share the element type of `self`. To multiply an integer
    /// matrix by a float scalar, promote it first with [`Matrix::cast`].
    pub fn multiply(&mut self, operands: &[Operand<'_, T>]) -> Result<(), MatError> {
        ChainMultiply::new(operands.iter().copied()).apply(self)?;
        Ok(())
    }

    /// Like [`Matrix::multiply`], printing every step to stdout when `show_steps` is set.
    pub fn multiply_traced(
        &mut self,
        operands: &[Operand<'_, T>],
        show_steps: bool,
    ) -> Result<(), MatError> {
        let mut chain = ChainMultiply::new(operands.iter().copied());
        if show_steps {
            chain = chain.with_monitor(print_step::<T>);
        }
        chain.apply(self)?;
        Ok(())
    }
}

/// Ordered multiplication chain with an optional per-step monitor.
pub struct ChainMultiply<'a, T> {
    pub operands: Vec<Operand<'a, T>>,
    /// Called after every successful step
    pub monitor: Option<Box<dyn FnMut(&Step<'_, T>) + 'a>>,
}

impl<'a, T: Element> ChainMultiply<'a, T> {
    pub fn new<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = Operand<'a, T>>,
    {
        Self {
            operands: operands.into_iter().collect(),
            monitor: None,
        }
    }

    pub fn with_monitor<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Step<'_, T>) + 'a,
    {
        self.monitor = Some(Box::new(f));
        self
    }

    pub fn push(&mut self, operand: Operand<'a, T>) {
        self.operands.push(operand);
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    /// Fold every operand into `target`. Returns the number of steps applied.
    pub fn apply(&mut self, target: &mut Matrix<T>) -> Result<usize, MatError> {
        for (index, operand) in self.operands.iter().enumerate() {
            let next = match operand.apply_to(target) {
                Ok(next) => next,
                Err(e) => {
                    log::debug!("chain step {index} rejected: {e}");
                    return Err(e);
                }
            };
            log::debug!(
                "chain step {index}: {}x{} -> {}x{}",
                target.rows, target.cols, next.rows, next.cols
            );
            if let Some(ref mut monitor) = self.monitor {
                monitor(&Step {
                    index,
                    before: &*target,
                    operand: *operand,
                    result: &next,
                });
            }
            *target = next;
        }
        Ok(self.operands.len())
    }
}
