use num_traits::Zero;

use crate::real::Real;
use crate::{BinaryOperator, EvalError, Expression};

#[cfg(feature = "rayon")]
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

impl BinaryOperator {
    /// Combines two already evaluated operands.
    ///
    /// Only `Divide` can fail, and only for a divisor that is exactly zero
    /// (including `-0.0`). Everything else follows IEEE semantics.
    pub fn apply(self, lhs: Real, rhs: Real) -> Result<Real, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                // Exact comparison; a near-zero divisor is a valid result.
                if rhs.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl Expression {
    pub fn evaluate_without_inputs(&self) -> Result<Real, EvalError> {
        self.evaluate(&[])
    }

    /// Reduces the expression to a single value, using `inputs[i]` for every
    /// `x[i]`.
    pub fn evaluate(&self, inputs: &[Real]) -> Result<Real, EvalError> {
        self.evaluate_recursive(inputs).map_err(|err| {
            log::debug!("evaluation of {self} failed: {err}");
            err
        })
    }

    fn evaluate_recursive(&self, inputs: &[Real]) -> Result<Real, EvalError> {
        match self {
            Self::Constant(value) => Ok(*value),
            Self::Parameter(index) => {
                inputs
                    .get(*index)
                    .copied()
                    .ok_or(EvalError::IndexOutOfRange {
                        index: *index,
                        len: inputs.len(),
                    })
            }
            Self::BinaryOp { op, lhs, rhs } => {
                // Left before right, so the left operand's error wins.
                let lhs = lhs.evaluate_recursive(inputs)?;
                let rhs = rhs.evaluate_recursive(inputs)?;
                op.apply(lhs, rhs)
            }
        }
    }

    /// Evaluates the expression once per input vector. Results keep the order
    /// of `input_sets`.
    pub fn evaluate_batch<I: AsRef<[Real]> + Sync>(
        &self,
        input_sets: &[I],
    ) -> Vec<Result<Real, EvalError>> {
        #[cfg(feature = "rayon")]
        {
            input_sets
                .par_iter()
                .map(|inputs| self.evaluate(inputs.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            input_sets
                .iter()
                .map(|inputs| self.evaluate(inputs.as_ref()))
                .collect()
        }
    }
}
