//! Candidate simplifications for minimizing failing expressions.

use std::iter;

use num_traits::Zero;

use crate::expression::ParameterId;
use crate::real::Real;
use crate::Expression;

/// Lazily produced, finite sequence of expressions simpler than the one it was
/// created from, most reduced first.
///
/// Every candidate has no more nodes, no greater depth and no larger
/// parameter index than the original. Call [`Expression::shrink`] again to
/// restart the sequence.
pub struct Shrink<'a> {
    candidates: Box<dyn Iterator<Item = Expression> + 'a>,
}

impl Iterator for Shrink<'_> {
    type Item = Expression;

    fn next(&mut self) -> Option<Expression> {
        self.candidates.next()
    }
}

impl Expression {
    /// Candidates in order:
    ///
    /// - a binary node is first replaced by the constant `1`, then by its left
    ///   child, then by its right child, then by itself with either child
    ///   shrunk (left first);
    /// - a constant moves toward `1`: `1` itself, then half its magnitude, then
    ///   its integral part unless that is zero;
    /// - a parameter moves toward `x[0]`: `x[0]`, then half its index, then the
    ///   previous index.
    ///
    /// `Constant(1)` and `Parameter(0)` are fixed points.
    pub fn shrink(&self) -> Shrink<'_> {
        let candidates: Box<dyn Iterator<Item = Expression> + '_> = match self {
            Self::Constant(value) => Box::new(constant_candidates(*value)),
            Self::Parameter(index) => Box::new(parameter_candidates(*index)),
            Self::BinaryOp { op, lhs, rhs } => {
                let op = *op;
                let replace_subtree = iter::once(Expression::Constant(1.0))
                    .chain(iter::once_with(move || lhs.as_ref().clone()))
                    .chain(iter::once_with(move || rhs.as_ref().clone()));
                // Child shrink sequences are only created once reached.
                let shrink_lhs = iter::once_with(move || {
                    lhs.shrink()
                        .map(move |lhs| Expression::binary(op, lhs, rhs.as_ref().clone()))
                })
                .flatten();
                let shrink_rhs = iter::once_with(move || {
                    rhs.shrink()
                        .map(move |rhs| Expression::binary(op, lhs.as_ref().clone(), rhs))
                })
                .flatten();
                Box::new(replace_subtree.chain(shrink_lhs).chain(shrink_rhs))
            }
        };
        Shrink { candidates }
    }
}

fn constant_candidates(value: Real) -> impl Iterator<Item = Expression> {
    let one = (value != 1.0).then_some(1.0);
    let half = (value.is_finite() && value.abs() > 2.0)
        .then(|| (value / 2.0).trunc())
        .filter(|half| Some(*half) != one);
    let whole = (value.is_finite() && value.fract() != 0.0)
        .then(|| value.trunc())
        .filter(|whole| !whole.is_zero() && Some(*whole) != one && Some(*whole) != half);
    [one, half, whole]
        .into_iter()
        .flatten()
        .map(Expression::Constant)
}

fn parameter_candidates(index: ParameterId) -> impl Iterator<Item = Expression> {
    let first = (index > 0).then_some(0);
    let half = Some(index / 2).filter(|half| *half > 0 && *half < index - 1);
    let previous = (index > 1).then(|| index - 1);
    [first, half, previous]
        .into_iter()
        .flatten()
        .map(Expression::Parameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryOperator;

    fn constants(expr: &Expression) -> Vec<Real> {
        expr.shrink()
            .map(|candidate| match candidate {
                Expression::Constant(value) => value,
                other => panic!("expected constant, got {other}"),
            })
            .collect()
    }

    fn parameters(index: ParameterId) -> Vec<ParameterId> {
        Expression::parameter(index)
            .shrink()
            .map(|candidate| match candidate {
                Expression::Parameter(index) => index,
                other => panic!("expected parameter, got {other}"),
            })
            .collect()
    }

    #[test]
    fn fixed_points() {
        assert_eq!(Expression::constant(1.0).shrink().count(), 0);
        assert_eq!(Expression::parameter(0).shrink().count(), 0);
    }

    #[test]
    fn constants_move_toward_one() {
        assert_eq!(constants(&Expression::constant(9.0)), [1.0, 4.0]);
        assert_eq!(constants(&Expression::constant(3.0)), [1.0]);
        assert_eq!(constants(&Expression::constant(7.5)), [1.0, 3.0, 7.0]);
        assert_eq!(constants(&Expression::constant(0.0)), [1.0]);
        assert_eq!(constants(&Expression::constant(Real::INFINITY)), [1.0]);
        assert_eq!(constants(&Expression::constant(Real::NAN)), [1.0]);
    }

    #[test]
    fn fractional_constants_never_shrink_to_zero() {
        assert_eq!(constants(&Expression::constant(-0.5)), [1.0]);
        assert_eq!(constants(&Expression::constant(0.25)), [1.0]);
        assert_eq!(constants(&Expression::constant(-1.5)), [1.0, -1.0]);
        let expr = Expression::constant(5.0) / Expression::constant(-0.5);
        for candidate in expr.shrink() {
            assert_ne!(candidate.evaluate(&[]), Err(crate::EvalError::DivisionByZero), "{candidate}");
        }
    }

    #[test]
    fn parameters_move_toward_zero() {
        assert_eq!(parameters(1), [0]);
        assert_eq!(parameters(2), [0, 1]);
        assert_eq!(parameters(3), [0, 1, 2]);
        assert_eq!(parameters(8), [0, 4, 7]);
    }

    #[test]
    fn binary_candidate_order() {
        let expr = Expression::binary(
            BinaryOperator::Divide,
            Expression::parameter(2),
            Expression::constant(3.0),
        );
        let candidates: Vec<_> = expr.shrink().map(|c| c.render()).collect();
        assert_eq!(
            candidates,
            ["1", "x[2]", "3", "(x[0] / 3)", "(x[1] / 3)", "(x[2] / 1)"]
        );
    }

    #[test]
    fn candidates_never_grow() {
        let expr = (Expression::parameter(4) * Expression::constant(6.0))
            - (Expression::constant(9.0) / (Expression::parameter(3) + Expression::constant(2.0)));
        for candidate in expr.shrink() {
            assert!(candidate.node_count() <= expr.node_count(), "{candidate}");
            assert!(candidate.depth() <= expr.depth(), "{candidate}");
            assert!(candidate.max_parameter() <= expr.max_parameter(), "{candidate}");
            assert_ne!(candidate, expr);
        }
        for candidate in expr.shrink().take(3) {
            assert!(candidate.node_count() < expr.node_count(), "{candidate}");
        }
    }

    #[test]
    fn restartable() {
        let expr = Expression::constant(8.0) + Expression::parameter(3);
        let first: Vec<_> = expr.shrink().collect();
        let second: Vec<_> = expr.shrink().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn repeated_shrinking_terminates() {
        let mut expr = (Expression::parameter(4) * Expression::constant(9.0))
            / (Expression::constant(7.5) - (Expression::parameter(2) + Expression::constant(5.0)));
        let mut steps = 0;
        // Always take the least reduced candidate, the slowest descent.
        while let Some(next) = expr.shrink().last() {
            expr = next;
            steps += 1;
            assert!(steps < 1000, "shrinking did not converge: {expr}");
        }
        assert!(expr.is_leaf(), "{expr}");
    }
}
