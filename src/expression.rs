use std::ops;

use crate::real::Real;

/// Index into the `&[Real]` inputs passed to expression evaluation.
pub type ParameterId = usize;

/// An arithmetic expression tree.
///
/// Every node exclusively owns its children, so a tree is always finite and
/// acyclic. Dropping the root drops the whole tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    // Constant.
    Constant(Real),

    // Input variable.
    Parameter(ParameterId),

    // Binary real ops.
    BinaryOp {
        op: BinaryOperator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
    ];
}

impl Expression {
    pub fn constant(value: Real) -> Self {
        Self::Constant(value)
    }

    pub fn parameter(index: ParameterId) -> Self {
        Self::Parameter(index)
    }

    /// Takes ownership of two fully constructed subtrees.
    pub fn binary(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Self {
        Self::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn is_leaf(&self) -> bool {
        match self {
            Self::Constant(_) | Self::Parameter(_) => true,
            Self::BinaryOp { .. } => false,
        }
    }

    /// Number of edges on the longest path from this node to a leaf. A leaf
    /// has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Parameter(_) => 0,
            Self::BinaryOp { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Parameter(_) => 1,
            Self::BinaryOp { lhs, rhs, .. } => 1 + lhs.node_count() + rhs.node_count(),
        }
    }

    /// The largest parameter index referenced anywhere in the tree, or `None`
    /// if the expression has no parameters.
    ///
    /// Evaluation succeeds without `IndexOutOfRange` exactly when the inputs
    /// are longer than this index.
    pub fn max_parameter(&self) -> Option<ParameterId> {
        match self {
            Self::Constant(_) => None,
            Self::Parameter(index) => Some(*index),
            Self::BinaryOp { lhs, rhs, .. } => lhs.max_parameter().max(rhs.max_parameter()),
        }
    }
}

impl From<Real> for Expression {
    fn from(value: Real) -> Self {
        Self::Constant(value)
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl ops::$trait for Expression {
            type Output = Expression;

            fn $method(self, rhs: Expression) -> Expression {
                Expression::binary(BinaryOperator::$op, self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, Add);
impl_binary_operator!(Sub, sub, Subtract);
impl_binary_operator!(Mul, mul, Multiply);
impl_binary_operator!(Div, div, Divide);
