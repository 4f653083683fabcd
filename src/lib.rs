//! Small arithmetic expression trees.
//!
//! An [`Expression`] is a closed tree of constants, input parameters and
//! binary operators. It can be [evaluated](Expression::evaluate) against a
//! slice of inputs, [rendered](Expression::render) to a fully parenthesized
//! string, and [generated](Generator) at random with
//! [shrinking](Expression::shrink) for property-based tests (see the
//! `proptest` feature).
//!
//! # Example
//!
//! ```rust
//! use sym_expr::*;
//!
//! // 2 * x[1] + 3
//! let expr = Expression::constant(2.0) * Expression::parameter(1) + Expression::constant(3.0);
//! assert_eq!(expr.render(), "((2 * x[1]) + 3)");
//!
//! let inputs = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(expr.evaluate(&inputs), Ok(7.0));
//!
//! let divide_by_zero = Expression::constant(5.0) / Expression::constant(0.0);
//! assert_eq!(divide_by_zero.evaluate(&inputs), Err(EvalError::DivisionByZero));
//! ```

mod error;
mod evaluate;
mod expression;
mod generate;
mod proptests;
mod real;
mod render;
mod shrink;
#[cfg(feature = "proptest")]
mod strategy;

pub use error::*;
pub use expression::*;
pub use generate::*;
pub use real::Real;
pub use shrink::Shrink;
#[cfg(feature = "proptest")]
pub use strategy::*;
