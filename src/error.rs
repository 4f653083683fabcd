use thiserror::Error;

use crate::expression::ParameterId;

/// Reasons an [`Expression`](crate::Expression) fails to evaluate.
///
/// Either error aborts the whole evaluation; there is no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right operand of a `Divide` node evaluated to exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A `Parameter` index has no entry in an input vector of length `len`.
    #[error("parameter index {index} out of range for {len} inputs")]
    IndexOutOfRange { index: ParameterId, len: usize },
}

/// Rejected [`GeneratorConfig`](crate::GeneratorConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("leaf probability must lie in [0, 1], got {0}")]
    LeafProbability(f64),

    #[error("constant range {start}..{end} is empty")]
    EmptyConstantRange { start: i32, end: i32 },
}
