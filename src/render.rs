use std::fmt;

use crate::{BinaryOperator, Expression};

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Fully parenthesized form: constants as their decimal value, parameters as
/// `x[i]`, binary nodes as `(lhs op rhs)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Parameter(index) => write!(f, "x[{index}]"),
            Self::BinaryOp { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

impl Expression {
    /// Renders the expression for failure reports and debugging.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_leaves() {
        assert_eq!(Expression::constant(3.5).render(), "3.5");
        assert_eq!(Expression::constant(-2.0).render(), "-2");
        assert_eq!(Expression::parameter(2).render(), "x[2]");
    }

    #[test]
    fn render_binary() {
        let expr = Expression::binary(
            BinaryOperator::Add,
            Expression::constant(1.0),
            Expression::parameter(0),
        );
        assert_eq!(expr.render(), "(1 + x[0])");
    }

    #[test]
    fn render_nested() {
        let expr = (Expression::parameter(0) - Expression::constant(2.0))
            / (Expression::parameter(4) * Expression::constant(0.5));
        assert_eq!(expr.render(), "((x[0] - 2) / (x[4] * 0.5))");
    }

    #[test]
    fn operator_symbols() {
        let symbols: Vec<_> = BinaryOperator::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(symbols, ["+", "-", "*", "/"]);
    }
}
