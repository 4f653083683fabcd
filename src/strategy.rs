//! [`proptest`] integration: generated expressions that shrink on failure.
//!
//! ```rust
//! use proptest::prelude::*;
//! use sym_expr::*;
//!
//! proptest! {
//!     #[test]
//!     fn renders_balanced(expr in arb_expression()) {
//!         let text = expr.render();
//!         prop_assert_eq!(text.matches('(').count(), text.matches(')').count());
//!     }
//! }
//! ```

use proptest::prelude::RngCore;
use proptest::strategy::{NewTree, Strategy, ValueTree};
use proptest::test_runner::TestRunner;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{ConfigError, Expression, Generator, GeneratorConfig};

/// Strategy for expressions of the default [`GeneratorConfig`].
pub fn arb_expression() -> ExpressionStrategy {
    ExpressionStrategy::default()
}

#[derive(Clone, Debug, Default)]
pub struct ExpressionStrategy {
    generator: Generator,
}

impl ExpressionStrategy {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            generator: Generator::new(config)?,
        })
    }
}

impl Strategy for ExpressionStrategy {
    type Tree = ExpressionValueTree;
    type Value = Expression;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        // Our `rand` may differ from the one proptest links.
        let mut rng = StdRng::seed_from_u64(runner.rng().next_u64());
        Ok(ExpressionValueTree::new(self.generator.generate(&mut rng)))
    }
}

/// Walks [`Expression::shrink`] candidates of the smallest expression known
/// to fail.
#[derive(Clone, Debug)]
pub struct ExpressionValueTree {
    /// Smallest known failing expression.
    baseline: Expression,
    /// Candidate under test, if any.
    candidate: Option<Expression>,
    /// Position of the next candidate in `baseline.shrink()`.
    next_candidate: usize,
}

impl ExpressionValueTree {
    pub fn new(expr: Expression) -> Self {
        Self {
            baseline: expr,
            candidate: None,
            next_candidate: 0,
        }
    }

    /// Re-walks the baseline's shrink sequence up to `next_candidate`. Each
    /// step clones the skipped candidates, so one shrink stage costs
    /// O(k^2 * n) for k candidates of an n-node baseline; fine for the trees
    /// the default generator produces.
    fn advance(&mut self) -> bool {
        match self.baseline.shrink().nth(self.next_candidate) {
            Some(candidate) => {
                self.next_candidate += 1;
                self.candidate = Some(candidate);
                true
            }
            None => {
                self.candidate = None;
                false
            }
        }
    }
}

impl ValueTree for ExpressionValueTree {
    type Value = Expression;

    fn current(&self) -> Expression {
        self.candidate.as_ref().unwrap_or(&self.baseline).clone()
    }

    fn simplify(&mut self) -> bool {
        // The current value failed, so it becomes the new baseline.
        if let Some(candidate) = self.candidate.take() {
            log::trace!("shrink accepted {candidate}");
            self.baseline = candidate;
            self.next_candidate = 0;
        }
        self.advance()
    }

    fn complicate(&mut self) -> bool {
        if self.candidate.is_none() {
            return false;
        }
        self.advance()
    }
}
